//! Bulk attendance reconciliation.
//!
//! Upserts one attendance row per (student, day). Matching is done on the
//! calendar date, so a second submission for the same day updates the
//! existing row instead of adding another.

use chrono::NaiveDate;

use crate::domain::{Attendance, AttendanceMark};
use crate::infra::{ReadRepository, Table, WriteRepository};

/// Apply `marks` for `date`, returning the stored rows in input order.
pub fn reconcile(
    attendances: &mut Table<Attendance>,
    date: NaiveDate,
    marks: Vec<AttendanceMark>,
) -> Vec<Attendance> {
    marks
        .into_iter()
        .map(|mark| upsert(attendances, date, mark))
        .collect()
}

fn upsert(attendances: &mut Table<Attendance>, date: NaiveDate, mark: AttendanceMark) -> Attendance {
    let existing = attendances
        .find_first(|a| a.student_id == mark.student_id && a.date == date)
        .map(|a| a.id);

    let notes = mark.notes.filter(|n| !n.is_empty());

    if let Some(id) = existing {
        if let Some(row) = attendances.find_by_id_mut(id) {
            row.status = mark.status;
            if let Some(notes) = notes {
                row.notes = notes;
            }
            return row.clone();
        }
    }

    attendances.insert_with(|id| Attendance {
        id,
        student_id: mark.student_id,
        date,
        status: mark.status,
        notes: notes.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttendanceStatus::{Absent, Present};
    use crate::domain::{AttendanceStatus, RecordId};

    fn mark(student_id: RecordId, status: AttendanceStatus, notes: Option<&str>) -> AttendanceMark {
        AttendanceMark {
            student_id,
            status,
            notes: notes.map(str::to_string),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn repeated_submission_keeps_one_row() {
        let mut table = Table::new("Attendance");
        reconcile(&mut table, day(1), vec![mark(5, Present, None)]);
        let rows = reconcile(&mut table, day(1), vec![mark(5, Present, None)]);

        assert_eq!(table.count(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].status, Present);
    }

    #[test]
    fn update_preserves_notes_unless_new_ones_given() {
        let mut table = Table::new("Attendance");
        reconcile(&mut table, day(1), vec![mark(5, Absent, Some("fever"))]);

        let rows = reconcile(&mut table, day(1), vec![mark(5, Present, Some(""))]);
        assert_eq!(rows[0].status, Present);
        assert_eq!(rows[0].notes, "fever");

        let rows = reconcile(&mut table, day(1), vec![mark(5, Absent, Some("left early"))]);
        assert_eq!(rows[0].notes, "left early");
    }

    #[test]
    fn different_days_get_separate_rows() {
        let mut table = Table::new("Attendance");
        reconcile(&mut table, day(1), vec![mark(5, Present, None)]);
        reconcile(&mut table, day(2), vec![mark(5, Absent, None)]);
        assert_eq!(table.count(), 2);
    }

    #[test]
    fn duplicates_within_one_batch_collapse() {
        let mut table = Table::new("Attendance");
        let rows = reconcile(
            &mut table,
            day(3),
            vec![mark(1, Present, None), mark(2, Absent, None), mark(1, Absent, None)],
        );

        assert_eq!(table.count(), 2);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 1]);
        assert_eq!(table.find_by_id(1).unwrap().status, Absent);
    }
}
