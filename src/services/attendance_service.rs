//! Attendance service - Daily roster and bulk marking.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::{Attendance, AttendanceMark, RecordId, RosterEntry};
use crate::engine::{enrichment, reconciler};
use crate::errors::{AppError, AppResult};
use crate::infra::{ReadRepository, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AttendanceService: Send + Sync {
    /// Every student (optionally of one course) with their mark for `date`
    async fn roster(&self, date: NaiveDate, course_id: Option<RecordId>) -> AppResult<Vec<RosterEntry>>;

    /// Upsert a batch of marks for `date`.
    ///
    /// All-or-nothing: a mark for an unknown student rejects the batch.
    async fn submit(&self, date: NaiveDate, marks: Vec<AttendanceMark>) -> AppResult<Vec<Attendance>>;
}

pub struct AttendanceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AttendanceManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AttendanceService for AttendanceManager<U> {
    async fn roster(&self, date: NaiveDate, course_id: Option<RecordId>) -> AppResult<Vec<RosterEntry>> {
        Ok(self
            .uow
            .read(|t| enrichment::attendance_roster(t, date, course_id)))
    }

    async fn submit(&self, date: NaiveDate, marks: Vec<AttendanceMark>) -> AppResult<Vec<Attendance>> {
        let count = marks.len();
        let rows = self.uow.transaction(|t| {
            if let Some(unknown) = marks
                .iter()
                .find(|m| t.students.find_by_id(m.student_id).is_none())
            {
                return Err(AppError::validation(format!(
                    "Student {} does not exist",
                    unknown.student_id
                )));
            }
            Ok(reconciler::reconcile(&mut t.attendances, date, marks))
        })?;

        tracing::info!(%date, marks = count, "Attendance recorded");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttendanceStatus, CreateStudent, Student};
    use crate::infra::{MemoryStore, WriteRepository};

    fn store_with_students(n: usize) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .transaction(|t| {
                for _ in 0..n {
                    t.students.insert_with(|id| {
                        Student::new(
                            id,
                            CreateStudent {
                                name: format!("S{}", id),
                                registration_number: format!("REG{}", id),
                                course_id: 1,
                                room_id: 1,
                                email: None,
                                contact_number: None,
                                year: None,
                                joining_date: None,
                                address: None,
                                guardian_name: None,
                                guardian_contact: None,
                                status: None,
                            },
                        )
                    });
                }
                Ok(())
            })
            .unwrap();
        store
    }

    fn present(student_id: RecordId) -> AttendanceMark {
        AttendanceMark {
            student_id,
            status: AttendanceStatus::Present,
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[tokio::test]
    async fn unknown_student_rejects_the_whole_batch() {
        let store = store_with_students(2);
        let attendance = AttendanceManager::new(store.clone());

        let err = attendance
            .submit(today(), vec![present(1), present(42)])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.read(|t| t.attendances.count()), 0);
    }

    #[tokio::test]
    async fn roster_reflects_submission() {
        let attendance = AttendanceManager::new(store_with_students(2));
        attendance.submit(today(), vec![present(2)]).await.unwrap();

        let roster = attendance.roster(today(), None).await.unwrap();
        assert_eq!(roster[0].attendance, None);
        assert_eq!(roster[1].attendance, Some(AttendanceStatus::Present));
    }
}
