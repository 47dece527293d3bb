//! Read-time joins for display.
//!
//! Pure functions over a read-only view of the tables. A dangling
//! reference enriches to empty strings instead of failing.

use chrono::NaiveDate;

use crate::domain::{
    AccessLogView, ComplaintStatus, ComplaintView, Course, LeaveRequestView, LeaveStatus,
    RecordId, RosterEntry, Student,
};
use crate::infra::{ReadRepository, Tables};

fn student<'a>(tables: &'a Tables, id: RecordId) -> Option<&'a Student> {
    tables.students.find_by_id(id)
}

fn course_of<'a>(tables: &'a Tables, student: Option<&Student>) -> Option<&'a Course> {
    student.and_then(|s| tables.courses.find_by_id(s.course_id))
}

fn text<T>(value: Option<&T>, field: impl FnOnce(&T) -> &str) -> String {
    value.map(field).unwrap_or_default().to_string()
}

/// Attendance roster for a day: one row per student (optionally only a
/// course's students), unmarked students included with no status.
pub fn attendance_roster(
    tables: &Tables,
    date: NaiveDate,
    course_id: Option<RecordId>,
) -> Vec<RosterEntry> {
    tables
        .students
        .values()
        .filter(|s| course_id.map_or(true, |c| s.course_id == c))
        .map(|s| {
            let mark = tables
                .attendances
                .find_first(|a| a.student_id == s.id && a.date == date);
            let course = tables.courses.find_by_id(s.course_id);
            let room = tables.rooms.find_by_id(s.room_id);

            RosterEntry {
                student_id: s.id,
                name: s.name.clone(),
                registration_number: s.registration_number.clone(),
                course: text(course, |c| c.name.as_str()),
                room_number: text(room, |r| r.room_number.as_str()),
                attendance: mark.map(|a| a.status),
                notes: text(mark, |a| a.notes.as_str()),
            }
        })
        .collect()
}

/// Leave requests, optionally filtered by status, with student details
pub fn leave_requests(tables: &Tables, status: Option<LeaveStatus>) -> Vec<LeaveRequestView> {
    tables
        .leave_requests
        .values()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .map(|r| {
            let student = student(tables, r.student_id);
            let course = course_of(tables, student);

            LeaveRequestView {
                request: r.clone(),
                student_name: text(student, |s| s.name.as_str()),
                registration_number: text(student, |s| s.registration_number.as_str()),
                stream: text(course, |c| c.name.as_str()),
            }
        })
        .collect()
}

/// Complaints, optionally filtered by status, with student details
pub fn complaints(tables: &Tables, status: Option<ComplaintStatus>) -> Vec<ComplaintView> {
    tables
        .complaints
        .values()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .map(|c| {
            let student = student(tables, c.student_id);
            let course = course_of(tables, student);

            ComplaintView {
                complaint: c.clone(),
                name: text(student, |s| s.name.as_str()),
                class: text(course, |c| c.name.as_str()),
                contact: text(student, |s| s.contact_number.as_deref().unwrap_or_default()),
                email: text(student, |s| s.email.as_deref().unwrap_or_default()),
            }
        })
        .collect()
}

/// Access logs filtered by login day and/or user, with user identity
pub fn access_logs(
    tables: &Tables,
    date: Option<NaiveDate>,
    user_id: Option<RecordId>,
) -> Vec<AccessLogView> {
    tables
        .access_logs
        .values()
        .filter(|l| date.map_or(true, |d| l.login_time.date_naive() == d))
        .filter(|l| user_id.map_or(true, |u| l.user_id == u))
        .map(|l| {
            let user = tables.users.find_by_id(l.user_id);

            AccessLogView {
                log: l.clone(),
                user_email: text(user, |u| u.email.as_deref().unwrap_or_default()),
                username: text(user, |u| u.username.as_str()),
                user_type: text(user, |u| u.user_type.as_str()),
            }
        })
        .collect()
}
