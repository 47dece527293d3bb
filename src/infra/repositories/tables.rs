//! The full set of record tables held by the store.

use super::base::{ReadRepository, Table};
use crate::domain::{
    AccessLog, Attendance, Complaint, Course, LeaveRequest, RecordId, Room, Student, User,
};

/// One table per record type
#[derive(Debug, Clone)]
pub struct Tables {
    pub users: Table<User>,
    pub courses: Table<Course>,
    pub rooms: Table<Room>,
    pub students: Table<Student>,
    pub attendances: Table<Attendance>,
    pub leave_requests: Table<LeaveRequest>,
    pub complaints: Table<Complaint>,
    pub access_logs: Table<AccessLog>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: Table::new("User"),
            courses: Table::new("Course"),
            rooms: Table::new("Room"),
            students: Table::new("Student"),
            attendances: Table::new("Attendance"),
            leave_requests: Table::new("Leave request"),
            complaints: Table::new("Complaint"),
            access_logs: Table::new("Access log"),
        }
    }
}

impl Tables {
    /// Find a user by login name
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.find_first(|u| u.username == username)
    }

    /// Whether any student is enrolled in the course
    pub fn course_has_students(&self, course_id: RecordId) -> bool {
        self.students
            .find_first(|s| s.course_id == course_id)
            .is_some()
    }
}
