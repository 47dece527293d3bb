//! Domain layer - Core business entities and logic
//!
//! This module contains the hostel records (users, courses, rooms,
//! students, attendance, leave requests, complaints and access logs)
//! together with the DTOs used to create and modify them.
//!
//! Domain types have no infrastructure dependencies.

pub mod access_log;
pub mod attendance;
pub mod complaint;
pub mod course;
pub mod dashboard;
pub mod leave_request;
pub mod room;
pub mod student;
pub mod user;

pub use access_log::{AccessLog, AccessLogView, AccessStatus, NewAccessLog};
pub use attendance::{Attendance, AttendanceMark, AttendanceStatus, RosterEntry};
pub use complaint::{Complaint, ComplaintStatus, ComplaintStatusUpdate, ComplaintView, CreateComplaint};
pub use course::{Course, CreateCourse, UpdateCourse};
pub use dashboard::{ActivityEntry, CourseDistribution, DashboardStats, FloorStats};
pub use leave_request::{CreateLeaveRequest, LeaveRequest, LeaveRequestView, LeaveStatus};
pub use room::{CreateRoom, Room, RoomStatus, UpdateRoom};
pub use student::{CreateStudent, Student, UpdateStudent};
pub use user::{CreateUser, User, UserResponse};

/// Integer identifier assigned by the store, unique per record type.
pub type RecordId = i64;

/// Shallow merge contract for partial updates.
///
/// Every field present in the patch overwrites the matching field of the
/// target; absent fields leave the target untouched.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

/// Overwrite `slot` when the patch carries a value.
pub(crate) fn merge<V>(slot: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Overwrite an optional field when the patch carries a value.
pub(crate) fn merge_opt<V>(slot: &mut Option<V>, value: Option<V>) {
    if value.is_some() {
        *slot = value;
    }
}
