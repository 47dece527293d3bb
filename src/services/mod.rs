//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the engines over a Unit of Work.
//! Handlers depend on the traits only, so any service can be replaced by
//! a mock in tests.

mod access_log_service;
mod attendance_service;
mod auth_service;
mod complaint_service;
pub mod container;
mod course_service;
mod dashboard_service;
mod leave_service;
mod room_service;
mod student_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use access_log_service::{AccessLogManager, AccessLogService};
pub use attendance_service::{AttendanceManager, AttendanceService};
pub use auth_service::{AuthService, Authenticator, ClientInfo};
pub use complaint_service::{ComplaintManager, ComplaintService};
pub use course_service::{CourseManager, CourseService};
pub use dashboard_service::{DashboardManager, DashboardService};
pub use leave_service::{LeaveManager, LeaveService};
pub use room_service::{RoomFilter, RoomManager, RoomService};
pub use student_service::{StudentFilter, StudentManager, StudentService};

#[cfg(any(test, feature = "test-utils"))]
pub use access_log_service::MockAccessLogService;
#[cfg(any(test, feature = "test-utils"))]
pub use attendance_service::MockAttendanceService;
#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use complaint_service::MockComplaintService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use course_service::MockCourseService;
#[cfg(any(test, feature = "test-utils"))]
pub use dashboard_service::MockDashboardService;
#[cfg(any(test, feature = "test-utils"))]
pub use leave_service::MockLeaveService;
#[cfg(any(test, feature = "test-utils"))]
pub use room_service::MockRoomService;
#[cfg(any(test, feature = "test-utils"))]
pub use student_service::MockStudentService;
