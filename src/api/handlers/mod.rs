//! HTTP request handlers.

pub mod access_log_handler;
pub mod attendance_handler;
pub mod auth_handler;
pub mod complaint_handler;
pub mod course_handler;
pub mod dashboard_handler;
pub mod leave_handler;
pub mod room_handler;
pub mod student_handler;

pub use access_log_handler::access_log_routes;
pub use attendance_handler::attendance_routes;
pub use auth_handler::auth_routes;
pub use complaint_handler::complaint_routes;
pub use course_handler::course_routes;
pub use dashboard_handler::dashboard_routes;
pub use leave_handler::leave_routes;
pub use room_handler::room_routes;
pub use student_handler::student_routes;
