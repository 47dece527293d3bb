//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::{
    access_log_handler, attendance_handler, auth_handler, complaint_handler, course_handler,
    dashboard_handler, leave_handler, room_handler, student_handler,
};
use crate::domain::{
    AccessLog, AccessLogView, AccessStatus, ActivityEntry, Attendance, AttendanceMark,
    AttendanceStatus, Complaint, ComplaintStatus, ComplaintStatusUpdate, ComplaintView, Course,
    CourseDistribution, CreateComplaint, CreateCourse, CreateLeaveRequest, CreateRoom,
    CreateStudent, CreateUser, DashboardStats, FloorStats, LeaveRequest, LeaveRequestView,
    LeaveStatus, Room, RoomStatus, RosterEntry, Student, UpdateCourse, UpdateRoom, UpdateStudent,
    UserResponse,
};
use crate::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hostel Admin API",
        version = "0.1.0",
        description = "Hostel administration: rooms, students, attendance, leave, complaints and access logs",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers((url = "http://localhost:5000", description = "Local development server")),
    paths(
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::change_password,
        course_handler::list_courses,
        course_handler::create_course,
        course_handler::get_course,
        course_handler::update_course,
        course_handler::delete_course,
        room_handler::list_rooms,
        room_handler::create_room,
        room_handler::get_room,
        room_handler::update_room,
        student_handler::list_students,
        student_handler::create_student,
        student_handler::get_student,
        student_handler::update_student,
        student_handler::delete_student,
        attendance_handler::get_roster,
        attendance_handler::submit_attendance,
        leave_handler::list_requests,
        leave_handler::create_request,
        leave_handler::decide_request,
        complaint_handler::list_complaints,
        complaint_handler::create_complaint,
        complaint_handler::update_complaint,
        access_log_handler::list_logs,
        access_log_handler::clear_logs,
        dashboard_handler::stats,
    ),
    components(
        schemas(
            // Records
            Course,
            Room,
            RoomStatus,
            Student,
            Attendance,
            AttendanceStatus,
            LeaveRequest,
            LeaveStatus,
            Complaint,
            ComplaintStatus,
            AccessLog,
            AccessStatus,
            UserResponse,
            // Payloads
            CreateUser,
            CreateCourse,
            UpdateCourse,
            CreateRoom,
            UpdateRoom,
            CreateStudent,
            UpdateStudent,
            AttendanceMark,
            CreateLeaveRequest,
            CreateComplaint,
            ComplaintStatusUpdate,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            auth_handler::LogoutRequest,
            auth_handler::ChangePasswordRequest,
            attendance_handler::SubmitAttendanceRequest,
            attendance_handler::SubmitAttendanceResponse,
            leave_handler::LeaveDecisionRequest,
            // Read models
            RosterEntry,
            LeaveRequestView,
            ComplaintView,
            AccessLogView,
            DashboardStats,
            FloorStats,
            ActivityEntry,
            CourseDistribution,
            MessageResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Console users and sessions"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Rooms", description = "Room inventory and occupancy"),
        (name = "Students", description = "Admissions and room moves"),
        (name = "Attendance", description = "Daily roster and bulk marking"),
        (name = "Leave requests", description = "Leave workflow"),
        (name = "Complaints", description = "Complaint workflow"),
        (name = "Access logs", description = "Session audit trail"),
        (name = "Dashboard", description = "Aggregated statistics")
    )
)]
pub struct ApiDoc;
