//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::MemoryStore;
use crate::services::{
    AccessLogService, AttendanceService, AuthService, ComplaintService, CourseService,
    DashboardService, LeaveService, RoomService, ServiceContainer, Services, StudentService,
};

/// Application state containing all services.
///
/// Fields are public so tests can swap a single service for a mock.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub course_service: Arc<dyn CourseService>,
    pub room_service: Arc<dyn RoomService>,
    pub student_service: Arc<dyn StudentService>,
    pub attendance_service: Arc<dyn AttendanceService>,
    pub leave_service: Arc<dyn LeaveService>,
    pub complaint_service: Arc<dyn ComplaintService>,
    pub access_log_service: Arc<dyn AccessLogService>,
    pub dashboard_service: Arc<dyn DashboardService>,
}

impl AppState {
    /// Fresh seeded store with every service wired to it
    pub fn from_config(config: &Config) -> Self {
        Self::from_store(Arc::new(MemoryStore::seeded(config)))
    }

    /// Wire every service to an existing store
    pub fn from_store(store: Arc<MemoryStore>) -> Self {
        Self::from_container(&Services::from_store(store))
    }

    pub fn from_container(services: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: services.auth(),
            course_service: services.courses(),
            room_service: services.rooms(),
            student_service: services.students(),
            attendance_service: services.attendance(),
            leave_service: services.leave(),
            complaint_service: services.complaints(),
            access_log_service: services.access_logs(),
            dashboard_service: services.dashboard(),
        }
    }
}
