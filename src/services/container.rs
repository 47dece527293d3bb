//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Consumers depend on service traits, not implementations.
//!
//! All services built by [`Services::from_store`] share one store, so a
//! student admitted through one service is immediately visible to the
//! dashboard and the attendance roster.

use std::sync::Arc;

use super::{
    AccessLogManager, AccessLogService, AttendanceManager, AttendanceService, AuthService,
    Authenticator, ComplaintManager, ComplaintService, CourseManager, CourseService,
    DashboardManager, DashboardService, LeaveManager, LeaveService, RoomManager, RoomService,
    StudentManager, StudentService,
};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn courses(&self) -> Arc<dyn CourseService>;
    fn rooms(&self) -> Arc<dyn RoomService>;
    fn students(&self) -> Arc<dyn StudentService>;
    fn attendance(&self) -> Arc<dyn AttendanceService>;
    fn leave(&self) -> Arc<dyn LeaveService>;
    fn complaints(&self) -> Arc<dyn ComplaintService>;
    fn access_logs(&self) -> Arc<dyn AccessLogService>;
    fn dashboard(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth: Arc<dyn AuthService>,
    courses: Arc<dyn CourseService>,
    rooms: Arc<dyn RoomService>,
    students: Arc<dyn StudentService>,
    attendance: Arc<dyn AttendanceService>,
    leave: Arc<dyn LeaveService>,
    complaints: Arc<dyn ComplaintService>,
    access_logs: Arc<dyn AccessLogService>,
    dashboard: Arc<dyn DashboardService>,
}

impl Services {
    /// Wire every service to the same unit of work
    pub fn from_store<U: UnitOfWork + 'static>(uow: Arc<U>) -> Self {
        Self {
            auth: Arc::new(Authenticator::new(uow.clone())),
            courses: Arc::new(CourseManager::new(uow.clone())),
            rooms: Arc::new(RoomManager::new(uow.clone())),
            students: Arc::new(StudentManager::new(uow.clone())),
            attendance: Arc::new(AttendanceManager::new(uow.clone())),
            leave: Arc::new(LeaveManager::new(uow.clone())),
            complaints: Arc::new(ComplaintManager::new(uow.clone())),
            access_logs: Arc::new(AccessLogManager::new(uow.clone())),
            dashboard: Arc::new(DashboardManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.courses.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomService> {
        self.rooms.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.students.clone()
    }

    fn attendance(&self) -> Arc<dyn AttendanceService> {
        self.attendance.clone()
    }

    fn leave(&self) -> Arc<dyn LeaveService> {
        self.leave.clone()
    }

    fn complaints(&self) -> Arc<dyn ComplaintService> {
        self.complaints.clone()
    }

    fn access_logs(&self) -> Arc<dyn AccessLogService> {
        self.access_logs.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{CreateRoom, CreateStudent};
    use crate::infra::MemoryStore;

    #[tokio::test]
    async fn services_share_one_store() {
        let services = Services::from_store(Arc::new(MemoryStore::seeded(&Config::default())));

        let room = services
            .rooms()
            .create_room(CreateRoom {
                room_number: "301".to_string(),
                floor: 3,
                room_type: "single".to_string(),
                capacity: 1,
                status: None,
                description: None,
                wifi: None,
                ac: None,
                attached_toilet: None,
                balcony: None,
            })
            .await
            .unwrap();

        services
            .students()
            .create_student(CreateStudent {
                name: "Dev".to_string(),
                registration_number: "R-1".to_string(),
                course_id: 1,
                room_id: room.id,
                email: None,
                contact_number: None,
                year: None,
                joining_date: None,
                address: None,
                guardian_name: None,
                guardian_contact: None,
                status: None,
            })
            .await
            .unwrap();

        let stats = services.dashboard().stats().await.unwrap();
        assert_eq!(stats.total_students, 1);
        assert_eq!(stats.floor_stats[2].occupancy_rate, 100);
    }
}
