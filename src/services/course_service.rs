//! Course service - Course catalogue with the enrolment guard on delete.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Course, CreateCourse, RecordId, UpdateCourse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{DeleteRepository, ReadRepository, Tables, UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseService: Send + Sync {
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    async fn get_course(&self, id: RecordId) -> AppResult<Course>;

    async fn create_course(&self, data: CreateCourse) -> AppResult<Course>;

    async fn update_course(&self, id: RecordId, data: UpdateCourse) -> AppResult<Course>;

    /// Remove a course. Fails with Conflict while any student is enrolled.
    async fn delete_course(&self, id: RecordId) -> AppResult<()>;
}

fn ensure_code_free(tables: &Tables, code: &str, except: Option<RecordId>) -> AppResult<()> {
    let taken = tables
        .courses
        .find_first(|c| c.code == code && Some(c.id) != except)
        .is_some();
    if taken {
        return Err(AppError::conflict(format!("Course code {} already exists", code)));
    }
    Ok(())
}

pub struct CourseManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CourseService for CourseManager<U> {
    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        Ok(self.uow.read(|t| t.courses.find_all()))
    }

    async fn get_course(&self, id: RecordId) -> AppResult<Course> {
        self.uow.read(|t| t.courses.get(id))
    }

    async fn create_course(&self, data: CreateCourse) -> AppResult<Course> {
        let course = self.uow.transaction(|t| {
            ensure_code_free(t, &data.code, None)?;
            Ok(t.courses.insert_with(|id| Course::new(id, data)))
        })?;

        tracing::info!(course_id = course.id, code = %course.code, "Course created");
        Ok(course)
    }

    async fn update_course(&self, id: RecordId, data: UpdateCourse) -> AppResult<Course> {
        self.uow.transaction(|t| {
            t.courses.find_by_id(id).ok_or_not_found(t.courses.entity())?;
            if let Some(code) = &data.code {
                ensure_code_free(t, code, Some(id))?;
            }
            t.courses.update(id, data)
        })
    }

    async fn delete_course(&self, id: RecordId) -> AppResult<()> {
        self.uow.transaction(|t| {
            t.courses.find_by_id(id).ok_or_not_found(t.courses.entity())?;
            if t.course_has_students(id) {
                tracing::warn!(course_id = id, "Course delete blocked by enrolled students");
                return Err(AppError::conflict(
                    "Cannot delete course with enrolled students",
                ));
            }
            t.courses.delete_by_id(id);
            Ok(())
        })?;

        tracing::info!(course_id = id, "Course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateStudent, Student};
    use crate::infra::MemoryStore;

    fn course(code: &str) -> CreateCourse {
        CreateCourse {
            name: format!("Course {}", code),
            code: code.to_string(),
            duration: 3,
            description: None,
            status: None,
        }
    }

    fn enrol(store: &MemoryStore, course_id: RecordId) {
        store
            .transaction(|t| {
                t.students.insert_with(|id| {
                    Student::new(
                        id,
                        CreateStudent {
                            name: "Kiran".to_string(),
                            registration_number: format!("R{}", id),
                            course_id,
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
                Ok(())
            })
            .unwrap();
    }

    #[tokio::test]
    async fn delete_is_blocked_while_students_are_enrolled() {
        let store = Arc::new(MemoryStore::new());
        let courses = CourseManager::new(store.clone());
        let c = courses.create_course(course("BBA")).await.unwrap();
        enrol(&store, c.id);

        let err = courses.delete_course(c.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(courses.get_course(c.id).await.unwrap(), c);
        assert_eq!(store.read(|t| t.students.count()), 1);
    }

    #[tokio::test]
    async fn delete_without_students_removes_course() {
        let courses = CourseManager::new(Arc::new(MemoryStore::new()));
        let c = courses.create_course(course("MBA")).await.unwrap();

        courses.delete_course(c.id).await.unwrap();
        assert_eq!(
            courses.get_course(c.id).await.unwrap_err(),
            AppError::NotFound("Course")
        );
        assert_eq!(
            courses.delete_course(c.id).await.unwrap_err(),
            AppError::NotFound("Course")
        );
    }

    #[tokio::test]
    async fn codes_are_unique() {
        let courses = CourseManager::new(Arc::new(MemoryStore::new()));
        courses.create_course(course("CSE")).await.unwrap();
        let other = courses.create_course(course("ECE")).await.unwrap();

        assert!(courses.create_course(course("CSE")).await.is_err());

        let clash = UpdateCourse {
            code: Some("CSE".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            courses.update_course(other.id, clash).await,
            Err(AppError::Conflict(_))
        ));

        let same = UpdateCourse {
            code: Some("ECE".to_string()),
            duration: Some(5),
            ..Default::default()
        };
        assert_eq!(courses.update_course(other.id, same).await.unwrap().duration, 5);
    }
}
