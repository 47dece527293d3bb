//! Student service - Admissions, transfers and departures.
//!
//! Each mutation runs the matching occupancy hook inside the same
//! transaction as the student write, so room counts and room assignments
//! never disagree.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateStudent, RecordId, Student, UpdateStudent};
use crate::engine::occupancy;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{DeleteRepository, ReadRepository, Tables, UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Optional filters for student listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub course_id: Option<RecordId>,
    pub room_id: Option<RecordId>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn list_students(&self, filter: StudentFilter) -> AppResult<Vec<Student>>;

    async fn get_student(&self, id: RecordId) -> AppResult<Student>;

    /// Admit a student; the room must have a free bed
    async fn create_student(&self, data: CreateStudent) -> AppResult<Student>;

    /// Update a student; a new `room_id` moves them between rooms
    async fn update_student(&self, id: RecordId, data: UpdateStudent) -> AppResult<Student>;

    async fn delete_student(&self, id: RecordId) -> AppResult<()>;
}

fn ensure_registration_free(
    tables: &Tables,
    registration_number: &str,
    except: Option<RecordId>,
) -> AppResult<()> {
    let taken = tables
        .students
        .find_first(|s| s.registration_number == registration_number && Some(s.id) != except)
        .is_some();
    if taken {
        return Err(AppError::conflict(format!(
            "Registration number {} already exists",
            registration_number
        )));
    }
    Ok(())
}

pub struct StudentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StudentService for StudentManager<U> {
    async fn list_students(&self, filter: StudentFilter) -> AppResult<Vec<Student>> {
        Ok(self.uow.read(|t| {
            t.students.find_where(|s| {
                filter.course_id.map_or(true, |c| s.course_id == c)
                    && filter.room_id.map_or(true, |r| s.room_id == r)
            })
        }))
    }

    async fn get_student(&self, id: RecordId) -> AppResult<Student> {
        self.uow.read(|t| t.students.get(id))
    }

    async fn create_student(&self, data: CreateStudent) -> AppResult<Student> {
        let student = self.uow.transaction(|t| {
            ensure_registration_free(t, &data.registration_number, None)?;
            occupancy::on_student_created(&mut t.rooms, data.room_id)?;
            Ok(t.students.insert_with(|id| Student::new(id, data)))
        })?;

        tracing::info!(
            student_id = student.id,
            room_id = student.room_id,
            "Student admitted"
        );
        Ok(student)
    }

    async fn update_student(&self, id: RecordId, data: UpdateStudent) -> AppResult<Student> {
        let (student, previous_room) = self.uow.transaction(|t| {
            let entity = t.students.entity();
            let previous_room = t.students.find_by_id(id).ok_or_not_found(entity)?.room_id;
            if let Some(number) = &data.registration_number {
                ensure_registration_free(t, number, Some(id))?;
            }
            if let Some(room_id) = data.room_id {
                occupancy::on_student_room_changed(&mut t.rooms, previous_room, room_id)?;
            }
            Ok((t.students.update(id, data)?, previous_room))
        })?;

        if student.room_id != previous_room {
            tracing::info!(
                student_id = id,
                from = previous_room,
                to = student.room_id,
                "Student moved"
            );
        }
        Ok(student)
    }

    async fn delete_student(&self, id: RecordId) -> AppResult<()> {
        let room_id = self.uow.transaction(|t| {
            let entity = t.students.entity();
            let room_id = t.students.find_by_id(id).ok_or_not_found(entity)?.room_id;
            t.students.delete_by_id(id);
            occupancy::on_student_deleted(&mut t.rooms, room_id);
            Ok(room_id)
        })?;

        tracing::info!(student_id = id, room_id, "Student removed");
        Ok(())
    }
}
