//! Course domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{merge, merge_opt, Patch, RecordId};
use crate::config::DEFAULT_RECORD_STATUS;

/// Academic course students are enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[schema(example = 1)]
    pub id: RecordId,
    #[schema(example = "B.Tech Computer Science")]
    pub name: String,
    /// Unique course code
    #[schema(example = "BTECH-CSE")]
    pub code: String,
    /// Duration in years
    #[schema(example = 4)]
    pub duration: i32,
    pub description: Option<String>,
    #[schema(example = "active")]
    pub status: String,
}

impl Course {
    pub fn new(id: RecordId, data: CreateCourse) -> Self {
        Self {
            id,
            name: data.name,
            code: data.code,
            duration: data.duration,
            description: data.description,
            status: data.status.unwrap_or_else(|| DEFAULT_RECORD_STATUS.to_string()),
        }
    }
}

/// Course creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "Course name is required"))]
    #[schema(example = "B.Tech Computer Science")]
    pub name: String,
    #[validate(length(min = 1, message = "Course code is required"))]
    #[schema(example = "BTECH-CSE")]
    pub code: String,
    #[validate(range(min = 1, message = "Duration must be at least one year"))]
    #[schema(example = 4)]
    pub duration: i32,
    pub description: Option<String>,
    #[schema(example = "active")]
    pub status: Option<String>,
}

/// Course update payload; absent fields are preserved
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    #[validate(length(min = 1, message = "Course name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Course code cannot be empty"))]
    pub code: Option<String>,
    #[validate(range(min = 1, message = "Duration must be at least one year"))]
    pub duration: Option<i32>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl Patch<Course> for UpdateCourse {
    fn apply_to(self, course: &mut Course) {
        merge(&mut course.name, self.name);
        merge(&mut course.code, self.code);
        merge(&mut course.duration, self.duration);
        merge_opt(&mut course.description, self.description);
        merge(&mut course.status, self.status);
    }
}
