//! Student domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{merge, merge_opt, Patch, RecordId};
use crate::config::DEFAULT_RECORD_STATUS;

/// Resident student with one room assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[schema(example = 1)]
    pub id: RecordId,
    #[schema(example = "Asha Verma")]
    pub name: String,
    /// Unique registration number
    #[schema(example = "CSE2024001")]
    pub registration_number: String,
    pub course_id: RecordId,
    pub room_id: RecordId,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    /// Current year of study
    pub year: Option<i32>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    #[schema(example = "active")]
    pub status: String,
}

impl Student {
    pub fn new(id: RecordId, data: CreateStudent) -> Self {
        Self {
            id,
            name: data.name,
            registration_number: data.registration_number,
            course_id: data.course_id,
            room_id: data.room_id,
            email: data.email,
            contact_number: data.contact_number,
            year: data.year,
            joining_date: data.joining_date,
            address: data.address,
            guardian_name: data.guardian_name,
            guardian_contact: data.guardian_contact,
            status: data.status.unwrap_or_else(|| DEFAULT_RECORD_STATUS.to_string()),
        }
    }
}

/// Student admission payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Asha Verma")]
    pub name: String,
    #[validate(length(min = 1, message = "Registration number is required"))]
    #[schema(example = "CSE2024001")]
    pub registration_number: String,
    #[schema(example = 1)]
    pub course_id: RecordId,
    #[schema(example = 1)]
    pub room_id: RecordId,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub contact_number: Option<String>,
    #[validate(range(min = 1, max = 6, message = "Year must be between 1 and 6"))]
    pub year: Option<i32>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub status: Option<String>,
}

/// Student update payload; absent fields are preserved
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Registration number cannot be empty"))]
    pub registration_number: Option<String>,
    pub course_id: Option<RecordId>,
    /// Moving a student updates occupancy of both rooms
    pub room_id: Option<RecordId>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub contact_number: Option<String>,
    #[validate(range(min = 1, max = 6, message = "Year must be between 1 and 6"))]
    pub year: Option<i32>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub status: Option<String>,
}

impl Patch<Student> for UpdateStudent {
    fn apply_to(self, student: &mut Student) {
        merge(&mut student.name, self.name);
        merge(&mut student.registration_number, self.registration_number);
        merge(&mut student.course_id, self.course_id);
        merge(&mut student.room_id, self.room_id);
        merge_opt(&mut student.email, self.email);
        merge_opt(&mut student.contact_number, self.contact_number);
        merge_opt(&mut student.year, self.year);
        merge_opt(&mut student.joining_date, self.joining_date);
        merge_opt(&mut student.address, self.address);
        merge_opt(&mut student.guardian_name, self.guardian_name);
        merge_opt(&mut student.guardian_contact, self.guardian_contact);
        merge(&mut student.status, self.status);
    }
}
