//! Daily attendance records and the roster read model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One student's attendance for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: RecordId,
    pub student_id: RecordId,
    /// Calendar day; at most one record per student per day
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: String,
}

/// A single entry of a bulk attendance submission
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    #[schema(example = 5)]
    pub student_id: RecordId,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// Roster row: a student joined with their attendance for the day.
///
/// `attendance` is `None` when the student has not been marked yet,
/// which is distinct from being marked absent.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub student_id: RecordId,
    pub name: String,
    pub registration_number: String,
    /// Course name
    pub course: String,
    pub room_number: String,
    pub attendance: Option<AttendanceStatus>,
    pub notes: String,
}
