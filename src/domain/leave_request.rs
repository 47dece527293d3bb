//! Leave requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Whether the request has been decided
    pub fn is_decided(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: RecordId,
    pub student_id: RecordId,
    #[schema(example = "Home Visit")]
    pub permission_type: String,
    pub reason: String,
    pub leave_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub place_of_visit: Option<String>,
    pub contact_number: Option<String>,
    pub status: LeaveStatus,
    /// User who approved or rejected the request
    pub approved_by: Option<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn new(id: RecordId, data: CreateLeaveRequest) -> Self {
        Self {
            id,
            student_id: data.student_id,
            permission_type: data.permission_type,
            reason: data.reason,
            leave_date: data.leave_date,
            return_date: data.return_date,
            place_of_visit: data.place_of_visit,
            contact_number: data.contact_number,
            status: data.status.unwrap_or(LeaveStatus::Pending),
            approved_by: None,
            created_at: Utc::now(),
        }
    }

    /// Record an approval or rejection by a staff user
    pub fn decide(&mut self, status: LeaveStatus, decided_by: RecordId) {
        self.status = status;
        self.approved_by = Some(decided_by);
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub student_id: RecordId,
    #[validate(length(min = 1, message = "Permission type is required"))]
    #[schema(example = "Home Visit")]
    pub permission_type: String,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    pub leave_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub place_of_visit: Option<String>,
    pub contact_number: Option<String>,
    pub status: Option<LeaveStatus>,
}

/// Leave request enriched with student details for display
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestView {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub student_name: String,
    pub registration_number: String,
    /// Course name of the student
    pub stream: String,
}
