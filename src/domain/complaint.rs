//! Complaints raised by students.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    New,
    #[serde(rename = "in progress")]
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    /// Resolved and closed complaints carry a resolution date
    pub fn is_settled(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved | ComplaintStatus::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: RecordId,
    pub student_id: RecordId,
    #[schema(example = "Water leakage")]
    pub topic: String,
    pub description: String,
    pub issue_date: NaiveDate,
    pub status: ComplaintStatus,
    /// Staff user handling the complaint
    pub assigned_to: Option<RecordId>,
    pub resolved_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Complaint {
    pub fn new(id: RecordId, data: CreateComplaint, today: NaiveDate) -> Self {
        Self {
            id,
            student_id: data.student_id,
            topic: data.topic,
            description: data.description,
            issue_date: data.issue_date.unwrap_or(today),
            status: data.status.unwrap_or(ComplaintStatus::New),
            assigned_to: data.assigned_to,
            resolved_date: None,
            notes: data.notes,
        }
    }

    /// Apply an admin status change.
    ///
    /// Notes are only replaced by a non-empty value, and the resolution date
    /// is only recorded when the new status settles the complaint.
    pub fn apply_status(&mut self, update: ComplaintStatusUpdate) {
        self.status = update.status;

        if update.assigned_to.is_some() {
            self.assigned_to = update.assigned_to;
        }

        if let Some(notes) = update.notes.filter(|n| !n.is_empty()) {
            self.notes = Some(notes);
        }

        if let Some(date) = update.resolved_date {
            if self.status.is_settled() {
                self.resolved_date = Some(date);
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub student_id: RecordId,
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Defaults to today
    pub issue_date: Option<NaiveDate>,
    pub status: Option<ComplaintStatus>,
    pub assigned_to: Option<RecordId>,
    pub notes: Option<String>,
}

/// Admin status change for a complaint
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStatusUpdate {
    pub status: ComplaintStatus,
    pub assigned_to: Option<RecordId>,
    pub notes: Option<String>,
    pub resolved_date: Option<NaiveDate>,
}

/// Complaint enriched with student details for display
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    #[serde(flatten)]
    pub complaint: Complaint,
    /// Student name
    pub name: String,
    /// Course name of the student
    pub class: String,
    pub contact: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint() -> Complaint {
        Complaint::new(
            1,
            CreateComplaint {
                student_id: 1,
                topic: "Fan broken".to_string(),
                description: "Ceiling fan does not spin".to_string(),
                issue_date: None,
                status: None,
                assigned_to: None,
                notes: Some("reported at desk".to_string()),
            },
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn resolved_date_ignored_while_in_progress() {
        let mut c = complaint();
        c.apply_status(ComplaintStatusUpdate {
            status: ComplaintStatus::InProgress,
            assigned_to: Some(2),
            notes: Some(String::new()),
            resolved_date: NaiveDate::from_ymd_opt(2024, 3, 2),
        });

        assert_eq!(c.status, ComplaintStatus::InProgress);
        assert_eq!(c.assigned_to, Some(2));
        assert_eq!(c.resolved_date, None);
        assert_eq!(c.notes.as_deref(), Some("reported at desk"));
    }

    #[test]
    fn resolved_date_recorded_when_closed() {
        let mut c = complaint();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5);
        c.apply_status(ComplaintStatusUpdate {
            status: ComplaintStatus::Closed,
            assigned_to: None,
            notes: Some("fan replaced".to_string()),
            resolved_date: day,
        });

        assert_eq!(c.resolved_date, day);
        assert_eq!(c.notes.as_deref(), Some("fan replaced"));
    }
}
