//! Complaint service.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{
    Complaint, ComplaintStatus, ComplaintStatusUpdate, ComplaintView, CreateComplaint, RecordId,
};
use crate::engine::enrichment;
use crate::errors::{AppResult, OptionExt};
use crate::infra::{UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ComplaintService: Send + Sync {
    async fn list_complaints(&self, status: Option<ComplaintStatus>) -> AppResult<Vec<ComplaintView>>;

    /// File a complaint; the issue date defaults to today
    async fn create_complaint(&self, data: CreateComplaint) -> AppResult<Complaint>;

    async fn update_status(&self, id: RecordId, update: ComplaintStatusUpdate) -> AppResult<Complaint>;
}

pub struct ComplaintManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ComplaintManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ComplaintService for ComplaintManager<U> {
    async fn list_complaints(&self, status: Option<ComplaintStatus>) -> AppResult<Vec<ComplaintView>> {
        Ok(self.uow.read(|t| enrichment::complaints(t, status)))
    }

    async fn create_complaint(&self, data: CreateComplaint) -> AppResult<Complaint> {
        let today = Utc::now().date_naive();
        let complaint = self
            .uow
            .transaction(|t| Ok(t.complaints.insert_with(|id| Complaint::new(id, data, today))))?;

        tracing::info!(complaint_id = complaint.id, topic = %complaint.topic, "Complaint filed");
        Ok(complaint)
    }

    async fn update_status(&self, id: RecordId, update: ComplaintStatusUpdate) -> AppResult<Complaint> {
        self.uow.transaction(|t| {
            let complaint = t
                .complaints
                .find_by_id_mut(id)
                .ok_or_not_found("Complaint")?;
            complaint.apply_status(update);
            tracing::debug!(complaint_id = id, status = ?complaint.status, "Complaint status changed");
            Ok(complaint.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MemoryStore;
    use chrono::NaiveDate;

    fn complaint() -> CreateComplaint {
        CreateComplaint {
            student_id: 3,
            topic: "Water leakage".to_string(),
            description: "Bathroom tap leaks".to_string(),
            issue_date: None,
            status: None,
            assigned_to: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn defaults_to_new_and_today() {
        let complaints = ComplaintManager::new(Arc::new(MemoryStore::new()));
        let c = complaints.create_complaint(complaint()).await.unwrap();
        assert_eq!(c.status, ComplaintStatus::New);
        assert_eq!(c.issue_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn resolution_flow() {
        let complaints = ComplaintManager::new(Arc::new(MemoryStore::new()));
        let c = complaints.create_complaint(complaint()).await.unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 9, 9);

        let updated = complaints
            .update_status(
                c.id,
                ComplaintStatusUpdate {
                    status: ComplaintStatus::Resolved,
                    assigned_to: Some(1),
                    notes: Some("plumber visited".to_string()),
                    resolved_date: day,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.resolved_date, day);
        assert_eq!(updated.assigned_to, Some(1));

        let resolved = complaints
            .list_complaints(Some(ComplaintStatus::Resolved))
            .await
            .unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "");
    }

    #[tokio::test]
    async fn missing_complaint_is_not_found() {
        let complaints = ComplaintManager::new(Arc::new(MemoryStore::new()));
        let err = complaints
            .update_status(
                5,
                ComplaintStatusUpdate {
                    status: ComplaintStatus::Closed,
                    assigned_to: None,
                    notes: None,
                    resolved_date: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, AppError::NotFound("Complaint"));
    }
}
