//! Leave request service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateLeaveRequest, LeaveRequest, LeaveRequestView, LeaveStatus, RecordId};
use crate::engine::enrichment;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LeaveService: Send + Sync {
    /// Requests with student details, optionally of one status
    async fn list_requests(&self, status: Option<LeaveStatus>) -> AppResult<Vec<LeaveRequestView>>;

    async fn create_request(&self, data: CreateLeaveRequest) -> AppResult<LeaveRequest>;

    /// Approve or reject a request on behalf of `decided_by`
    async fn decide_request(
        &self,
        id: RecordId,
        status: LeaveStatus,
        decided_by: RecordId,
    ) -> AppResult<LeaveRequest>;
}

pub struct LeaveManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LeaveManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LeaveService for LeaveManager<U> {
    async fn list_requests(&self, status: Option<LeaveStatus>) -> AppResult<Vec<LeaveRequestView>> {
        Ok(self.uow.read(|t| enrichment::leave_requests(t, status)))
    }

    async fn create_request(&self, data: CreateLeaveRequest) -> AppResult<LeaveRequest> {
        let request = self
            .uow
            .transaction(|t| Ok(t.leave_requests.insert_with(|id| LeaveRequest::new(id, data))))?;

        tracing::info!(request_id = request.id, student_id = request.student_id, "Leave requested");
        Ok(request)
    }

    async fn decide_request(
        &self,
        id: RecordId,
        status: LeaveStatus,
        decided_by: RecordId,
    ) -> AppResult<LeaveRequest> {
        if !status.is_decided() {
            return Err(AppError::validation("Status must be approved or rejected"));
        }

        let request = self.uow.transaction(|t| {
            let request = t
                .leave_requests
                .find_by_id_mut(id)
                .ok_or_not_found("Leave request")?;
            request.decide(status, decided_by);
            Ok(request.clone())
        })?;

        tracing::info!(request_id = id, status = request.status.as_str(), decided_by, "Leave decided");
        Ok(request)
    }
}
