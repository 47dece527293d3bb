//! Leave request handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateLeaveRequest, LeaveRequest, LeaveRequestView, LeaveStatus, RecordId};
use crate::errors::AppResult;
use crate::types::Created;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaveQuery {
    #[param(value_type = Option<String>, example = "pending")]
    pub status: Option<LeaveStatus>,
}

/// Approval or rejection of a leave request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionRequest {
    /// `approved` or `rejected`
    pub status: LeaveStatus,
    /// Deciding staff user
    #[schema(example = 1)]
    pub approved_by: RecordId,
}

pub fn leave_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id", put(decide_request))
}

/// List leave requests with student details
#[utoipa::path(
    get,
    path = "/api/leave-requests",
    tag = "Leave requests",
    params(LeaveQuery),
    responses((status = 200, description = "Leave requests", body = Vec<LeaveRequestView>))
)]
pub async fn list_requests(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<LeaveQuery>,
) -> AppResult<Json<Vec<LeaveRequestView>>> {
    Ok(Json(state.leave_service.list_requests(query.status).await?))
}

/// File a leave request
#[utoipa::path(
    post,
    path = "/api/leave-requests",
    tag = "Leave requests",
    request_body = CreateLeaveRequest,
    responses(
        (status = 201, description = "Leave request created", body = LeaveRequest),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLeaveRequest>,
) -> AppResult<Created<LeaveRequest>> {
    Ok(Created(state.leave_service.create_request(payload).await?))
}

/// Approve or reject a leave request
#[utoipa::path(
    put,
    path = "/api/leave-requests/{id}",
    tag = "Leave requests",
    params(("id" = i64, Path, description = "Leave request id")),
    request_body = LeaveDecisionRequest,
    responses(
        (status = 200, description = "Leave request decided", body = LeaveRequest),
        (status = 400, description = "Status is not approved or rejected"),
        (status = 404, description = "Leave request not found")
    )
)]
pub async fn decide_request(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ValidatedJson(payload): ValidatedJson<LeaveDecisionRequest>,
) -> AppResult<Json<LeaveRequest>> {
    let request = state
        .leave_service
        .decide_request(id, payload.status, payload.approved_by)
        .await?;
    Ok(Json(request))
}
