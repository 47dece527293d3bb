//! Complaint handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{
    Complaint, ComplaintStatus, ComplaintStatusUpdate, ComplaintView, CreateComplaint, RecordId,
};
use crate::errors::AppResult;
use crate::types::Created;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ComplaintQuery {
    #[param(value_type = Option<String>, example = "in progress")]
    pub status: Option<ComplaintStatus>,
}

pub fn complaint_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_complaints).post(create_complaint))
        .route("/:id", put(update_complaint))
}

/// List complaints with student details
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = "Complaints",
    params(ComplaintQuery),
    responses((status = 200, description = "Complaints", body = Vec<ComplaintView>))
)]
pub async fn list_complaints(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ComplaintQuery>,
) -> AppResult<Json<Vec<ComplaintView>>> {
    Ok(Json(state.complaint_service.list_complaints(query.status).await?))
}

/// File a complaint
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = "Complaints",
    request_body = CreateComplaint,
    responses(
        (status = 201, description = "Complaint filed", body = Complaint),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_complaint(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateComplaint>,
) -> AppResult<Created<Complaint>> {
    Ok(Created(state.complaint_service.create_complaint(payload).await?))
}

/// Change a complaint's status, assignee or notes
#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    tag = "Complaints",
    params(("id" = i64, Path, description = "Complaint id")),
    request_body = ComplaintStatusUpdate,
    responses(
        (status = 200, description = "Complaint updated", body = Complaint),
        (status = 404, description = "Complaint not found")
    )
)]
pub async fn update_complaint(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ValidatedJson(payload): ValidatedJson<ComplaintStatusUpdate>,
) -> AppResult<Json<Complaint>> {
    Ok(Json(state.complaint_service.update_status(id, payload).await?))
}
