//! Attendance handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Attendance, AttendanceMark, RecordId, RosterEntry};
use crate::errors::AppResult;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AttendanceQuery {
    /// Calendar day, `YYYY-MM-DD`
    #[param(value_type = String, example = "2024-06-01")]
    pub date: NaiveDate,
    pub course_id: Option<RecordId>,
}

/// Bulk attendance submission for one day
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttendanceRequest {
    #[schema(value_type = String, example = "2024-06-01")]
    pub date: NaiveDate,
    pub attendance_records: Vec<AttendanceMark>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitAttendanceResponse {
    #[schema(example = "Attendance recorded successfully")]
    pub message: String,
    /// Stored rows, in submission order
    pub results: Vec<Attendance>,
}

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(get_roster).post(submit_attendance))
}

/// Roster for a day, unmarked students included
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Roster", body = Vec<RosterEntry>),
        (status = 400, description = "Missing or invalid date")
    )
)]
pub async fn get_roster(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AttendanceQuery>,
) -> AppResult<Json<Vec<RosterEntry>>> {
    let roster = state
        .attendance_service
        .roster(query.date, query.course_id)
        .await?;
    Ok(Json(roster))
}

/// Mark attendance for many students at once
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "Attendance",
    request_body = SubmitAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = SubmitAttendanceResponse),
        (status = 400, description = "Invalid batch, nothing recorded")
    )
)]
pub async fn submit_attendance(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubmitAttendanceRequest>,
) -> AppResult<(StatusCode, Json<SubmitAttendanceResponse>)> {
    let results = state
        .attendance_service
        .submit(payload.date, payload.attendance_records)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitAttendanceResponse {
            message: "Attendance recorded successfully".to_string(),
            results,
        }),
    ))
}
