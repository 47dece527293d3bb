//! Access log handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::QueryParams;
use crate::api::AppState;
use crate::domain::{AccessLogView, RecordId};
use crate::errors::AppResult;
use crate::types::MessageResponse;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AccessLogQuery {
    /// Login day, `YYYY-MM-DD`
    #[param(value_type = Option<String>, example = "2024-06-01")]
    pub date: Option<NaiveDate>,
    pub user_id: Option<RecordId>,
}

pub fn access_log_routes() -> Router<AppState> {
    Router::new().route("/", get(list_logs).delete(clear_logs))
}

/// List access logs with user identity
#[utoipa::path(
    get,
    path = "/api/access-logs",
    tag = "Access logs",
    params(AccessLogQuery),
    responses(
        (status = 200, description = "Access logs", body = Vec<AccessLogView>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_logs(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AccessLogQuery>,
) -> AppResult<Json<Vec<AccessLogView>>> {
    let logs = state
        .access_log_service
        .list_logs(query.date, query.user_id)
        .await?;
    Ok(Json(logs))
}

/// Delete every access log
#[utoipa::path(
    delete,
    path = "/api/access-logs",
    tag = "Access logs",
    responses((status = 200, description = "Access logs cleared", body = MessageResponse))
)]
pub async fn clear_logs(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.access_log_service.clear_logs().await?;
    Ok(Json(MessageResponse::new("Access logs cleared successfully")))
}
