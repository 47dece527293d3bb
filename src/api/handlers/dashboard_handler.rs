//! Dashboard handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::DashboardStats;
use crate::errors::AppResult;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

/// Totals, per-floor occupancy, recent activity and course distribution
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses((status = 200, description = "Dashboard snapshot", body = DashboardStats))
)]
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.dashboard_service.stats().await?))
}
