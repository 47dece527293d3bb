//! Application route configuration.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    access_log_routes, attendance_routes, auth_routes, complaint_routes, course_routes,
    dashboard_routes, leave_routes, room_routes, student_routes,
};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/courses", course_routes())
        .nest("/rooms", room_routes())
        .nest("/students", student_routes())
        .nest("/attendance", attendance_routes())
        .nest("/leave-requests", leave_routes())
        .nest("/complaints", complaint_routes())
        .nest("/access-logs", access_log_routes())
        .nest("/dashboard", dashboard_routes())
}

/// CORS for the console front end.
///
/// `*` allows any origin without credentials. An origin that is not a
/// valid header value falls back to `*` with a warning.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value).allow_credentials(true),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin, allowing any origin");
            layer.allow_origin(Any)
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
