//! Authentication handlers.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, RecordId, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::services::ClientInfo;
use crate::types::{Created, MessageResponse};

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "admin123")]
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: UserResponse,
}

/// Logout request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[schema(example = 1)]
    pub user_id: RecordId,
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[schema(example = 1)]
    pub user_id: RecordId,
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/change-password", post(change_password))
}

/// Client address: first `X-Forwarded-For` hop, then `X-Real-IP`, then the
/// socket peer.
fn client_ip(headers: &HeaderMap, connect_info: Option<ConnectInfo<SocketAddr>>) -> String {
    let header = |name: &str| headers.get(name).and_then(|h| h.to_str().ok());

    if let Some(ip) = header("X-Forwarded-For").and_then(|f| f.split(',').next()) {
        return ip.trim().to_string();
    }
    if let Some(ip) = header("X-Real-IP") {
        return ip.trim().to_string();
    }
    connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default()
}

/// Register a console user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.auth_service.register(payload).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Log in and open a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let client = ClientInfo {
        ip_address: client_ip(&headers, connect_info),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    };

    let user = state
        .auth_service
        .login(payload.username, payload.password, client)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}

/// Close the user's open sessions
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LogoutRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.auth_service.logout(payload.user_id).await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}

/// Change a user's password
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "Authentication",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Current password is incorrect"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    let changed = state
        .auth_service
        .change_password(payload.user_id, payload.current_password, payload.new_password)
        .await?;

    if !changed {
        return Err(AppError::validation("Current password is incorrect"));
    }
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
