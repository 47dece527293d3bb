//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::RecordId;
use crate::config::USER_TYPE_ADMIN;

/// Console user (hostel staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    /// Stored as entered; credentials are compared verbatim.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: Option<String>,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user record from creation data
    pub fn new(id: RecordId, data: CreateUser) -> Self {
        Self {
            id,
            username: data.username,
            password: data.password,
            email: data.email,
            user_type: data.user_type.unwrap_or_else(|| USER_TYPE_ADMIN.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Check a candidate password against the stored one
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Check if user is an administrator
    pub fn is_admin(&self) -> bool {
        self.user_type == USER_TYPE_ADMIN
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Login name, unique across users
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "warden")]
    pub username: String,
    /// Account password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret123")]
    pub password: String,
    /// Contact email
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "warden@hostel.edu")]
    pub email: Option<String>,
    /// Account type, defaults to admin
    #[schema(example = "admin")]
    pub user_type: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: RecordId,
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "admin@hostel.edu")]
    pub email: Option<String>,
    #[schema(example = "admin")]
    pub user_type: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            user_type: user.user_type,
        }
    }
}
