//! Console access logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    Success,
    Failed,
    /// Session still open
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub id: RecordId,
    pub user_id: RecordId,
    pub ip_address: String,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
    pub status: AccessStatus,
    pub user_agent: String,
}

impl AccessLog {
    pub fn new(id: RecordId, entry: NewAccessLog) -> Self {
        Self {
            id,
            user_id: entry.user_id,
            ip_address: entry.ip_address,
            login_time: entry.login_time.unwrap_or_else(Utc::now),
            logout_time: None,
            status: entry.status,
            user_agent: entry.user_agent,
        }
    }

    /// Open session that logout should close
    pub fn is_open(&self) -> bool {
        self.status == AccessStatus::Active && self.logout_time.is_none()
    }

    pub fn close(&mut self, at: DateTime<Utc>) {
        self.logout_time = Some(at);
        self.status = AccessStatus::Success;
    }
}

/// Data for a new access log entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccessLog {
    pub user_id: RecordId,
    pub ip_address: String,
    pub status: AccessStatus,
    pub user_agent: String,
    /// Defaults to now
    pub login_time: Option<DateTime<Utc>>,
}

/// Access log enriched with the user's identity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogView {
    #[serde(flatten)]
    pub log: AccessLog,
    pub user_email: String,
    pub username: String,
    pub user_type: String,
}
