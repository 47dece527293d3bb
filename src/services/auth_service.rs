//! Authentication service - Console users, logins and sessions.
//!
//! Every login attempt against a known username leaves an access log
//! entry: `active` on success, `failed` on a wrong password. Logout closes
//! the user's open entries.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{AccessLog, AccessStatus, CreateUser, NewAccessLog, RecordId, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ReadRepository, Tables, UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Where a login request came from, recorded in the access log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a console user
    async fn register(&self, data: CreateUser) -> AppResult<User>;

    /// Check credentials and open a session
    async fn login(&self, username: String, password: String, client: ClientInfo) -> AppResult<User>;

    /// Close the user's open sessions; returns whether any was open
    async fn logout(&self, user_id: RecordId) -> AppResult<bool>;

    /// Replace the password if `current` matches; returns whether it did
    async fn change_password(
        &self,
        user_id: RecordId,
        current: String,
        new_password: String,
    ) -> AppResult<bool>;
}

/// Close every open session of `user_id` at `now`.
pub(crate) fn close_sessions(tables: &mut Tables, user_id: RecordId) -> bool {
    let open: Vec<RecordId> = tables
        .access_logs
        .find_where(|l| l.user_id == user_id && l.is_open())
        .iter()
        .map(|l| l.id)
        .collect();

    let now = Utc::now();
    for id in &open {
        if let Some(log) = tables.access_logs.find_by_id_mut(*id) {
            log.close(now);
        }
    }
    !open.is_empty()
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, data: CreateUser) -> AppResult<User> {
        let user = self.uow.transaction(|t| {
            if t.user_by_username(&data.username).is_some() {
                return Err(AppError::conflict(format!(
                    "Username {} is already taken",
                    data.username
                )));
            }
            Ok(t.users.insert_with(|id| User::new(id, data)))
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    async fn login(&self, username: String, password: String, client: ClientInfo) -> AppResult<User> {
        let outcome = self.uow.transaction(|t| {
            let Some(user) = t.user_by_username(&username).cloned() else {
                return Ok(None);
            };

            let accepted = user.password_matches(&password);
            let status = if accepted {
                AccessStatus::Active
            } else {
                AccessStatus::Failed
            };
            t.access_logs.insert_with(|id| {
                AccessLog::new(
                    id,
                    NewAccessLog {
                        user_id: user.id,
                        ip_address: client.ip_address,
                        status,
                        user_agent: client.user_agent,
                        login_time: None,
                    },
                )
            });

            Ok(accepted.then_some(user))
        })?;

        match outcome {
            Some(user) => {
                tracing::info!(user_id = user.id, "Login succeeded");
                Ok(user)
            }
            None => {
                tracing::warn!(username = %username, "Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn logout(&self, user_id: RecordId) -> AppResult<bool> {
        let closed = self.uow.transaction(|t| Ok(close_sessions(t, user_id)))?;
        tracing::info!(user_id, closed, "Logout");
        Ok(closed)
    }

    async fn change_password(
        &self,
        user_id: RecordId,
        current: String,
        new_password: String,
    ) -> AppResult<bool> {
        let changed = self.uow.transaction(|t| {
            let entity = t.users.entity();
            let user = t.users.find_by_id_mut(user_id).ok_or_not_found(entity)?;
            if !user.password_matches(&current) {
                return Ok(false);
            }
            user.password = new_password;
            Ok(true)
        })?;

        if changed {
            tracing::info!(user_id, "Password changed");
        } else {
            tracing::warn!(user_id, "Password change rejected");
        }
        Ok(changed)
    }
}
