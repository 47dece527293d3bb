//! Access log service - Audit trail of console sessions.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use super::auth_service::close_sessions;
use crate::domain::{AccessLog, AccessLogView, NewAccessLog, RecordId};
use crate::engine::enrichment;
use crate::errors::AppResult;
use crate::infra::{DeleteRepository, UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccessLogService: Send + Sync {
    /// Append an entry
    async fn record(&self, entry: NewAccessLog) -> AppResult<AccessLog>;

    /// Close the user's open entries; returns whether any was open
    async fn close_active(&self, user_id: RecordId) -> AppResult<bool>;

    /// Entries filtered by login day and/or user, with user identity
    async fn list_logs(
        &self,
        date: Option<NaiveDate>,
        user_id: Option<RecordId>,
    ) -> AppResult<Vec<AccessLogView>>;

    /// Drop every entry. Ids keep counting from where they were.
    async fn clear_logs(&self) -> AppResult<()>;
}

pub struct AccessLogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccessLogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AccessLogService for AccessLogManager<U> {
    async fn record(&self, entry: NewAccessLog) -> AppResult<AccessLog> {
        self.uow
            .transaction(|t| Ok(t.access_logs.insert_with(|id| AccessLog::new(id, entry))))
    }

    async fn close_active(&self, user_id: RecordId) -> AppResult<bool> {
        self.uow.transaction(|t| Ok(close_sessions(t, user_id)))
    }

    async fn list_logs(
        &self,
        date: Option<NaiveDate>,
        user_id: Option<RecordId>,
    ) -> AppResult<Vec<AccessLogView>> {
        Ok(self
            .uow
            .read(|t| enrichment::access_logs(t, date, user_id)))
    }

    async fn clear_logs(&self) -> AppResult<()> {
        self.uow.transaction(|t| {
            t.access_logs.clear();
            Ok(())
        })?;
        tracing::info!("Access logs cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::AccessStatus;
    use crate::infra::MemoryStore;

    fn entry(user_id: RecordId, status: AccessStatus) -> NewAccessLog {
        NewAccessLog {
            user_id,
            ip_address: "10.1.1.1".to_string(),
            status,
            user_agent: "curl".to_string(),
            login_time: None,
        }
    }

    #[tokio::test]
    async fn clear_keeps_the_id_counter() {
        let logs = AccessLogManager::new(Arc::new(MemoryStore::new()));
        logs.record(entry(1, AccessStatus::Success)).await.unwrap();
        logs.record(entry(1, AccessStatus::Success)).await.unwrap();

        logs.clear_logs().await.unwrap();
        assert!(logs.list_logs(None, None).await.unwrap().is_empty());

        let next = logs.record(entry(1, AccessStatus::Success)).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn close_active_only_touches_open_sessions_of_the_user() {
        let logs = AccessLogManager::new(Arc::new(MemoryStore::seeded(&Config::default())));
        logs.record(entry(1, AccessStatus::Active)).await.unwrap();
        logs.record(entry(1, AccessStatus::Failed)).await.unwrap();
        logs.record(entry(2, AccessStatus::Active)).await.unwrap();

        assert!(logs.close_active(1).await.unwrap());

        let rows = logs.list_logs(None, None).await.unwrap();
        let statuses: Vec<_> = rows.iter().map(|r| r.log.status).collect();
        assert_eq!(
            statuses,
            vec![AccessStatus::Success, AccessStatus::Failed, AccessStatus::Active]
        );
        assert_eq!(rows[0].username, "admin");
        assert!(rows[1].log.logout_time.is_none());
    }
}
