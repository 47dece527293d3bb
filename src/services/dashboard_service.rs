//! Dashboard service.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::DashboardStats;
use crate::engine::dashboard;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Snapshot computed from the current tables
    async fn stats(&self) -> AppResult<DashboardStats>;
}

pub struct DashboardManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DashboardManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardManager<U> {
    async fn stats(&self) -> AppResult<DashboardStats> {
        let now = Utc::now();
        Ok(self.uow.read(|t| dashboard::snapshot(t, now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryStore;

    #[test]
    fn empty_store_reports_four_empty_floors() {
        let manager = DashboardManager::new(Arc::new(MemoryStore::new()));
        let stats = tokio_test::block_on(manager.stats()).unwrap();

        assert_eq!(stats.total_rooms, 0);
        assert_eq!(stats.floor_stats.len(), 4);
        assert!(stats.floor_stats.iter().all(|f| f.occupancy_rate == 0));
        assert!(stats.recent_activity.is_empty());
    }
}
