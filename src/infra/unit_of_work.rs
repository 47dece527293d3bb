//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all record tables
//! - Runs every mutation as one exclusive transaction
//! - Keeps multi-table changes (student + both rooms) atomic
//!
//! All tables sit behind a single lock. Reads share it; transactions hold
//! it exclusively for their whole closure, so no other request observes a
//! half-applied change. Transaction closures check every precondition
//! before their first write: an `Err` must leave the tables untouched.

use parking_lot::RwLock;

use super::repositories::{Tables, WriteRepository};
use crate::config::Config;
use crate::domain::{CreateUser, User};
use crate::errors::AppResult;

/// Unit of Work trait for dependency injection.
///
/// Not object safe because of the generic closures; services are generic
/// over it instead.
pub trait UnitOfWork: Send + Sync {
    /// Run a read-only closure against a consistent view of the tables.
    fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Tables) -> T;

    /// Run a closure with exclusive access to the tables.
    fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Tables) -> AppResult<T>;
}

/// In-memory store owning every table.
///
/// Constructed explicitly at startup and handed to the services; tests
/// build a fresh instance each.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed admin account from config
    pub fn seeded(config: &Config) -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.write();
            let admin = tables.users.insert_with(|id| {
                User::new(
                    id,
                    CreateUser {
                        username: config.admin_username.clone(),
                        password: config.admin_password().to_string(),
                        email: Some(config.admin_email.clone()),
                        user_type: None,
                    },
                )
            });
            tracing::info!(user_id = admin.id, username = %admin.username, "Seed admin created");
        }
        store
    }
}

impl UnitOfWork for MemoryStore {
    fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Tables) -> T,
    {
        let tables = self.tables.read();
        f(&tables)
    }

    fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Tables) -> AppResult<T>,
    {
        let mut tables = self.tables.write();
        let result = f(&mut tables);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "Transaction aborted");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::ReadRepository;

    #[test]
    fn seeded_store_holds_admin() {
        let store = MemoryStore::seeded(&Config::default());
        let admin = store.read(|t| t.user_by_username("admin").cloned());
        let admin = admin.expect("admin seeded");
        assert_eq!(admin.id, 1);
        assert!(admin.is_admin());
        assert!(admin.password_matches("admin123"));
    }

    #[test]
    fn transaction_result_is_returned() {
        let store = MemoryStore::new();
        let count = store
            .transaction(|t| {
                t.users.insert_with(|id| {
                    User::new(
                        id,
                        CreateUser {
                            username: "warden".to_string(),
                            password: "secret1".to_string(),
                            email: None,
                            user_type: None,
                        },
                    )
                });
                Ok(t.users.count())
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}
