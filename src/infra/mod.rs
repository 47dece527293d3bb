//! Infrastructure layer - Record storage
//!
//! This module handles storage concerns:
//! - Id-keyed record tables and repository traits
//! - The in-memory store
//! - Unit of Work for atomic multi-table mutations

pub mod repositories;
pub mod unit_of_work;

pub use repositories::{
    CrudRepository, DeleteRepository, ReadRepository, Table, Tables, WriteRepository,
};
pub use unit_of_work::{MemoryStore, UnitOfWork};
