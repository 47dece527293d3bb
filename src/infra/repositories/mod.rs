//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over record storage,
//! following the Repository pattern for clean separation of concerns.

mod base;
mod tables;

pub use base::{CrudRepository, DeleteRepository, ReadRepository, Table, WriteRepository};
pub use tables::Tables;
