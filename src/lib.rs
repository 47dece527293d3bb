//! Hostel Admin - Hostel administration API
//!
//! Rooms, students, courses, daily attendance, leave requests, complaints
//! and console access logs, kept in an in-memory store and served over a
//! JSON HTTP API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, payloads and status enums
//! - **infra**: Record tables, the in-memory store and unit of work
//! - **engine**: Occupancy, enrichment, attendance reconciliation, dashboard
//! - **services**: Application use cases
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! hostel-admin serve --port 5000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
