//! API layer - HTTP handlers and routes
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers, one module per resource
//! - Extractors that reject with the standard error body
//! - Route definitions, CORS and OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
