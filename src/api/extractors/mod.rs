//! Request extractors that reject with [`AppError`](crate::errors::AppError)
//! so clients always receive the standard error body.

mod query;
mod validated_json;

pub use query::QueryParams;
pub use validated_json::ValidatedJson;
