//! Domain engines.
//!
//! Pure logic over [`Tables`](crate::infra::Tables): occupancy bookkeeping,
//! read-time enrichment, attendance reconciliation and dashboard
//! aggregation. Services call these inside a unit of work.

pub mod dashboard;
pub mod enrichment;
pub mod occupancy;
pub mod reconciler;
