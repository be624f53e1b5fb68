//! Best-effort ambient data: weather, mandi prices and headlines.
//!
//! Each resource is fetched independently. A failure is logged and leaves
//! that resource's previous value in place; it never reaches the
//! conversation.

mod fetch;
mod snapshot;


pub use fetch::{DashboardError, DashboardFetcher, RefreshReport, Resource};
pub use snapshot::DashboardSnapshot;
