//! Query dispatch: the only path that sends conversation content over the
//! network.
//!
//! Each accepted `submit` appends the farmer turn, spawns exactly one
//! `/query` exchange, and commits exactly one advisor turn when it ends.

mod dispatch;
mod guard;


pub use dispatch::{InflightQuery, QueryDispatcher};
