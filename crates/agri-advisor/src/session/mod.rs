//! Conversation session: the ordered turn log plus the pending flag.
//!
//! `SessionStore` is the only shared mutable state in the core. It is
//! shared as `SharedSession` and every mutation is one write-lock critical
//! section, so readers never observe a half-appended turn.

mod store;
mod types;

#[cfg(test)]
mod tests;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use store::SessionStore;
pub use types::{Phase, SessionError, SessionSnapshot, Speaker, Turn, OFFLINE_NOTICE};

/// Store handle shared between the dispatcher and its in-flight query task.
pub type SharedSession = Arc<RwLock<SessionStore>>;

// Every critical section leaves the store consistent, so a poisoned lock
// is still safe to use.
pub(crate) fn read_store(session: &SharedSession) -> RwLockReadGuard<'_, SessionStore> {
    session.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_store(session: &SharedSession) -> RwLockWriteGuard<'_, SessionStore> {
    session.write().unwrap_or_else(PoisonError::into_inner)
}
