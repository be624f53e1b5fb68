//! Resolution guard for an in-flight query.

use tracing::{error, warn};

use crate::session::{write_store, SharedSession, Turn};
use crate::wire::QueryResponse;
use crate::TransportError;

/// Owns the obligation to resolve the pending question.
///
/// `commit` records the reply. If the guard is dropped without a commit
/// (the query task panicked or was aborted), the offline notice is recorded
/// instead so the session never stays stuck in `AwaitingResponse`.
pub(crate) struct ResolutionGuard {
    session: SharedSession,
    request_id: String,
    committed: bool,
}

impl ResolutionGuard {
    pub(crate) fn new(session: SharedSession, request_id: impl Into<String>) -> Self {
        Self {
            session,
            request_id: request_id.into(),
            committed: false,
        }
    }

    pub(crate) fn commit(mut self, outcome: Result<QueryResponse, TransportError>) -> Option<Turn> {
        self.committed = true;
        resolve(&self.session, &self.request_id, outcome)
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        if !self.committed {
            warn!(request = %self.request_id, "query ended without a reply, recording offline notice");
            resolve(
                &self.session,
                &self.request_id,
                Err(TransportError::Network("query task aborted".into())),
            );
        }
    }
}

fn resolve(
    session: &SharedSession,
    request_id: &str,
    outcome: Result<QueryResponse, TransportError>,
) -> Option<Turn> {
    let mut store = write_store(session);
    match store.append_advisor_turn(outcome) {
        Ok(turn) => Some(turn.clone()),
        Err(e) => {
            error!(request = %request_id, "cannot record advisor turn: {e}");
            None
        }
    }
}
