//! The append-only session store.

use agri_common::SessionId;
use tracing::debug;

use crate::wire::QueryResponse;
use crate::TransportError;

use super::types::{Phase, SessionError, SessionSnapshot, Turn};

/// Conversation history plus the pending flag.
///
/// Invariant: `phase == AwaitingResponse` exactly when the last turn is a
/// farmer turn.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_id: SessionId,
    history: Vec<Turn>,
    phase: Phase,
}

impl SessionStore {
    /// Start a session seeded with one synthetic advisor turn.
    pub fn new(session_id: SessionId, welcome: impl Into<String>) -> Self {
        Self {
            session_id,
            history: vec![Turn::advisor_notice(welcome)],
            phase: Phase::Idle,
        }
    }

    /// Record the farmer's question and enter `AwaitingResponse`.
    ///
    /// Blank text or an outstanding question is rejected with no change.
    pub fn append_farmer_turn(&mut self, text: &str) -> Result<&Turn, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::InvalidInput);
        }
        if self.phase == Phase::AwaitingResponse {
            return Err(SessionError::RequestInFlight);
        }

        self.history.push(Turn::farmer(text));
        self.phase = Phase::AwaitingResponse;
        debug_assert!(self.invariant_holds());
        debug!(session = %self.session_id, turns = self.history.len(), "farmer turn appended");
        Ok(self.last())
    }

    /// Resolve the outstanding question and return to `Idle`.
    ///
    /// A failed exchange is recorded as the offline notice.
    pub fn append_advisor_turn(
        &mut self,
        outcome: Result<QueryResponse, TransportError>,
    ) -> Result<&Turn, SessionError> {
        if self.phase != Phase::AwaitingResponse {
            return Err(SessionError::NothingPending);
        }

        let turn = match outcome {
            Ok(response) => Turn::answer(response),
            Err(_) => Turn::offline(),
        };
        self.history.push(turn);
        self.phase = Phase::Idle;
        debug_assert!(self.invariant_holds());
        debug!(session = %self.session_id, turns = self.history.len(), "advisor turn appended");
        Ok(self.last())
    }

    pub fn read(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            history: self.history.clone(),
            pending: self.is_pending(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.history.last()
    }

    /// Most recent farmer question, if any.
    pub fn last_question(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|t| t.is_farmer())
            .map(|t| t.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub(crate) fn invariant_holds(&self) -> bool {
        let last_is_farmer = self.history.last().is_some_and(Turn::is_farmer);
        self.is_pending() == last_is_farmer
    }

    fn last(&self) -> &Turn {
        // Only called right after a push.
        &self.history[self.history.len() - 1]
    }
}
