//! `QueryDispatcher` and the handle for its in-flight query.

use std::sync::{Arc, RwLock};

use agri_common::{new_correlation_id, SessionId};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::session::{
    read_store, write_store, SessionError, SessionSnapshot, SessionStore, SharedSession, Turn,
};
use crate::wire::{FeedbackRequest, FeedbackResponse, HealthStatus, QueryRequest};
use crate::{AdvisorClient, TransportError};

use super::guard::ResolutionGuard;

/// Turns farmer questions into backend queries and commits the results.
pub struct QueryDispatcher {
    client: Arc<dyn AdvisorClient>,
    session: SharedSession,
}

impl QueryDispatcher {
    pub fn new(client: Arc<dyn AdvisorClient>, store: SessionStore) -> Self {
        Self {
            client,
            session: Arc::new(RwLock::new(store)),
        }
    }

    /// Submit a question.
    ///
    /// Returns as soon as the farmer turn is recorded; the exchange runs on
    /// a spawned task and must be called from within a tokio runtime.
    /// Rejected submissions (`InvalidInput`, `RequestInFlight`) leave the
    /// session untouched and make no network call.
    pub fn submit(&self, utterance: &str) -> Result<InflightQuery, SessionError> {
        let request = {
            let mut store = write_store(&self.session);
            if let Err(e) = store.append_farmer_turn(utterance) {
                debug!("submission rejected: {e}");
                return Err(e);
            }
            QueryRequest {
                question: utterance.to_string(),
                session_id: store.session_id().to_string(),
            }
        };

        let request_id = new_correlation_id();
        info!(request = %request_id, session = %request.session_id, "query dispatched");

        let guard = ResolutionGuard::new(Arc::clone(&self.session), request_id.clone());
        let client = Arc::clone(&self.client);
        let task_request_id = request_id.clone();
        let handle = tokio::spawn(async move {
            let outcome = client.query(&request).await;
            match &outcome {
                Ok(response) => info!(
                    request = %task_request_id,
                    sources = response.sources.len(),
                    search_triggered = ?response.search_triggered,
                    "answer received"
                ),
                Err(e) => warn!(request = %task_request_id, "query failed, advisor offline: {e}"),
            }
            guard.commit(outcome)
        });

        Ok(InflightQuery { request_id, handle })
    }

    /// Submit and wait for the advisor turn.
    pub async fn submit_and_wait(&self, utterance: &str) -> Result<Option<Turn>, SessionError> {
        Ok(self.submit(utterance)?.resolved().await)
    }

    /// Rate an answer. Independent of the pending flag; never touches the
    /// conversation history.
    pub async fn send_feedback(
        &self,
        question: impl Into<String>,
        is_satisfied: bool,
        correction: Option<String>,
    ) -> Result<FeedbackResponse, TransportError> {
        let request = FeedbackRequest {
            question: question.into(),
            session_id: self.session_id().to_string(),
            is_satisfied,
            correct_info: correction.filter(|c| !c.trim().is_empty()),
        };
        debug!(satisfied = is_satisfied, "sending feedback");
        self.client.feedback(&request).await
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        self.client.health().await
    }

    /// Owned copy of the history and pending flag.
    pub fn session(&self) -> SessionSnapshot {
        read_store(&self.session).read()
    }

    pub fn session_id(&self) -> SessionId {
        read_store(&self.session).session_id().clone()
    }

    pub fn is_pending(&self) -> bool {
        read_store(&self.session).is_pending()
    }

    pub fn last_question(&self) -> Option<String> {
        read_store(&self.session).last_question().map(String::from)
    }
}

/// Handle to an accepted question. Dropping it does not cancel the query.
pub struct InflightQuery {
    request_id: String,
    handle: JoinHandle<Option<Turn>>,
}

impl InflightQuery {
    /// Correlation id used in this query's log lines.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the advisor turn. `None` only if the query task died, in
    /// which case the session already holds the offline notice.
    pub async fn resolved(self) -> Option<Turn> {
        match self.handle.await {
            Ok(turn) => turn,
            Err(e) => {
                warn!(request = %self.request_id, "query task failed: {e}");
                None
            }
        }
    }
}
