//! Turn, phase and error types for the conversation log.

use agri_common::SessionId;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::wire::{Citation, QueryResponse};

/// Advisor text recorded when a query cannot be answered.
pub const OFFLINE_NOTICE: &str = "Connection lost. I am currently offline.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Farmer,
    Advisor,
}

/// One message in the conversation. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub speaker: Speaker,
    /// Markdown for advisor turns.
    pub text: String,
    pub citations: Vec<Citation>,
    /// Only ever set on advisor turns built from a successful reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_triggered: Option<bool>,
    /// Backend intent classification, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub(crate) fn farmer(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Farmer,
            text: text.into(),
            citations: Vec::new(),
            search_triggered: None,
            intent: None,
            created_at: Utc::now(),
        }
    }

    /// Advisor turn that did not come from a backend reply.
    pub(crate) fn advisor_notice(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Advisor,
            text: text.into(),
            citations: Vec::new(),
            search_triggered: None,
            intent: None,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn answer(response: QueryResponse) -> Self {
        Self {
            speaker: Speaker::Advisor,
            text: response.answer,
            citations: response.sources,
            search_triggered: response.search_triggered,
            intent: response.intent,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn offline() -> Self {
        Self::advisor_notice(OFFLINE_NOTICE)
    }

    pub fn is_farmer(&self) -> bool {
        self.speaker == Speaker::Farmer
    }

    pub fn is_advisor(&self) -> bool {
        self.speaker == Speaker::Advisor
    }

    pub fn is_offline_notice(&self) -> bool {
        self.is_advisor() && self.citations.is_empty() && self.text == OFFLINE_NOTICE
    }
}

/// Single-flight state machine: `submit` only from `Idle`, resolution always
/// back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question is empty")]
    InvalidInput,
    #[error("a question is already awaiting an answer")]
    RequestInFlight,
    #[error("no question is awaiting an answer")]
    NothingPending,
}

/// Owned, read-only view of the session handed to presentation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub history: Vec<Turn>,
    pub pending: bool,
}

impl SessionSnapshot {
    pub fn last_turn(&self) -> Option<&Turn> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
