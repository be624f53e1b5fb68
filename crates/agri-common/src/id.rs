use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Short hex tag used to correlate the log lines of a single query.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    uuid.as_bytes()[..4]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Opaque conversation id sent with every query so the backend can keep
/// conversation-scoped context. Generated once per client session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(new_id())
    }

    /// Use a caller-chosen id (e.g. pinned in config). Blank input yields a
    /// freshly generated id instead.
    pub fn from_configured(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.trim().is_empty() {
            Self::new()
        } else {
            Self(id.trim().to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
