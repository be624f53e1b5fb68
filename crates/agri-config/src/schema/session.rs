use serde::{Deserialize, Serialize};

pub const DEFAULT_WELCOME_MESSAGE: &str = "Explore the future of farming. Ask me about citrus \
diseases, government subsidies, or latest market trends. I am powered by your private \
agricultural database.";

/// Conversation session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Synthetic advisor turn every session starts with.
    pub welcome_message: String,
    /// Pin the session id sent to the backend. Unset means a fresh id per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            welcome_message: DEFAULT_WELCOME_MESSAGE.into(),
            session_id: None,
        }
    }
}
