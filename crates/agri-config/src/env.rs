//! Environment variable overrides, applied after the config file is read.

use tracing::{debug, warn};

use crate::schema::{AgriConfig, LogLevel};

/// Overrides `server.base_url`.
pub const BASE_URL_VAR: &str = "AGRI_CULT_BASE_URL";
/// Overrides `logging.level`.
pub const LOG_LEVEL_VAR: &str = "AGRI_CULT_LOG";
/// Pins `session.session_id`.
pub const SESSION_ID_VAR: &str = "AGRI_CULT_SESSION_ID";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut AgriConfig) {
    apply_overrides_with(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup (the process environment in
/// production, a map in tests).
pub fn apply_overrides_with<F>(config: &mut AgriConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        debug!("{BASE_URL_VAR} overrides server.base_url");
        config.server.base_url = url.trim().trim_end_matches('/').to_string();
    }

    if let Some(raw) = lookup(LOG_LEVEL_VAR) {
        match LogLevel::parse(&raw) {
            Some(level) => config.logging.level = level,
            None => warn!("ignoring {LOG_LEVEL_VAR}={raw:?}: unknown log level"),
        }
    }

    if let Some(id) = lookup(SESSION_ID_VAR).filter(|v| !v.trim().is_empty()) {
        config.session.session_id = Some(id);
    }
}
