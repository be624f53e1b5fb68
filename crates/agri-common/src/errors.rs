use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Top-level error for the client binary.
///
/// Query and dashboard failures never reach this type: the advisor core
/// absorbs them into conversation turns or log lines.
#[derive(Debug, thiserror::Error)]
pub enum AgriError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),
}
