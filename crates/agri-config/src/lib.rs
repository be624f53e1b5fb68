//! Configuration for the Agri-Cult advisory client.
//!
//! TOML-based, with every section defaulted so partial files work, plus
//! environment overrides for deployment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use agri_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.server.base_url);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AgriConfig, LogLevel};

use std::path::Path;

use agri_common::ConfigError;

/// Load config from the platform default path, apply environment
/// overrides, and validate the result.
pub fn load_config() -> Result<AgriConfig, ConfigError> {
    finish(toml_loader::load_default()?)
}

/// Same as [`load_config`] but reads an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<AgriConfig, ConfigError> {
    finish(toml_loader::load_from_path(path)?)
}

fn finish(mut config: AgriConfig) -> Result<AgriConfig, ConfigError> {
    env::apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"ftp://nope\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_missing_file() {
        let err = load_config_from(Path::new("/tmp/agri_cult_missing_dir/config.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
