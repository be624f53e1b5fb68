//! Configuration validation.
//!
//! Each section has its own check; errors are collected into a single
//! `ConfigError`.

mod helpers;
mod sections;


use crate::schema::AgriConfig;
use agri_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AgriConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_server(&mut errors, config);
    sections::validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
