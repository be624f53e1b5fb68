//! Where the client keeps `config.toml`, and first-run seeding of it.

use std::fs;
use std::path::{Path, PathBuf};

use agri_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "agri-cult";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/agri-cult/config.toml`, e.g.
/// `~/.config/agri-cult/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory (is HOME set?)".into()))
}

/// Seed `path` with the commented template. Existing files are overwritten,
/// so callers only do this when nothing is there yet.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| io_error("create directory", dir, e))?;
    }
    fs::write(path, default_config_toml()).map_err(|e| io_error("write template to", path, e))?;

    info!(path = %path.display(), "wrote config template");
    Ok(())
}
