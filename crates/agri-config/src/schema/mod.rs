//! Configuration schema types for the advisory client.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod dashboard;
mod server;
mod session;
mod system;

pub use dashboard::*;
pub use server::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgriConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
