//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log filter used when no `--log-level` or `RUST_LOG` is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
