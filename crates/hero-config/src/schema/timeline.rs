//! Intro timeline configuration types.

use serde::{Deserialize, Serialize};

/// Easing curve applied to timeline progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Ease {
    Linear,
    #[default]
    Power2InOut,
}

/// Intro timeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Seconds from progress 0 to progress 1.
    pub duration: f64,
    pub ease: Ease,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration: 3.5,
            ease: Ease::Power2InOut,
        }
    }
}
