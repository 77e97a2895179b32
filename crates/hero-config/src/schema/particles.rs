//! Particle pool configuration types.

use serde::{Deserialize, Serialize};

/// Particle pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Fixed pool size. The plexus pass is O(count²) per frame.
    pub count: u32,
    pub sphere_radius: f64,
    /// RNG seed for the scattered sphere. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub point_color: String,
    pub point_size: f64,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: 700,
            sphere_radius: 2.4,
            seed: None,
            point_color: "#00d4ff".into(),
            point_size: 2.0,
        }
    }
}
