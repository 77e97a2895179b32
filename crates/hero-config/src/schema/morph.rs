//! Morph, pointer interaction, plexus and motion configuration types.

use serde::{Deserialize, Serialize};

/// Sphere-to-text blend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Progress at which the text starts to become visible.
    pub reveal_start: f64,
    /// Progress at which the text is fully formed.
    pub reveal_end: f64,
    /// Radians per second of the sphere's spin around the vertical axis.
    pub rotation_speed: f64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            reveal_start: 0.2,
            reveal_end: 0.9,
            rotation_speed: 0.15,
        }
    }
}

/// Pointer repulsion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub radius: f64,
    pub force: f64,
    /// World-space half-extents a normalized pointer of (±1, ±1) maps to.
    pub pointer_extent_x: f64,
    pub pointer_extent_y: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            force: 0.3,
            pointer_extent_x: 1.9,
            pointer_extent_y: 1.05,
        }
    }
}

/// Connective line settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlexusConfig {
    /// Link distance while particles are still a sphere.
    pub wide_threshold: f64,
    /// Link distance once the text is formed.
    pub narrow_threshold: f64,
    pub max_alpha: f64,
    /// Line fade multiplier reached at full shape strength.
    pub min_fade: f64,
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub color: String,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            wide_threshold: 0.6,
            narrow_threshold: 0.18,
            max_alpha: 0.6,
            min_fade: 0.25,
            color: "#7fdcff".into(),
        }
    }
}

/// Motion preference.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MotionConfig {
    /// Skip the intro animation and render a static frame.
    pub reduced_motion: bool,
}
