//! Configuration schema types for the hero morph effect.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod morph;
mod particles;
mod text;
mod timeline;

pub use logging::*;
pub use morph::*;
pub use particles::*;
pub use text::*;
pub use timeline::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Every option has a default tuned for a full-width hero section.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HeroConfig {
    pub text: TextConfig,
    pub particles: ParticlesConfig,
    pub morph: MorphConfig,
    pub interaction: InteractionConfig,
    pub plexus: PlexusConfig,
    pub timeline: TimelineConfig,
    pub motion: MotionConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_two_words() {
        let config = HeroConfig::default();
        assert_eq!(config.text.words, vec!["CREATIVE", "DEVELOPER"]);
    }

    #[test]
    fn default_thresholds_are_ordered() {
        let config = HeroConfig::default();
        assert!(config.morph.reveal_start < config.morph.reveal_end);
        assert!(config.plexus.narrow_threshold < config.plexus.wide_threshold);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[particles]
count = 120

[timeline]
ease = "linear"
"#;
        let config: HeroConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.particles.count, 120);
        assert_eq!(config.timeline.ease, Ease::Linear);
        assert!((config.timeline.duration - 3.5).abs() < 1e-9);
        assert_eq!(config.text.alpha_threshold, 150);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: HeroConfig = toml::from_str("").unwrap();
        assert_eq!(config.particles.count, ParticlesConfig::default().count);
        assert!(!config.motion.reduced_motion);
    }
}
