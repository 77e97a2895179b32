//! Parameter and state types for the morph field.

use hero_config::HeroConfig;

/// Tunables of the per-frame step, resolved from config once at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphParams {
    pub reveal_start: f32,
    pub reveal_end: f32,
    pub rotation_speed: f32,
    pub interaction_radius: f32,
    pub interaction_force: f32,
    pub wide_threshold: f32,
    pub narrow_threshold: f32,
    pub max_alpha: f32,
    pub min_fade: f32,
}

impl MorphParams {
    pub fn from_config(config: &HeroConfig) -> Self {
        Self {
            reveal_start: config.morph.reveal_start as f32,
            reveal_end: config.morph.reveal_end as f32,
            rotation_speed: config.morph.rotation_speed as f32,
            interaction_radius: config.interaction.radius as f32,
            interaction_force: config.interaction.force as f32,
            wide_threshold: config.plexus.wide_threshold as f32,
            narrow_threshold: config.plexus.narrow_threshold as f32,
            max_alpha: config.plexus.max_alpha as f32,
            min_fade: config.plexus.min_fade as f32,
        }
    }
}

impl Default for MorphParams {
    fn default() -> Self {
        Self::from_config(&HeroConfig::default())
    }
}

/// Where the intro currently is, as shown by the point buffer. Only ever
/// moves forward.
///
/// A field settled for reduced motion holds progress 1 but keeps drawing the
/// base sphere, so its phase stays where it was (normally `Scattering`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum MorphPhase {
    /// Progress below `reveal_start`: a spinning sphere.
    #[default]
    Scattering,
    /// Blending toward the text.
    Revealing,
    /// Progress at or past `reveal_end`: sharp text.
    Formed,
}

impl MorphPhase {
    pub fn from_progress(progress: f32, reveal_start: f32, reveal_end: f32) -> Self {
        if progress >= reveal_end {
            MorphPhase::Formed
        } else if progress >= reveal_start {
            MorphPhase::Revealing
        } else {
            MorphPhase::Scattering
        }
    }
}

/// Per-frame numbers, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub progress: f32,
    pub shape_strength: f32,
    pub mix: f32,
    pub segments: usize,
}
