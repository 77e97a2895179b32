//! The hero component: sampler, field, timeline and interaction state wired
//! together behind a mount / frame / teardown lifecycle.

use hero_common::{HeroError, InteractionEvent};
use hero_config::schema::InteractionConfig;
use hero_config::HeroConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::field::{FrameStats, MorphField, MorphParams};
use crate::interaction::InteractionState;
use crate::sampler::{sample_targets, GlyphRaster, SamplerSettings, TargetCache};
use crate::sphere::scatter_sphere;
use crate::timeline::{Timeline, TimelineEvent};

/// User motion preference, read once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn from_config(config: &HeroConfig) -> Self {
        Self::from_reduced(config.motion.reduced_motion)
    }
}

/// Where morph progress comes from. Exactly one source drives a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDriver {
    /// The component's own [`Timeline`], built from `[timeline]`.
    #[default]
    Internal,
    /// `InteractionEvent::ProgressChanged` messages from the host.
    External,
}

pub struct HeroMorph {
    field: MorphField,
    /// `None` when progress is driven externally.
    timeline: Option<Timeline>,
    interaction: InteractionState,
    interaction_config: InteractionConfig,
    motion: MotionPreference,
    elapsed: f32,
    mounted: bool,
}

impl HeroMorph {
    /// Mount with the internal timeline driving progress.
    pub fn mount(
        config: &HeroConfig,
        raster: &mut dyn GlyphRaster,
        cache: &mut TargetCache,
        motion: MotionPreference,
    ) -> Result<Self, HeroError> {
        Self::mount_with(config, raster, cache, motion, ProgressDriver::Internal)
    }

    /// Sample the target text, scatter the base sphere and build the field.
    ///
    /// Under [`MotionPreference::Reduced`] the field is settled at progress 1
    /// and [`frame`](Self::frame) never computes anything.
    pub fn mount_with(
        config: &HeroConfig,
        raster: &mut dyn GlyphRaster,
        cache: &mut TargetCache,
        motion: MotionPreference,
        driver: ProgressDriver,
    ) -> Result<Self, HeroError> {
        let count = config.particles.count as usize;
        let words = &config.text.words;
        let settings = SamplerSettings::from_config(&config.text);

        let targets = cache
            .get_or_sample(words, count, || sample_targets(raster, words, &settings, count))
            .to_vec();

        let mut rng = match config.particles.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cloud = scatter_sphere(&mut rng, count, config.particles.sphere_radius as f32);

        let mut field = MorphField::new(
            MorphParams::from_config(config),
            cloud.positions,
            cloud.phases,
            &targets,
        )?;

        let timeline = match (motion, driver) {
            (MotionPreference::Reduced, _) => {
                field.settle_static();
                (driver == ProgressDriver::Internal).then(Timeline::completed)
            }
            (MotionPreference::Full, ProgressDriver::Internal) => {
                Some(Timeline::from_config(&config.timeline))
            }
            (MotionPreference::Full, ProgressDriver::External) => None,
        };

        info!(
            particles = count,
            words = ?words,
            motion = ?motion,
            driver = ?driver,
            "hero morph mounted"
        );

        Ok(Self {
            field,
            timeline,
            interaction: InteractionState::new(),
            interaction_config: config.interaction.clone(),
            motion,
            elapsed: 0.0,
            mounted: true,
        })
    }

    /// Apply a pointer or progress message.
    ///
    /// Progress messages are dropped while the internal timeline owns progress.
    pub fn handle(&mut self, event: InteractionEvent) {
        if let (InteractionEvent::ProgressChanged(p), Some(_)) = (&event, &self.timeline) {
            debug!(progress = *p, "progress message ignored, internal timeline drives progress");
            return;
        }
        self.interaction.apply(event);
    }

    /// Advance by `dt` seconds and compute one frame.
    ///
    /// With the internal driver the timeline advances and publishes its
    /// progress; otherwise the last `ProgressChanged` value is used.
    /// Returns `None` under reduced motion or after teardown.
    pub fn frame(&mut self, dt: f32) -> Option<FrameStats> {
        if !self.mounted || self.motion == MotionPreference::Reduced {
            return None;
        }
        if dt > 0.0 {
            self.elapsed += dt;
        }
        if let Some(timeline) = self.timeline.as_mut() {
            if let Some(TimelineEvent::Completed) = timeline.advance(dt) {
                info!(elapsed = self.elapsed, "intro timeline complete");
            }
            self.interaction
                .apply(InteractionEvent::ProgressChanged(timeline.progress()));
        }

        let pointer = self.interaction.pointer_world(&self.interaction_config);
        Some(self.field.step(self.elapsed, self.interaction.progress(), pointer))
    }

    /// Stop the timeline. Later frames are no-ops.
    pub fn teardown(&mut self) {
        if self.mounted {
            if let Some(timeline) = self.timeline.as_mut() {
                timeline.kill();
            }
            self.mounted = false;
            info!("hero morph torn down");
        }
    }

    pub fn field(&self) -> &MorphField {
        &self.field
    }

    /// Mutable access for buffer uploads.
    pub fn field_mut(&mut self) -> &mut MorphField {
        &mut self.field
    }

    /// The internal timeline, if this component owns one.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    pub fn driver(&self) -> ProgressDriver {
        if self.timeline.is_some() {
            ProgressDriver::Internal
        } else {
            ProgressDriver::External
        }
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
