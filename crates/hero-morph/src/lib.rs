//! Particle text-morph effect for a portfolio hero section.
//!
//! Text is rasterized and sampled into a target point cloud, a fixed pool of
//! particles scattered in a sphere blends toward it as the intro timeline
//! plays, and nearby particles are joined by fading plexus lines.

pub mod field;
pub mod gpu;
pub mod hero;
pub mod interaction;
pub mod math;
pub mod matrix;
pub mod perf;
pub mod sampler;
pub mod snapshot;
pub mod sphere;
pub mod timeline;
pub mod vertex;

pub use field::{FrameStats, MorphField, MorphParams, MorphPhase, PlexusBuffer};
pub use gpu::MorphBuffers;
pub use hero::{HeroMorph, MotionPreference, ProgressDriver};
pub use interaction::InteractionState;
pub use perf::FrameTimer;
pub use sampler::{AlphaMask, GlyphRaster, SamplerSettings, TargetCache, TextRaster};
pub use snapshot::SnapshotStyle;
pub use timeline::{Timeline, TimelineEvent, TimelineState};
pub use vertex::{LineVertex, PointVertex};
