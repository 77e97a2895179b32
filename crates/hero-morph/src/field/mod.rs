//! Particle morph field: the per-frame blend, pointer repulsion and
//! plexus rebuild.
//!
//! All buffers are sized once in [`MorphField::new`]; [`MorphField::step`]
//! only overwrites them.

mod plexus;
mod types;

pub use plexus::{line_alpha, max_segments, PlexusBuffer};
pub use types::{FrameStats, MorphParams, MorphPhase};

use hero_common::HeroError;
use tracing::debug;

use crate::math::{lerp, mix3, rotate_y, smoothstep};
use crate::vertex::PointVertex;

/// Radial push of `pos` away from `pointer` in the xy plane.
///
/// Zero unless `strength > 0.5` and the particle is strictly inside
/// `radius`; otherwise `(1 - dist/radius) * force * strength` along the
/// pointer-to-particle direction.
pub fn repulsion(pos: [f32; 3], pointer: [f32; 2], radius: f32, force: f32, strength: f32) -> [f32; 2] {
    if strength <= 0.5 || radius <= 0.0 {
        return [0.0, 0.0];
    }
    let dx = pos[0] - pointer[0];
    let dy = pos[1] - pointer[1];
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= radius || dist <= f32::EPSILON {
        return [0.0, 0.0];
    }
    let push = (1.0 - dist / radius) * force * strength;
    [dx / dist * push, dy / dist * push]
}

pub struct MorphField {
    params: MorphParams,
    base: Vec<[f32; 3]>,
    target: Vec<[f32; 3]>,
    phase_offsets: Vec<f32>,
    working: Vec<[f32; 3]>,
    points: Vec<PointVertex>,
    points_dirty: bool,
    lines: PlexusBuffer,
    progress: f32,
    phase: MorphPhase,
}

impl MorphField {
    /// Build a field from base positions, phase offsets and flat `[x, y, z, ...]`
    /// targets. All three must describe the same number of particles.
    pub fn new(
        params: MorphParams,
        base: Vec<[f32; 3]>,
        phase_offsets: Vec<f32>,
        targets: &[f32],
    ) -> Result<Self, HeroError> {
        let n = base.len();
        if phase_offsets.len() != n {
            return Err(HeroError::Other(format!(
                "phase offsets for {} particles, expected {n}",
                phase_offsets.len()
            )));
        }
        let target = unflatten(targets, n)?;
        let points = base.iter().map(|&position| PointVertex { position }).collect();

        Ok(Self {
            params,
            working: base.clone(),
            base,
            target,
            phase_offsets,
            points,
            points_dirty: true,
            lines: PlexusBuffer::new(n),
            progress: 0.0,
            phase: MorphPhase::Scattering,
        })
    }

    /// Replace the targets after a new glyph-sampling pass. Count must not change.
    pub fn set_targets(&mut self, targets: &[f32]) -> Result<(), HeroError> {
        self.target = unflatten(targets, self.base.len())?;
        Ok(())
    }

    /// Clamp `progress` to [0, 1] and latch it so it never moves backward.
    /// NaN is ignored. Returns the progress in effect.
    pub fn latch_progress(&mut self, progress: f32) -> f32 {
        if !progress.is_nan() {
            self.progress = self.progress.max(progress.clamp(0.0, 1.0));
        }
        let phase = MorphPhase::from_progress(
            self.progress,
            self.params.reveal_start,
            self.params.reveal_end,
        );
        if phase != self.phase {
            debug!(from = ?self.phase, to = ?phase, progress = self.progress, "morph phase change");
            self.phase = phase;
        }
        self.progress
    }

    /// Pin progress at 1 without computing a frame.
    ///
    /// Used for reduced motion: the point buffer keeps what it holds, the
    /// line buffer is left untouched and the phase still describes those
    /// buffers, so it does not move.
    pub fn settle_static(&mut self) {
        self.progress = 1.0;
        debug!(phase = ?self.phase, "morph field settled without animation");
    }

    /// Shape-reveal strength for the current progress.
    pub fn shape_strength(&self) -> f32 {
        smoothstep(self.params.reveal_start, self.params.reveal_end, self.progress)
    }

    /// Compute one frame.
    ///
    /// `time` is elapsed seconds (drives the sphere spin), `progress` the
    /// timeline value, `pointer` the pointer in world xy if known.
    pub fn step(&mut self, time: f32, progress: f32, pointer: Option<[f32; 2]>) -> FrameStats {
        let progress = self.latch_progress(progress);
        let p = self.params;

        let strength = smoothstep(p.reveal_start, p.reveal_end, progress);
        let mix = strength * strength * strength;
        let angle = time * p.rotation_speed;

        for i in 0..self.base.len() {
            let rotated = rotate_y(self.base[i], angle);
            let mut pos = mix3(rotated, self.target[i], mix);
            if let Some(ptr) = pointer {
                let push = repulsion(pos, ptr, p.interaction_radius, p.interaction_force, strength);
                pos[0] += push[0];
                pos[1] += push[1];
            }
            self.working[i] = pos;
            self.points[i].position = pos;
        }
        self.points_dirty = true;

        let threshold = lerp(p.wide_threshold, p.narrow_threshold, strength);
        let fade = lerp(1.0, p.min_fade, strength);
        let segments = self.lines.rebuild(&self.working, threshold, p.max_alpha * fade);

        FrameStats {
            progress,
            shape_strength: strength,
            mix,
            segments,
        }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn params(&self) -> &MorphParams {
        &self.params
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    pub fn base_positions(&self) -> &[[f32; 3]] {
        &self.base
    }

    pub fn target_positions(&self) -> &[[f32; 3]] {
        &self.target
    }

    pub fn phase_offsets(&self) -> &[f32] {
        &self.phase_offsets
    }

    /// Positions computed by the last step.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.working
    }

    pub fn points(&self) -> &[PointVertex] {
        &self.points
    }

    pub fn lines(&self) -> &PlexusBuffer {
        &self.lines
    }

    pub fn points_dirty(&self) -> bool {
        self.points_dirty
    }

    /// Called after the GPU copy so the next upload can be skipped if nothing changed.
    pub fn mark_uploaded(&mut self) {
        self.points_dirty = false;
        self.lines.mark_clean();
    }
}

fn unflatten(flat: &[f32], n: usize) -> Result<Vec<[f32; 3]>, HeroError> {
    if flat.len() != n * 3 {
        return Err(HeroError::Other(format!(
            "target buffer holds {} floats, expected {}",
            flat.len(),
            n * 3
        )));
    }
    Ok(flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

// =============================================================================
// Tests
// =============================================================================
