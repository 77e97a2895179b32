//! Plexus line buffer: segments between every close particle pair.
//!
//! The vertex array is allocated once for the worst case (every unordered
//! pair linked) and each rebuild overwrites a prefix. Only
//! `segment_count * 2` vertices are ever drawn.

use std::ops::Range;

use crate::math::distance_sq;
use crate::vertex::LineVertex;

/// Alpha of a segment of length `dist` under `threshold`.
///
/// `(1 - dist/threshold) * max_alpha * fade`, clamped at zero.
pub fn line_alpha(dist: f32, threshold: f32, max_alpha: f32, fade: f32) -> f32 {
    if threshold <= 0.0 {
        return 0.0;
    }
    ((1.0 - dist / threshold) * max_alpha * fade).max(0.0)
}

/// Worst-case segment count for `n` particles: `n * (n - 1) / 2`.
pub fn max_segments(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

pub struct PlexusBuffer {
    particle_count: usize,
    vertices: Vec<LineVertex>,
    segment_count: usize,
    dirty: bool,
}

impl PlexusBuffer {
    pub fn new(particle_count: usize) -> Self {
        Self {
            particle_count,
            vertices: vec![LineVertex::default(); max_segments(particle_count) * 2],
            segment_count: 0,
            dirty: false,
        }
    }

    /// Rebuild from current positions. Returns the number of emitted segments.
    ///
    /// A pair `(i, j)`, `i < j`, is linked when its squared distance is below
    /// `threshold²`. Both vertices of the segment carry
    /// `(1 - dist/threshold) * alpha_scale`.
    pub fn rebuild(&mut self, positions: &[[f32; 3]], threshold: f32, alpha_scale: f32) -> usize {
        let n = positions.len().min(self.particle_count);
        let mut v = 0;

        if threshold > 0.0 {
            let threshold_sq = threshold * threshold;
            for i in 0..n {
                let a = positions[i];
                for &b in &positions[i + 1..n] {
                    let d2 = distance_sq(a, b);
                    if d2 >= threshold_sq {
                        continue;
                    }
                    let alpha = line_alpha(d2.sqrt(), threshold, alpha_scale, 1.0);
                    self.vertices[v] = LineVertex { position: a, alpha };
                    self.vertices[v + 1] = LineVertex { position: b, alpha };
                    v += 2;
                }
            }
        }

        self.segment_count = v / 2;
        self.dirty = true;
        self.segment_count
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Capacity in segments.
    pub fn capacity(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Active vertex range to draw.
    pub fn draw_range(&self) -> Range<u32> {
        0..(self.segment_count * 2) as u32
    }

    /// The vertices currently in use.
    pub fn active_vertices(&self) -> &[LineVertex] {
        &self.vertices[..self.segment_count * 2]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
