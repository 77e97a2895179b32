//! Glyph point-cloud sampler.
//!
//! Draws the word list onto an offscreen raster, collects opaque pixels on a
//! fixed stride, and spreads `N` particles evenly over those candidates in a
//! normalized coordinate range. An empty raster yields all-zero targets.

mod cache;
mod raster;
mod text_raster;

pub use cache::TargetCache;
pub use raster::{AlphaMask, GlyphRaster};
pub use text_raster::TextRaster;

use hero_config::schema::TextConfig;
use tracing::{debug, warn};

/// Sampling parameters that do not belong to the raster itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Horizontal gap in pixels between consecutive words.
    pub word_spacing: f32,
    /// Only every `stride`-th pixel on each axis is inspected.
    pub stride: u32,
    /// Pixels must have alpha strictly above this to become candidates.
    pub alpha_threshold: u8,
    /// Half-extents of the output range: x in `[-extent[0], extent[0]]`, y likewise.
    pub extent: [f32; 2],
}

impl SamplerSettings {
    pub fn from_config(config: &TextConfig) -> Self {
        Self {
            word_spacing: config.word_spacing as f32,
            stride: config.sample_stride.max(1),
            alpha_threshold: config.alpha_threshold.min(u8::MAX as u32) as u8,
            extent: [config.extent_x as f32, config.extent_y as f32],
        }
    }
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self::from_config(&TextConfig::default())
    }
}

/// Draw `words` left to right as one horizontally centred line.
///
/// The cursor advances by each word's measured width plus `word_spacing`.
pub fn rasterize_words(raster: &mut dyn GlyphRaster, words: &[String], word_spacing: f32) {
    raster.clear();
    if words.is_empty() {
        return;
    }

    let widths: Vec<f32> = words.iter().map(|w| raster.measure(w)).collect();
    let total: f32 = widths.iter().sum::<f32>() + word_spacing * (words.len() - 1) as f32;
    let (width, height) = raster.dimensions();

    let mut cursor = (width as f32 - total) / 2.0;
    let center_y = height as f32 / 2.0;
    for (word, advance) in words.iter().zip(&widths) {
        raster.fill_text(word, cursor, center_y);
        cursor += advance + word_spacing;
    }
}

/// Raster coordinates of every strided pixel whose alpha exceeds `threshold`,
/// in row-major order.
pub fn collect_candidates(raster: &dyn GlyphRaster, stride: u32, threshold: u8) -> Vec<[u32; 2]> {
    let (width, height) = raster.dimensions();
    let stride = stride.max(1) as usize;
    let mut candidates = Vec::new();
    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            if raster.alpha(x, y) > threshold {
                candidates.push([x, y]);
            }
        }
    }
    candidates
}

/// Candidate index for each of `count` particles: `floor(i / count * len)`.
///
/// Computed as `i * len / count` in integer arithmetic so the spread is exact.
pub fn select_indices(len: usize, count: usize) -> impl Iterator<Item = usize> {
    (0..count).map(move |i| if len == 0 { 0 } else { i * len / count })
}

/// Map a raster pixel into the normalized range, y up, z = 0.
pub fn to_normalized(pixel: [u32; 2], dimensions: (u32, u32), extent: [f32; 2]) -> [f32; 3] {
    let (width, height) = dimensions;
    let u = pixel[0] as f32 / width.max(1) as f32;
    let v = pixel[1] as f32 / height.max(1) as f32;
    [(u * 2.0 - 1.0) * extent[0], (1.0 - v * 2.0) * extent[1], 0.0]
}

/// Spread `count` particles over `candidates`, returning `count * 3` floats.
///
/// With no candidates every target is the origin.
pub fn targets_from_candidates(
    candidates: &[[u32; 2]],
    dimensions: (u32, u32),
    extent: [f32; 2],
    count: usize,
) -> Vec<f32> {
    let mut targets = vec![0.0f32; count * 3];
    if candidates.is_empty() {
        return targets;
    }
    for (i, idx) in select_indices(candidates.len(), count).enumerate() {
        let p = to_normalized(candidates[idx], dimensions, extent);
        targets[i * 3..i * 3 + 3].copy_from_slice(&p);
    }
    targets
}

/// Rasterize `words` and sample `count` target positions from the result.
pub fn sample_targets(
    raster: &mut dyn GlyphRaster,
    words: &[String],
    settings: &SamplerSettings,
    count: usize,
) -> Vec<f32> {
    rasterize_words(raster, words, settings.word_spacing);
    let candidates = collect_candidates(raster, settings.stride, settings.alpha_threshold);

    if candidates.is_empty() {
        warn!(
            words = ?words,
            "glyph raster produced no sample-able pixels; targets collapse to origin"
        );
    } else {
        debug!(
            candidates = candidates.len(),
            particles = count,
            "sampled glyph point cloud"
        );
    }

    targets_from_candidates(&candidates, raster.dimensions(), settings.extent, count)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(stride: u32) -> SamplerSettings {
        SamplerSettings {
            word_spacing: 0.0,
            stride,
            alpha_threshold: 150,
            extent: [1.9, 1.05],
        }
    }

    fn synthetic(len: usize) -> Vec<[u32; 2]> {
        (0..len as u32).map(|i| [i % 50, i / 50]).collect()
    }

    #[test]
    fn select_indices_spreads_evenly() {
        let idx: Vec<usize> = select_indices(10, 4).collect();
        assert_eq!(idx, vec![0, 2, 5, 7]);
    }

    #[test]
    fn select_indices_repeats_when_fewer_candidates() {
        let idx: Vec<usize> = select_indices(3, 6).collect();
        assert_eq!(idx, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn output_length_is_count_times_three() {
        for (len, count) in [(3, 10), (10, 10), (5000, 10), (1, 1), (7, 1)] {
            let targets = targets_from_candidates(&synthetic(len), (50, 200), [1.9, 1.05], count);
            assert_eq!(targets.len(), count * 3, "len={len} count={count}");
        }
    }

    #[test]
    fn equal_candidates_and_count_uses_each_once() {
        let candidates = synthetic(8);
        let idx: Vec<usize> = select_indices(candidates.len(), 8).collect();
        assert_eq!(idx, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn empty_candidates_yield_all_zero() {
        let targets = targets_from_candidates(&[], (100, 100), [1.9, 1.05], 16);
        assert_eq!(targets.len(), 48);
        assert!(targets.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn blank_raster_yields_all_zero() {
        let mut mask = AlphaMask::new(64, 32, 4, 8);
        let targets = sample_targets(&mut mask, &[], &settings(1), 5);
        assert_eq!(targets, vec![0.0; 15]);
    }

    #[test]
    fn normalized_mapping_corners() {
        let dims = (200, 100);
        assert_eq!(to_normalized([0, 0], dims, [1.9, 1.05]), [-1.9, 1.05, 0.0]);
        let center = to_normalized([100, 50], dims, [1.9, 1.05]);
        assert!(center[0].abs() < 1e-6 && center[1].abs() < 1e-6);
    }

    #[test]
    fn targets_stay_inside_extent() {
        let mut mask = AlphaMask::new(120, 60, 10, 20);
        let words = vec!["HI".to_string(), "YOU".to_string()];
        let targets = sample_targets(&mut mask, &words, &settings(2), 64);
        for p in targets.chunks(3) {
            assert!(p[0].abs() <= 1.9 && p[1].abs() <= 1.05);
            assert_eq!(p[2], 0.0);
        }
    }

    #[test]
    fn words_are_laid_out_left_to_right_with_spacing() {
        let mut mask = AlphaMask::new(40, 10, 2, 4);
        let words = vec!["AB".to_string(), "C".to_string()];
        // widths 4 + 2, spacing 6 => total 12, starts at x = 14
        rasterize_words(&mut mask, &words, 6.0);
        assert_eq!(mask.alpha(13, 5), 0);
        assert_eq!(mask.alpha(14, 5), 255);
        assert_eq!(mask.alpha(17, 5), 255);
        assert_eq!(mask.alpha(18, 5), 0);
        assert_eq!(mask.alpha(23, 5), 0);
        assert_eq!(mask.alpha(24, 5), 255);
        assert_eq!(mask.alpha(25, 5), 255);
        assert_eq!(mask.alpha(26, 5), 0);
    }

    #[test]
    fn stride_skips_pixels() {
        let mut mask = AlphaMask::new(8, 8, 1, 1);
        mask.fill_rect(0, 0, 8, 8, 255);
        assert_eq!(collect_candidates(&mask, 1, 150).len(), 64);
        assert_eq!(collect_candidates(&mask, 2, 150).len(), 16);
        assert_eq!(collect_candidates(&mask, 3, 150).len(), 9);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut mask = AlphaMask::new(4, 1, 1, 1);
        mask.fill_rect(0, 0, 1, 1, 150);
        mask.fill_rect(1, 0, 1, 1, 151);
        let candidates = collect_candidates(&mask, 1, 150);
        assert_eq!(candidates, vec![[1, 0]]);
    }

    #[test]
    fn two_letter_word_four_particles_ten_candidates() {
        // 1x5 block glyphs: "AB" covers exactly 10 pixels.
        let mut mask = AlphaMask::new(10, 9, 1, 5);
        let words = vec!["AB".to_string()];
        rasterize_words(&mut mask, &words, 0.0);
        let candidates = collect_candidates(&mask, 1, 150);
        assert_eq!(candidates.len(), 10);

        let targets = sample_targets(&mut mask, &words, &settings(1), 4);
        assert_eq!(targets.len(), 12);

        let dims = mask.dimensions();
        for (i, idx) in [0usize, 2, 5, 7].into_iter().enumerate() {
            let expected = to_normalized(candidates[idx], dims, [1.9, 1.05]);
            assert_eq!(&targets[i * 3..i * 3 + 3], &expected[..]);
        }
    }
}
