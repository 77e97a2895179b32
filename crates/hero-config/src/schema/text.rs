//! Glyph sampling configuration types.

use serde::{Deserialize, Serialize};

/// Offscreen text raster and sampling settings.
///
/// `extent_x`/`extent_y` are the half-extents of the normalized range the
/// canvas is mapped into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub words: Vec<String>,
    pub font_family: String,
    pub font_size: u32,
    pub bold: bool,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub word_spacing: u32,
    pub sample_stride: u32,
    pub alpha_threshold: u32,
    pub extent_x: f64,
    pub extent_y: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            words: vec!["CREATIVE".into(), "DEVELOPER".into()],
            font_family: "sans-serif".into(),
            font_size: 110,
            bold: true,
            canvas_width: 1400,
            canvas_height: 770,
            word_spacing: 40,
            sample_stride: 4,
            alpha_threshold: 150,
            extent_x: 1.9,
            extent_y: 1.05,
        }
    }
}
