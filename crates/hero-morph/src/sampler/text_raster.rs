//! Font-backed raster built on cosmic-text's shaper and swash rasterizer.

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use hero_config::schema::TextConfig;

use super::raster::GlyphRaster;

/// Rasterizes words with system fonts into an 8-bit coverage mask.
///
/// If no usable font is installed nothing is drawn and the mask stays empty,
/// which the sampler treats as "no candidates".
pub struct TextRaster {
    font_system: FontSystem,
    swash_cache: SwashCache,
    metrics: Metrics,
    family: String,
    bold: bool,
    width: u32,
    height: u32,
    mask: Vec<u8>,
}

impl TextRaster {
    pub fn new(width: u32, height: u32, family: &str, font_size: f32, bold: bool) -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            metrics: Metrics::new(font_size, font_size * 1.2),
            family: family.to_string(),
            bold,
            width,
            height,
            mask: vec![0; width as usize * height as usize],
        }
    }

    /// Create from the `[text]` config section.
    pub fn from_config(config: &TextConfig) -> Self {
        Self::new(
            config.canvas_width,
            config.canvas_height,
            &config.font_family,
            config.font_size as f32,
            config.bold,
        )
    }

    fn shape(&mut self, word: &str) -> Buffer {
        let family = match self.family.as_str() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let weight = if self.bold { Weight::BOLD } else { Weight::NORMAL };
        let attrs = Attrs::new().family(family).weight(weight);

        let mut buffer = Buffer::new(&mut self.font_system, self.metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, word, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl GlyphRaster for TextRaster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn measure(&mut self, word: &str) -> f32 {
        let buffer = self.shape(word);
        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    fn fill_text(&mut self, word: &str, x: f32, center_y: f32) {
        let buffer = self.shape(word);
        let origin_x = x.round() as i32;
        let origin_y = (center_y - self.metrics.line_height / 2.0).round() as i32;
        let (width, height) = (self.width as i32, self.height as i32);
        let mask = &mut self.mask;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(255, 255, 255),
            |gx, gy, w, h, color| {
                let alpha = color.a();
                if alpha == 0 {
                    return;
                }
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        let px = origin_x + gx + dx;
                        let py = origin_y + gy + dy;
                        if px < 0 || py < 0 || px >= width || py >= height {
                            continue;
                        }
                        let idx = py as usize * width as usize + px as usize;
                        mask[idx] = mask[idx].max(alpha);
                    }
                }
            },
        );
    }

    fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.mask[y as usize * self.width as usize + x as usize]
    }

    fn clear(&mut self) {
        self.mask.fill(0);
    }
}
