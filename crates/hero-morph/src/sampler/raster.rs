//! Raster capability used by the glyph sampler.

/// An offscreen 8-bit alpha canvas that can measure and draw text.
///
/// The sampler only ever talks to this trait, so the selection algorithm can
/// run against a synthetic mask as easily as against real font rendering.
pub trait GlyphRaster {
    /// Canvas size in pixels as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Advance width of `word` in pixels.
    fn measure(&mut self, word: &str) -> f32;

    /// Draw `word` with its left edge at `x`, vertically centred on `center_y`.
    fn fill_text(&mut self, word: &str, x: f32, center_y: f32);

    /// Alpha at `(x, y)`. Out-of-bounds reads return 0.
    fn alpha(&self, x: u32, y: u32) -> u8;

    /// Reset every pixel to transparent.
    fn clear(&mut self);
}

/// In-memory alpha mask that draws every character as a solid block.
///
/// Useful wherever real fonts are unavailable or undesirable: each glyph is a
/// `glyph_width` × `glyph_height` rectangle and advances by `glyph_width`.
#[derive(Debug, Clone)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    glyph_width: u32,
    glyph_height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32, glyph_width: u32, glyph_height: u32) -> Self {
        Self {
            width,
            height,
            glyph_width,
            glyph_height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Fill a rectangle, clipped to the canvas. Existing alpha is kept where higher.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, alpha: u8) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i64).min(self.width as i64);
        let y1 = (y + h as i64).min(self.height as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = py as usize * self.width as usize + px as usize;
                self.data[idx] = self.data[idx].max(alpha);
            }
        }
    }

    /// Number of pixels with alpha above `threshold`.
    pub fn count_above(&self, threshold: u8) -> usize {
        self.data.iter().filter(|&&a| a > threshold).count()
    }
}

impl GlyphRaster for AlphaMask {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn measure(&mut self, word: &str) -> f32 {
        (word.chars().count() as u32 * self.glyph_width) as f32
    }

    fn fill_text(&mut self, word: &str, x: f32, center_y: f32) {
        let top = (center_y - self.glyph_height as f32 / 2.0).round() as i64;
        let mut cursor = x.round() as i64;
        for ch in word.chars() {
            if !ch.is_whitespace() {
                self.fill_rect(cursor, top, self.glyph_width, self.glyph_height, 255);
            }
            cursor += self.glyph_width as i64;
        }
    }

    fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}
