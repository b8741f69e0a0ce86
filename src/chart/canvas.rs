//! In-memory RGBA raster the chart is drawn onto.

use super::colormap::Rgb;
use super::font::glyph;
use crate::utils::config::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// A rendered chart, 8-bit RGBA, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ChartImage {
    /// Canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&[background.0, background.1, background.2, 0xFF]);
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.pixels[i] = color.0;
        self.pixels[i + 1] = color.1;
        self.pixels[i + 2] = color.2;
    }

    /// Fill `[x, x + w) x [y, y + h)`, clipped to the canvas
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i64);
        let y1 = (y + h).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    /// One-pixel outline
    pub fn stroke_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.hline(x, x + w - 1, y, color);
        self.hline(x, x + w - 1, y + h - 1, color);
        self.vline(x, y, y + h - 1, color);
        self.vline(x + w - 1, y, y + h - 1, color);
    }

    /// Inclusive horizontal line
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.put(x, y, color);
        }
    }

    /// Inclusive vertical line
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgb) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.put(x, y, color);
        }
    }

    /// Draw text with its top-left corner at `(x, y)`
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb) {
        let scale = scale.max(1) as i64;
        let mut pen = x;

        for c in text.chars() {
            for (col, bits) in glyph(c).iter().enumerate() {
                for row in 0..GLYPH_HEIGHT as i64 {
                    if bits & (1 << row) != 0 {
                        self.fill_rect(
                            pen + col as i64 * scale,
                            y + row * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen += GLYPH_ADVANCE as i64 * scale;
        }
    }
}

/// Pixel width of `text` at `scale`, without trailing spacing
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    ((chars - 1) * GLYPH_ADVANCE + GLYPH_WIDTH) * scale.max(1)
}
