use std::collections::HashMap;
use std::path::Path;

use image::{imageops, GrayImage, Luma};
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};

const WHITE: Luma<u8> = Luma([255]);

/// The page raster. White background, everything else is drawn darker.
#[derive(Debug, Clone)]
pub struct Canvas {
    img: GrayImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { img: GrayImage::from_pixel(width, height, WHITE) }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &GrayImage {
        &self.img
    }

    /// 1 px outline of the rectangle `[x0, x1) x [y0, y1)`, clipped to the page.
    pub fn stroke_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, luma: u8) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        for x in x0..x1 {
            self.put(x, y0, luma);
            self.put(x, y1 - 1, luma);
        }
        for y in y0..y1 {
            self.put(x0, y, luma);
            self.put(x1 - 1, y, luma);
        }
    }

    /// Copy `src` with its top-left corner at (x, y); parts off the page are dropped.
    pub fn draw_image(&mut self, src: &GrayImage, x: i64, y: i64) {
        imageops::replace(&mut self.img, src, x, y);
    }

    /// Darken towards black by glyph coverage `v` (0..=1).
    fn darken(&mut self, x: i64, y: i64, v: f32) {
        if let Some(px) = self.pixel_mut(x, y) {
            let keep = 1.0 - v.clamp(0.0, 1.0);
            px.0[0] = (px.0[0] as f32 * keep).round() as u8;
        }
    }

    fn put(&mut self, x: i64, y: i64, luma: u8) {
        if let Some(px) = self.pixel_mut(x, y) {
            px.0[0] = luma;
        }
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Luma<u8>> {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return None;
        }
        Some(self.img.get_pixel_mut(x as u32, y as u32))
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.img
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })
    }
}

/// One font at one pixel size.
#[derive(Clone)]
pub struct Face {
    font: Font<'static>,
    scale: Scale,
    ascent: f32,
    line_height: f32,
}

impl Face {
    fn new(font: Font<'static>, px: f32) -> Self {
        let scale = Scale::uniform(px);
        let vm = font.v_metrics(scale);
        let ascent = vm.ascent.ceil();
        let line_height = (vm.ascent - vm.descent + vm.line_gap).ceil();
        Self { font, scale, ascent, line_height }
    }

    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Inked width: right edge of the last glyph with a bounding box.
    pub fn width(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, self.ascent))
            .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x as f32))
            .fold(0.0, f32::max)
    }

    /// Draw `text` with its left edge at `x` and baseline at `baseline`.
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: f32, baseline: f32) {
        for g in self.font.layout(text, self.scale, point(x, baseline)) {
            if let Some(bb) = g.pixel_bounding_box() {
                g.draw(|gx, gy, v| {
                    if v > 0.0 {
                        canvas.darken(bb.min.x as i64 + gx as i64, bb.min.y as i64 + gy as i64, v);
                    }
                });
            }
        }
    }

    pub fn draw_centered(&self, canvas: &mut Canvas, text: &str, center_x: f32, baseline: f32) {
        let x = (center_x - self.width(text) / 2.0).round();
        self.draw(canvas, text, x, baseline.round());
    }

    /// Greedy word wrap; words wider than `max_width` are split between characters.
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();

        for word in text.split_whitespace() {
            let candidate = if line.is_empty() { word.to_string() } else { format!("{line} {word}") };
            if self.width(&candidate) <= max_width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if self.width(word) <= max_width {
                line = word.to_string();
                continue;
            }
            for ch in word.chars() {
                line.push(ch);
                if self.width(&line) > max_width && line.chars().count() > 1 {
                    line.pop();
                    lines.push(std::mem::take(&mut line));
                    line.push(ch);
                }
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

/// Faces keyed by pixel size, parsed from one font and built on first use.
pub struct FontCache {
    font: Font<'static>,
    faces: HashMap<u32, Face>,
}

impl FontCache {
    pub fn from_static(bytes: &'static [u8]) -> Result<Self> {
        let font = Font::try_from_bytes(bytes).ok_or_else(|| Error::Font("cannot parse font data".into()))?;
        Ok(Self::with_font(font))
    }

    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| Error::Font("cannot parse font data".into()))?;
        Ok(Self::with_font(font))
    }

    fn with_font(font: Font<'static>) -> Self {
        Self { font, faces: HashMap::new() }
    }

    pub fn face(&mut self, px: f32) -> &Face {
        let font = &self.font;
        self.faces.entry(px.to_bits()).or_insert_with(|| {
            tracing::debug!(px, "building font face");
            Face::new(font.clone(), px)
        })
    }

    pub fn cached_sizes(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FONT_BYTES;

    fn fonts() -> FontCache {
        FontCache::from_static(FONT_BYTES).unwrap()
    }

    #[test]
    fn faces_are_memoised_per_size() {
        let mut fonts = fonts();
        let a = fonts.face(11.0).line_height();
        let b = fonts.face(11.0).line_height();
        assert_eq!(a, b);
        assert_eq!(fonts.cached_sizes(), 1);
        fonts.face(8.0);
        assert_eq!(fonts.cached_sizes(), 2);
    }

    #[test]
    fn garbage_font_bytes_are_a_font_error() {
        assert!(matches!(FontCache::from_vec(vec![0, 1, 2, 3]), Err(Error::Font(_))));
    }

    #[test]
    fn wider_text_measures_wider() {
        let mut fonts = fonts();
        let face = fonts.face(24.0);
        assert_eq!(face.width(""), 0.0);
        assert!(face.width("Write") > 0.0);
        assert!(face.width("Write & quit") > face.width("Write"));
    }

    #[test]
    fn wrap_breaks_on_words_within_width() {
        let mut fonts = fonts();
        let face = fonts.face(24.0);
        let max = face.width("Convert indentation");
        let lines = face.wrap("Convert indentation to current settings", max);
        assert!(lines.len() >= 2);
        assert_eq!(lines[0], "Convert indentation");
        assert_eq!(lines.join(" "), "Convert indentation to current settings");
        for l in &lines {
            assert!(face.width(l) <= max);
        }
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let mut fonts = fonts();
        let face = fonts.face(24.0);
        let max = face.width("clip");
        let lines = face.wrap("clipboard=unnamedplus", max);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "clipboard=unnamedplus");
        for l in &lines {
            assert!(face.width(l) <= max);
        }
    }

    #[test]
    fn text_darkens_only_near_its_position() {
        let mut fonts = fonts();
        let mut canvas = Canvas::new(200, 60);
        let face = fonts.face(24.0);
        face.draw_centered(&mut canvas, "Wq", 100.0, 40.0);
        let img = canvas.image();
        assert!(img.pixels().any(|p| p.0[0] < 128));
        for y in 0..60 {
            assert_eq!(img.get_pixel(5, y).0[0], 255);
            assert_eq!(img.get_pixel(195, y).0[0], 255);
        }
    }

    #[test]
    fn stroke_rect_draws_an_outline_and_clips() {
        let mut canvas = Canvas::new(20, 20);
        canvas.stroke_rect(2, 3, 10, 12, 230);
        let img = canvas.image();
        assert_eq!(img.get_pixel(2, 3).0[0], 230);
        assert_eq!(img.get_pixel(9, 11).0[0], 230);
        assert_eq!(img.get_pixel(5, 7).0[0], 255);
        assert_eq!(img.get_pixel(10, 12).0[0], 255);
        canvas.stroke_rect(-5, -5, 40, 40, 0);
    }
}
