//! Draws one catalogue entry into its cell.
//!
//! Vertical stack, top to bottom: padding, barcode, label (baseline
//! `label_gap` below the bars), description (top `line_gap` below the
//! label baseline, wrapped to the cell's inner width).

use crate::barcode::EncodedSymbol;
use crate::catalogue::CatalogueEntry;
use crate::config::CellStyle;
use crate::graphics::{Canvas, FontCache};
use crate::layout::CellBounds;

/// Where the pieces of a cell ended up, in page pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlacement {
    pub symbol_x: i64,
    pub symbol_y: i64,
    pub label_baseline: f64,
    pub description_top: f64,
    pub description_lines: Vec<String>,
}

pub struct CellCompositor<'a> {
    fonts: &'a mut FontCache,
    style: CellStyle,
}

impl<'a> CellCompositor<'a> {
    pub fn new(fonts: &'a mut FontCache, style: CellStyle) -> Self {
        Self { fonts, style }
    }

    /// Light outline; neighbouring cells share their edge pixels.
    pub fn draw_boundary(&self, canvas: &mut Canvas, bounds: &CellBounds) {
        let x0 = bounds.x.round() as i64;
        let y0 = bounds.y.round() as i64;
        let x1 = bounds.right().round() as i64;
        let y1 = bounds.bottom().round() as i64;
        canvas.stroke_rect(x0, y0, x1 + 1, y1 + 1, self.style.border_luma);
    }

    /// Boundary, then symbol and text when there is a symbol to show.
    pub fn draw(
        &mut self,
        canvas: &mut Canvas,
        bounds: &CellBounds,
        symbol: Option<&EncodedSymbol>,
        entry: &CatalogueEntry,
    ) -> Option<CellPlacement> {
        self.draw_boundary(canvas, bounds);
        symbol.map(|symbol| self.draw_contents(canvas, bounds, symbol, entry))
    }

    pub fn draw_contents(
        &mut self,
        canvas: &mut Canvas,
        bounds: &CellBounds,
        symbol: &EncodedSymbol,
        entry: &CatalogueEntry,
    ) -> CellPlacement {
        let style = self.style;
        let cx = bounds.center_x();

        let symbol_x = (cx - symbol.width() as f64 / 2.0) as i64;
        let top = bounds.y + style.top_padding;
        let symbol_y = top as i64;
        canvas.draw_image(symbol.bitmap(), symbol_x, symbol_y);

        let label_baseline = top + symbol.height() as f64 + style.label_gap;
        self.fonts
            .face(style.label_px)
            .draw_centered(canvas, &entry.label, cx as f32, label_baseline as f32);

        let description_top = label_baseline + style.line_gap;
        let box_x = bounds.x + style.inner_margin;
        let box_w = bounds.width - 2.0 * style.inner_margin;
        let face = self.fonts.face(style.description_px);
        let description_lines = face.wrap(&entry.description, box_w as f32);
        let advance = face.line_height() * style.line_spacing;
        let center = (box_x + box_w / 2.0) as f32;
        for (i, line) in description_lines.iter().enumerate() {
            let baseline = description_top as f32 + i as f32 * advance + face.ascent();
            face.draw_centered(canvas, line, center, baseline);
        }

        CellPlacement { symbol_x, symbol_y, label_baseline, description_top, description_lines }
    }
}
