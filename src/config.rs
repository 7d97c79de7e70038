use crate::consts::*;

/// Everything the renderer needs besides the catalogue and the font.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub page: PageSize,
    pub margin_px: f64,
    pub columns: usize,
    /// Cells shorter than this mean the catalogue no longer fits one page.
    pub min_cell_height_px: f64,
    pub barcode: BarcodeStyle,
    pub cell: CellStyle,
    pub title: Option<String>,
    pub title_px: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl PageSize {
    pub const A4: PageSize = PageSize { width_in: PAGE_W_IN, height_in: PAGE_H_IN, dpi: DPI };

    /// Pixel size, truncated: A4 at 300 dpi is 2481x3507.
    pub fn to_px(self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((self.width_in * dpi) as u32, (self.height_in * dpi) as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodeStyle {
    pub width_ratio: f64,
    pub height_ratio: f64,
    /// Narrowest allowed bar, in pixels. Smaller targets skip the entry.
    pub min_module_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub top_padding: f64,
    pub label_gap: f64,
    pub line_gap: f64,
    pub inner_margin: f64,
    pub line_spacing: f32,
    pub border_luma: u8,
    pub label_px: f32,
    pub description_px: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page: PageSize::A4,
            margin_px: MARGIN_PX,
            columns: COLUMNS,
            min_cell_height_px: MIN_CELL_H_PX,
            barcode: BarcodeStyle::default(),
            cell: CellStyle::default(),
            title: Some(TITLE.to_string()),
            title_px: TITLE_PX,
        }
    }
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            width_ratio: BARCODE_W_RATIO,
            height_ratio: BARCODE_H_RATIO,
            min_module_px: MIN_MODULE_PX,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            top_padding: TOP_PAD,
            label_gap: LABEL_GAP,
            line_gap: LINE_GAP,
            inner_margin: INNER_MARGIN,
            line_spacing: LINE_SPACING,
            border_luma: BORDER_LUMA,
            label_px: LABEL_PX,
            description_px: DESC_PX,
        }
    }
}

impl SheetConfig {
    pub fn page_size_px(&self) -> (u32, u32) {
        self.page.to_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_at_300_dpi() {
        assert_eq!(SheetConfig::default().page_size_px(), (2481, 3507));
    }

    #[test]
    fn dpi_scales_the_page() {
        let page = PageSize { dpi: 150, ..PageSize::A4 };
        assert_eq!(page.to_px(), (1240, 1753));
    }
}
