// Page and layout tuning constants
pub const PAGE_W_IN: f64 = 8.27;   // A4
pub const PAGE_H_IN: f64 = 11.69;
pub const DPI: u32 = 300;

pub const MARGIN_PX: f64 = 80.0;
pub const COLUMNS: usize = 4;      // keeps barcodes wide enough to scan
pub const MIN_CELL_H_PX: f64 = 48.0;

pub const BARCODE_W_RATIO: f64 = 0.80;  // of cell width
pub const BARCODE_H_RATIO: f64 = 0.38;  // of cell height
pub const MIN_MODULE_PX: u32 = 1;

pub const TOP_PAD: f64 = 6.0;      // cell top -> barcode
pub const LABEL_GAP: f64 = 8.0;    // barcode bottom -> label baseline
pub const LINE_GAP: f64 = 12.0;    // label baseline -> description top
pub const INNER_MARGIN: f64 = 6.0; // description box inset, each side
pub const LINE_SPACING: f32 = 1.3;

pub const TITLE_PX: f32 = 24.0;
pub const LABEL_PX: f32 = 11.0;
pub const DESC_PX: f32 = 8.0;

pub const BORDER_LUMA: u8 = 230;   // light grey cell boundary

pub const TITLE: &str = "Vim Barcode Cheat Sheet (Scanner adds <CR>)";
pub const OUTPUT_PATH: &str = "vim-barcodes-a4.png";

/// DejaVu Sans, embedded so renders don't depend on installed fonts.
pub const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
