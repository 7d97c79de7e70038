//! Printable barcode cheat sheet for vim ex commands (A4, 300 dpi).
//! - Fixed 4-column grid, rows grow with the catalogue, one page only
//! - Code 128 set B symbols, integer module width, centred per cell
//! - Label + wrapped description under each barcode
//! - Entries that can't be encoded leave an empty cell and are reported,
//!   they never abort the page

pub mod barcode;
pub mod builder;
pub mod catalogue;
pub mod cell;
pub mod config;
pub mod consts;
pub mod error;
pub mod graphics;
pub mod layout;

pub use barcode::{encode, scale, EncodedSymbol};
pub use builder::{CellOutcome, RenderedSheet, SheetBuilder};
pub use catalogue::{Catalogue, CatalogueEntry};
pub use config::SheetConfig;
pub use error::{Error, Result, SymbolError};
pub use graphics::FontCache;
pub use layout::{CellBounds, GridLayout, PageGeometry};

/// Render `catalogue` with the embedded font.
pub fn render_sheet(catalogue: &Catalogue, config: SheetConfig) -> Result<RenderedSheet> {
    let mut fonts = FontCache::from_static(consts::FONT_BYTES)?;
    SheetBuilder::new(config, &mut fonts).render(catalogue)
}
