use std::path::Path;

use tracing::{debug, info, warn};

use crate::barcode::{encode, scale};
use crate::catalogue::Catalogue;
use crate::cell::CellCompositor;
use crate::config::SheetConfig;
use crate::error::{Result, SymbolError};
use crate::graphics::{Canvas, FontCache};
use crate::layout::{GridLayout, PageGeometry};

/// What happened to one catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    Rendered,
    /// Boundary only; the symbol could not be built.
    Skipped(SymbolError),
}

impl CellOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, CellOutcome::Rendered)
    }
}

/// A finished page plus one outcome per catalogue entry, in catalogue order.
#[derive(Debug)]
pub struct RenderedSheet {
    canvas: Canvas,
    geometry: PageGeometry,
    outcomes: Vec<CellOutcome>,
}

impl RenderedSheet {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn outcomes(&self) -> &[CellOutcome] {
        &self.outcomes
    }

    pub fn rendered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rendered()).count()
    }

    /// `(index, reason)` for every entry that was left empty.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &SymbolError)> + '_ {
        self.outcomes.iter().enumerate().filter_map(|(i, o)| match o {
            CellOutcome::Skipped(err) => Some((i, err)),
            CellOutcome::Rendered => None,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.canvas.save_png(path)?;
        info!(path = %path.display(), "sheet saved");
        Ok(())
    }
}

/// Lays out, encodes and draws a whole catalogue onto one page.
pub struct SheetBuilder<'a> {
    config: SheetConfig,
    fonts: &'a mut FontCache,
}

impl<'a> SheetBuilder<'a> {
    pub fn new(config: SheetConfig, fonts: &'a mut FontCache) -> Self {
        Self { config, fonts }
    }

    /// Draws every entry in catalogue order. Entries whose code cannot be
    /// encoded or scaled keep an empty cell and are reported as skipped;
    /// only layout problems fail the whole render.
    pub fn render(&mut self, catalogue: &Catalogue) -> Result<RenderedSheet> {
        let cfg = &self.config;
        let (width, height) = cfg.page_size_px();
        let grid = GridLayout::new(catalogue.len(), width, height, cfg.margin_px, cfg.columns)?
            .require_min_cell_height(cfg.min_cell_height_px)?;

        let mut canvas = Canvas::new(width, height);

        if let Some(title) = &cfg.title {
            let face = self.fonts.face(cfg.title_px);
            let baseline = cfg.margin_px as f32 / 2.0 + face.ascent() / 2.0;
            face.draw_centered(&mut canvas, title, width as f32 / 2.0, baseline);
        }

        let bar_w = (grid.cell_width() * cfg.barcode.width_ratio) as u32;
        let bar_h = (grid.cell_height() * cfg.barcode.height_ratio) as u32;
        let min_module_px = cfg.barcode.min_module_px;
        debug!(bar_w, bar_h, min_module_px, "barcode box");

        let mut compositor = CellCompositor::new(self.fonts, cfg.cell);
        let mut outcomes = Vec::with_capacity(catalogue.len());

        for (index, entry) in catalogue.iter().enumerate() {
            let Some(bounds) = grid.cell_bounds(index) else {
                break;
            };

            let symbol = encode(&entry.code).and_then(|raw| scale(&raw, bar_w, bar_h, min_module_px));
            match symbol {
                Ok(symbol) => {
                    compositor.draw(&mut canvas, &bounds, Some(&symbol), entry);
                    outcomes.push(CellOutcome::Rendered);
                }
                Err(err) => {
                    warn!(index, code = ?entry.code, error = %err, "skipping entry");
                    compositor.draw(&mut canvas, &bounds, None, entry);
                    outcomes.push(CellOutcome::Skipped(err));
                }
            }
        }

        let sheet = RenderedSheet { canvas, geometry: grid.geometry(), outcomes };
        info!(
            entries = catalogue.len(),
            rendered = sheet.rendered_count(),
            skipped = catalogue.len() - sheet.rendered_count(),
            width,
            height,
            "sheet rendered"
        );
        Ok(sheet)
    }
}
