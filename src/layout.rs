//! Grid layout: page geometry and per-cell rectangles.
//!
//! Columns are fixed; rows grow with the catalogue so everything lands on a
//! single page. Cells tile the area inside the margins exactly.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub margin_px: f64,
    pub columns: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellBounds {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    geometry: PageGeometry,
    entry_count: usize,
    cell_width: f64,
    cell_height: f64,
}

impl GridLayout {
    pub fn new(
        entry_count: usize,
        page_width: u32,
        page_height: u32,
        margin: f64,
        columns: usize,
    ) -> Result<Self> {
        if entry_count == 0 {
            return Err(Error::Configuration("catalogue is empty".into()));
        }
        if columns == 0 {
            return Err(Error::Configuration("column count must be at least 1".into()));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::Configuration(format!("invalid margin {margin}")));
        }

        let rows = entry_count.div_ceil(columns);

        let inner_w = page_width as f64 - 2.0 * margin;
        let inner_h = page_height as f64 - 2.0 * margin;
        let cell_width = inner_w / columns as f64;
        let cell_height = inner_h / rows as f64;

        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(Error::Configuration(format!(
                "margin {margin}px leaves no room on a {page_width}x{page_height}px page \
                 (cell would be {cell_width:.2}x{cell_height:.2}px)"
            )));
        }

        let geometry = PageGeometry {
            width_px: page_width,
            height_px: page_height,
            margin_px: margin,
            columns,
            rows,
        };
        tracing::debug!(
            entries = entry_count,
            columns,
            rows,
            cell_width,
            cell_height,
            "grid layout"
        );

        Ok(Self { geometry, entry_count, cell_width, cell_height })
    }

    /// Rejects layouts whose cells would be shorter than `min_height` px,
    /// i.e. catalogues that no longer fit one page.
    pub fn require_min_cell_height(self, min_height: f64) -> Result<Self> {
        if self.cell_height < min_height {
            return Err(Error::Configuration(format!(
                "{} entries need {} rows; cells would be {:.2}px tall, below the {min_height}px minimum \
                 (catalogue exceeds one page)",
                self.entry_count, self.geometry.rows, self.cell_height
            )));
        }
        Ok(self)
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Row-major cell rectangle for `index`, `None` past the last entry.
    pub fn cell_bounds(&self, index: usize) -> Option<CellBounds> {
        if index >= self.entry_count {
            return None;
        }
        let col = index % self.geometry.columns;
        let row = index / self.geometry.columns;
        let margin = self.geometry.margin_px;

        Some(CellBounds {
            x: margin + col as f64 * self.cell_width,
            y: margin + row as f64 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        })
    }
}
