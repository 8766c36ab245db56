//! Maps the grid's pixel geometry onto terminal cells.

use ratatui::layout::Rect;
use wordgrid_domain::GridConfig;

/// Nominal pixel size of one terminal column and row
pub const PX_PER_COLUMN: u32 = 8;
pub const PX_PER_ROW: u32 = 16;

/// Terminal footprint of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u16,
    pub height: u16,
}

impl CellMetrics {
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            width: px_to_cells(config.cell_width, PX_PER_COLUMN),
            height: px_to_cells(config.cell_height, PX_PER_ROW),
        }
    }
}

fn px_to_cells(px: u32, per_cell: u32) -> u16 {
    let cells = px.div_ceil(per_cell).max(1);
    u16::try_from(cells).unwrap_or(u16::MAX)
}

/// The window of grid cells currently drawn inside the grid panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridViewport {
    pub first_row: usize,
    pub first_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub metrics: CellMetrics,
}

impl GridViewport {
    /// Fit the grid into `area`, scrolling from `previous_origin` only as far
    /// as needed to keep `cursor` on screen
    pub fn fit(
        area: Rect,
        config: &GridConfig,
        cursor: (usize, usize),
        previous_origin: (usize, usize),
    ) -> Self {
        let metrics = CellMetrics::from_config(config);
        let visible_rows = ((area.height / metrics.height) as usize).clamp(1, config.rows);
        let visible_cols = ((area.width / metrics.width) as usize).clamp(1, config.cols);

        Self {
            first_row: scroll_axis(previous_origin.0, cursor.0, visible_rows, config.rows),
            first_col: scroll_axis(previous_origin.1, cursor.1, visible_cols, config.cols),
            visible_rows,
            visible_cols,
            metrics,
        }
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.first_row, self.first_col)
    }

    pub fn rows(&self) -> std::ops::Range<usize> {
        self.first_row..self.first_row + self.visible_rows
    }

    pub fn cols(&self) -> std::ops::Range<usize> {
        self.first_col..self.first_col + self.visible_cols
    }

    /// Screen rectangle of grid cell `(row, col)`, if it is in view
    pub fn cell_rect(&self, area: Rect, row: usize, col: usize) -> Option<Rect> {
        if !self.rows().contains(&row) || !self.cols().contains(&col) {
            return None;
        }
        let x = area.x + (col - self.first_col) as u16 * self.metrics.width;
        let y = area.y + (row - self.first_row) as u16 * self.metrics.height;
        let rect = Rect::new(x, y, self.metrics.width, self.metrics.height);
        Some(rect.intersection(area))
    }

    /// Grid cell under the screen position `(x, y)`
    pub fn cell_at(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }
        let row = self.first_row + ((y - area.y) / self.metrics.height) as usize;
        let col = self.first_col + ((x - area.x) / self.metrics.width) as usize;
        (self.rows().contains(&row) && self.cols().contains(&col)).then_some((row, col))
    }
}

fn scroll_axis(previous: usize, cursor: usize, visible: usize, total: usize) -> usize {
    let max_origin = total.saturating_sub(visible);
    let mut origin = previous.min(max_origin);
    if cursor < origin {
        origin = cursor;
    } else if cursor >= origin + visible {
        origin = cursor + 1 - visible;
    }
    origin.min(max_origin)
}
