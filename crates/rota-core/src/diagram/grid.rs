//! Geometry solver for the floor-plan grid.
//!
//! The diagram is six unequal columns of rounded cells, hand-tuned against
//! the real laboratory floor plan.  Nothing here is a general layout engine;
//! it is the closed-form solution of that one diagram:
//!
//! - **Widths.**  The first and last columns are "narrow" (0.8 of the base
//!   unit), the middle four are "standard" (1.0).  The base unit is solved so
//!   that `2·narrow + 4·standard + 5·spacing` exactly fills the available
//!   width, then the whole grid is centred horizontally.
//!
//! - **Heights.**  The base cell height is a seventh of the viewport.  The
//!   third and fourth columns compress their cells to 0.8 of that; the second
//!   and fifth use it as-is.  The two-cell outer columns do not use the base
//!   height at all: their cell height is *derived* so that their top edge
//!   aligns with the fifth column's first cell and their bottom edge with its
//!   last, splitting the extent evenly minus one spacing.
//!
//! Every quantity is total: a degenerate viewport produces degenerate (zero
//! or negative sized) but finite geometry, never a panic.

/// Horizontal gap between adjacent columns.
pub const H_SPACING: f32 = 14.0;
/// Vertical gap between cells within a column.
pub const V_SPACING: f32 = 8.0;
/// Number of columns in the diagram.
pub const COLUMN_COUNT: usize = 6;
/// Width of the outer columns relative to the base unit.
const NARROW_RATIO: f32 = 0.8;
/// Columns sit this much above the exact vertical centre of the viewport,
/// leaving room for the header block above the second column.
const VERTICAL_NUDGE: f32 = 35.0;
/// The viewport height is divided into this many base cell heights.
const HEIGHT_DIVISIONS: f32 = 7.0;
/// Cell-height ratio for the compressed third and fourth columns.
const COMPRESSED_RATIO: f32 = 0.8;

/// Rows in the fifth (reference) column; its vertical extent anchors the
/// outer columns and the bottom edge of the widened `R` cell.
const REFERENCE_COLUMN_ROWS: f32 = 6.0;

/// Solved geometry for one viewport.
///
/// All fields are in the same logical-pixel space as the viewport that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// `viewport_height / 7`; the unit the per-column ratios multiply.
    pub base_cell_height: f32,
    /// Width of the four middle columns.
    pub standard_width: f32,
    /// Width of the first and last columns (`0.8 ×` standard).
    pub narrow_width: f32,
    /// Left x origin of each column, grid centred in the viewport.
    pub column_x: [f32; COLUMN_COUNT],
    /// Width of each column in order.
    pub column_width: [f32; COLUMN_COUNT],
    /// Top of the fifth column's first cell.
    pub reference_top: f32,
    /// Bottom of the fifth column's last cell.
    pub reference_bottom: f32,
    /// Derived cell height of the two-cell outer columns.
    pub pair_cell_height: f32,
}

impl GridMetrics {
    /// Solves the grid for a viewport.
    pub fn solve(viewport_width: f32, viewport_height: f32) -> GridMetrics {
        let base_cell_height = viewport_height / HEIGHT_DIVISIONS;

        // Solve the base width unit: 2 narrow + 4 standard + 5 gaps == width.
        let total_spacing = (COLUMN_COUNT as f32 - 1.0) * H_SPACING;
        let available = viewport_width - total_spacing;
        let ratio_sum = 2.0 * NARROW_RATIO + 4.0;
        let standard_width = available / ratio_sum;
        let narrow_width = standard_width * NARROW_RATIO;

        let column_width = [
            narrow_width,
            standard_width,
            standard_width,
            standard_width,
            standard_width,
            narrow_width,
        ];

        let grid_width =
            2.0 * narrow_width + 4.0 * standard_width + total_spacing;
        let mut x = (viewport_width - grid_width) / 2.0;
        let mut column_x = [0.0; COLUMN_COUNT];
        for (col, width) in column_width.iter().enumerate() {
            column_x[col] = x;
            x += width + H_SPACING;
        }

        // The fifth column anchors the vertical layout.
        let reference_total = REFERENCE_COLUMN_ROWS * base_cell_height
            + (REFERENCE_COLUMN_ROWS - 1.0) * V_SPACING;
        let reference_top =
            (viewport_height - reference_total) / 2.0 - VERTICAL_NUDGE;
        let reference_bottom = reference_top + reference_total;

        // Outer columns: two cells spanning exactly the reference extent.
        let pair_cell_height = (reference_total - V_SPACING) / 2.0;

        GridMetrics {
            viewport_width,
            viewport_height,
            base_cell_height,
            standard_width,
            narrow_width,
            column_x,
            column_width,
            reference_top,
            reference_bottom,
            pair_cell_height,
        }
    }

    /// Cell height for a 0-based column index.
    pub fn cell_height(&self, col: usize) -> f32 {
        match col {
            0 | 5 => self.pair_cell_height,
            2 | 3 => self.base_cell_height * COMPRESSED_RATIO,
            _ => self.base_cell_height,
        }
    }

    /// Top y of a column's first cell, given how many rows the column holds.
    ///
    /// Columns are individually centred (with the shared upward nudge), which
    /// is what makes the compressed columns float relative to the others.
    /// For the two-row outer columns this reproduces `reference_top` exactly.
    pub fn column_top(&self, col: usize, rows: usize) -> f32 {
        let total = rows as f32 * self.cell_height(col)
            + (rows as f32 - 1.0) * V_SPACING;
        (self.viewport_height - total) / 2.0 - VERTICAL_NUDGE
    }

    /// Top y of the cell at `row` within `col`.
    pub fn cell_top(&self, col: usize, rows: usize, row: usize) -> f32 {
        self.column_top(col, rows) + row as f32 * (self.cell_height(col) + V_SPACING)
    }

    /// Total width of the grid including inter-column spacing.
    pub fn grid_width(&self) -> f32 {
        2.0 * self.narrow_width + 4.0 * self.standard_width
            + (COLUMN_COUNT as f32 - 1.0) * H_SPACING
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
