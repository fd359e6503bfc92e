//! Cell layout for the floor-plan diagram.
//!
//! [`layout`] turns a viewport and a highlighted area into the ordered list
//! of rounded rectangles the UI paints.  The engine owns every placement and
//! colour decision; the UI layer is left with nothing but "draw a positioned,
//! coloured, labelled rectangle".
//!
//! The cell arrangement is a literal table ([`COLUMN_AREAS`]), not something
//! derived: the floor plan genuinely has area `A` in both outer columns,
//! area `D` twice in a row (a visual merge of one long counter), and two
//! blocks that are furniture rather than cleaning areas ("Printing &
//! Counter" above the second column and the rotated "Faculty" block in the
//! last).  Duplicate occurrences are real cells — highlighting `A` lights up
//! both of them.

use crate::diagram::grid::{GridMetrics, H_SPACING};
use crate::diagram::text_fit::{shrink_to_fit, TextMeasure};
use crate::domain::roster::AreaCode;

// ── Palette ───────────────────────────────────────────────────────────────────

/// A packed ARGB colour (`0xAARRGGBB`), the form the UI layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

/// Fill for the cell matching the highlighted area (orange).
pub const HIGHLIGHT_FILL: Color = Color(0xFFFF_A500);
/// Fill for every other area cell (calendar blue).
pub const NEUTRAL_FILL: Color = Color(0xFF64_B5F6);
/// Fill for the two decorative blocks (light blue).
pub const DECOR_FILL: Color = Color(0xFFE3_F2FD);
/// Border for the decorative blocks.
pub const DECOR_BORDER: Color = Color(0xFF90_CAF9);
/// Label colour inside decorative blocks (dark blue).
pub const DECOR_TEXT: Color = Color(0xFF15_65C0);
/// Label colour for area cells.
pub const AREA_TEXT: Color = Color(0xFFFF_FFFF);

// ── Cell arrangement ──────────────────────────────────────────────────────────

/// The literal column → area-sequence table, top to bottom per column.
///
/// Positional quirks the layout relies on:
/// - column 6 row 0 (`F`) is rendered as the decorative Faculty block;
/// - column 5's final `R` is widened and bottom-anchored;
/// - the doubled `D` in column 2 is two separate cells by design.
pub const COLUMN_AREAS: [&[AreaCode]; 6] = {
    use AreaCode::*;
    [
        &[A, B],
        &[D, D, C, C],
        &[H, G, F, E],
        &[I, J, K, L],
        &[M, N, O, P, Q, R],
        &[F, A],
    ]
};

const HEADER_TEXT: &str = "Printing & Counter";
const FACULTY_TEXT: &str = "Faculty";

/// Corner radius for area cells.
const CELL_RADIUS: f32 = 6.0;
/// Corner radius for the header block.
const HEADER_RADIUS: f32 = 4.0;
/// Stroke width of decorative block borders.
const DECOR_STROKE: f32 = 2.0;
/// Decorative labels must fit within this share of the block extent.
const FIT_SHARE: f32 = 0.95;

// ── Render model ──────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Outline stroke for decorative blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// How a label is drawn within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrientation {
    Horizontal,
    /// Rotated 90° around the cell centre (the Faculty block).
    Rotated90,
}

/// Centred label text with a resolved font size.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub orientation: LabelOrientation,
}

/// What a cell represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// A cleaning area; participates in highlighting.
    Area(AreaCode),
    /// Furniture: labelled, bordered, never highlighted.
    Decorative,
}

/// One paint-ready cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCell {
    pub kind: CellKind,
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Option<Stroke>,
    pub corner_radius: f32,
    pub label: Label,
}

impl RenderCell {
    /// `true` when this is the area cell for `code` (decoratives never match).
    pub fn is_area(&self, code: AreaCode) -> bool {
        self.kind == CellKind::Area(code)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Computes the full diagram for one paint.
///
/// Output order is the paint order: the "Printing & Counter" header first,
/// then the six columns left to right, top to bottom within each column.
/// The function is total — any viewport produces geometry, degenerate sizes
/// included.
pub fn layout(
    viewport_width: f32,
    viewport_height: f32,
    highlighted: AreaCode,
    measure: &dyn TextMeasure,
) -> Vec<RenderCell> {
    let metrics = GridMetrics::solve(viewport_width, viewport_height);
    let mut cells = Vec::with_capacity(
        1 + COLUMN_AREAS.iter().map(|c| c.len()).sum::<usize>(),
    );

    cells.push(header_cell(&metrics, measure));

    for (col, areas) in COLUMN_AREAS.iter().enumerate() {
        let rows = areas.len();
        for (row, &code) in areas.iter().enumerate() {
            if col == 5 && row == 0 {
                cells.push(faculty_cell(&metrics, measure));
            } else if col == 4 && row == rows - 1 && code == AreaCode::R {
                cells.push(wide_r_cell(&metrics, highlighted));
            } else {
                cells.push(area_cell(&metrics, col, rows, row, code, highlighted));
            }
        }
    }

    cells
}

/// A regular area cell at its column/row slot.
fn area_cell(
    metrics: &GridMetrics,
    col: usize,
    rows: usize,
    row: usize,
    code: AreaCode,
    highlighted: AreaCode,
) -> RenderCell {
    let height = metrics.cell_height(col);
    let rect = Rect {
        x: metrics.column_x[col],
        y: metrics.cell_top(col, rows, row),
        width: metrics.column_width[col],
        height,
    };

    // The tall outer-column cells scale their letter down relative to the
    // grid cells so the glyphs read at a similar optical size.
    let label_ratio = if col == 0 || col == 5 { 0.2 } else { 0.25 };

    RenderCell {
        kind: CellKind::Area(code),
        rect,
        fill: area_fill(code, highlighted),
        stroke: None,
        corner_radius: CELL_RADIUS,
        label: Label {
            text: code.as_str().to_string(),
            size: height * label_ratio,
            color: AREA_TEXT,
            orientation: LabelOrientation::Horizontal,
        },
    }
}

/// The widened `R` cell: spans from column 3's left edge to column 5's right
/// edge, 0.7× base height, bottom-anchored to the reference extent.
fn wide_r_cell(metrics: &GridMetrics, highlighted: AreaCode) -> RenderCell {
    let left = metrics.column_x[2];
    let right = metrics.column_x[4] + metrics.column_width[4];
    let height = metrics.base_cell_height * 0.7;
    let rect = Rect {
        x: left,
        y: metrics.reference_bottom - height,
        width: right - left,
        height,
    };

    RenderCell {
        kind: CellKind::Area(AreaCode::R),
        rect,
        fill: area_fill(AreaCode::R, highlighted),
        stroke: None,
        corner_radius: CELL_RADIUS,
        label: Label {
            text: AreaCode::R.as_str().to_string(),
            // Sized against the second column's cell height so the letter
            // matches the `D` cells it sits beneath.
            size: metrics.cell_height(1) * 0.25,
            color: AREA_TEXT,
            orientation: LabelOrientation::Horizontal,
        },
    }
}

/// The "Printing & Counter" header above the second column, spanning two
/// standard columns plus the gap between them.
fn header_cell(metrics: &GridMetrics, measure: &dyn TextMeasure) -> RenderCell {
    let width = metrics.standard_width * 2.0 + H_SPACING;
    let height = metrics.base_cell_height * 0.6;
    let column2_top = metrics.column_top(1, COLUMN_AREAS[1].len());
    let rect = Rect {
        x: metrics.column_x[1],
        y: column2_top - height - crate::diagram::grid::V_SPACING,
        width,
        height,
    };

    let size = shrink_to_fit(
        measure,
        HEADER_TEXT,
        height * 0.5,
        height * 0.2,
        width * FIT_SHARE,
    );

    RenderCell {
        kind: CellKind::Decorative,
        rect,
        fill: DECOR_FILL,
        stroke: Some(Stroke { color: DECOR_BORDER, width: DECOR_STROKE }),
        corner_radius: HEADER_RADIUS,
        label: Label {
            text: HEADER_TEXT.to_string(),
            size,
            color: DECOR_TEXT,
            orientation: LabelOrientation::Horizontal,
        },
    }
}

/// The Faculty block: first slot of the last column, label rotated 90° and
/// fitted against the cell *height* rather than its width.
fn faculty_cell(metrics: &GridMetrics, measure: &dyn TextMeasure) -> RenderCell {
    let rows = COLUMN_AREAS[5].len();
    let width = metrics.column_width[5];
    let height = metrics.cell_height(5);
    let rect = Rect {
        x: metrics.column_x[5],
        y: metrics.cell_top(5, rows, 0),
        width,
        height,
    };

    let size = shrink_to_fit(
        measure,
        FACULTY_TEXT,
        width * 0.4,
        width * 0.15,
        height * FIT_SHARE,
    );

    RenderCell {
        kind: CellKind::Decorative,
        rect,
        fill: DECOR_FILL,
        stroke: Some(Stroke { color: DECOR_BORDER, width: DECOR_STROKE }),
        corner_radius: CELL_RADIUS,
        label: Label {
            text: FACULTY_TEXT.to_string(),
            size,
            color: DECOR_TEXT,
            orientation: LabelOrientation::Rotated90,
        },
    }
}

fn area_fill(code: AreaCode, highlighted: AreaCode) -> Color {
    if code == highlighted {
        HIGHLIGHT_FILL
    } else {
        NEUTRAL_FILL
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
