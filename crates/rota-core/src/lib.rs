//! # rota-core
//!
//! Shared library for the cleaning rota application: the student roster and
//! area tables, the duty rotation, calendar arithmetic, and the floor-plan
//! diagram layout engine.
//!
//! This crate is pure computation.  It has zero dependencies on OS APIs, UI
//! frameworks, clocks, or the file system — everything it produces is a
//! deterministic function of its arguments, which is what makes the rotation
//! and the diagram trivially testable.
//!
//! # Architecture overview
//!
//! The application shell (`rota-app`) asks two questions on every render:
//!
//! - **"Who cleans what today?"** — answered by `domain`: the fixed roster
//!   and area tables plus the rotation formula
//!   `(roster_position + day - 1) mod 18`.
//!
//! - **"What rectangles do I paint?"** — answered by `diagram`: a
//!   hand-tuned six-column floor plan solved for the current viewport, with
//!   the on-duty area's cells highlighted.

// Rust will look for each module in a subdirectory with the same name
// (e.g., src/domain/mod.rs).
pub mod diagram;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `rota_core::assign` instead of `rota_core::domain::rotation::assign`.
pub use diagram::cells::{layout, CellKind, Color, Label, LabelOrientation, Rect, RenderCell};
pub use diagram::grid::GridMetrics;
pub use diagram::text_fit::{HeuristicTextMeasure, TextMeasure};
pub use domain::calendar::{add_months, same_day, MonthGrid};
pub use domain::roster::{roster_index, AreaCode, ALL_AREAS, AREA_COUNT, ROSTER};
pub use domain::rotation::assign;
