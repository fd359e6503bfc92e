//! The floor-plan diagram layout engine.
//!
//! Split the way the rendering problem splits:
//!
//! - **`grid`** – Solves the raw geometry for a viewport: column widths and
//!   x origins, per-column cell heights, and the vertical extents everything
//!   else anchors to.
//! - **`text_fit`** – Shrink-to-fit font sizing behind a [`TextMeasure`]
//!   abstraction, so the core never needs a font stack.
//! - **`cells`** – Combines both with the literal area table into the
//!   ordered list of paint-ready [`cells::RenderCell`]s.
//!
//! [`TextMeasure`]: text_fit::TextMeasure

pub mod cells;
pub mod grid;
pub mod text_fit;
