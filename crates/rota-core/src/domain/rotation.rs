//! The duty rotation: which student cleans which area on which day.
//!
//! # How the rotation works
//!
//! Every student walks the area sequence `A → B → … → R → A → …` one step per
//! day of the month.  The only thing that differs between students is where
//! in the sequence they start: student 0 starts the cycle on area `A`,
//! student 1 on `B`, and so on.  Formally:
//!
//! ```text
//! area_index(student, day) = (roster_index(student) + day - 1) mod 18
//! ```
//!
//! Two consequences fall straight out of the formula:
//!
//! - **Period 18**: `assign(s, d) == assign(s, d + 18)` for every student.
//! - **No collisions**: on any single day, consecutive roster positions map
//!   to consecutive area indices, so no two students ever share an area.
//!
//! # The modulo matters
//!
//! `day_of_month` is 1-based in normal use, but the function accepts any
//! integer, including 0 and negatives (a caller stepping backwards through
//! dates can produce them).  Rust's `%` operator is a *remainder* and returns
//! negative values for negative operands, which would index out of bounds, so
//! the reduction uses [`i64::rem_euclid`] — the true mathematical modulo.

use tracing::warn;

use super::roster::{roster_index, AreaCode, AREA_COUNT};

/// Returns the area `student` is responsible for on `day_of_month`.
///
/// An unknown student falls back to area `A` rather than failing: the name
/// always comes from the roster selection list, so no caller can observe an
/// error here.  The fallback is logged so a genuinely bad lookup does not
/// stay invisible.
pub fn assign(student: &str, day_of_month: i32) -> AreaCode {
    let Some(start) = roster_index(student) else {
        warn!(student, "student not in roster; defaulting to area A");
        return AreaCode::A;
    };

    let n = AREA_COUNT as i64;
    let area_index = (start as i64 + day_of_month as i64 - 1).rem_euclid(n);
    AreaCode::from_index(area_index as usize)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
