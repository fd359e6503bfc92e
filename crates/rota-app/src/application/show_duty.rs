//! Composes everything the duty screen shows for one render.
//!
//! The UI layer hands over the student, the date being viewed, and its
//! canvas size; it gets back ready-made strings and paint-ready diagram
//! cells.  No decision about wording, colour, or placement is left to the
//! caller.

use chrono::{Datelike, NaiveDate};

use rota_core::diagram::cells::RenderCell;
use rota_core::domain::calendar::same_day;
use rota_core::{assign, layout, AreaCode, TextMeasure};

use crate::infrastructure::avatars::avatar_asset;

/// One fully-composed duty screen.
#[derive(Debug, Clone)]
pub struct DutyView {
    pub student: String,
    pub date: NaiveDate,
    /// `true` when the viewed date is today's calendar day.
    pub is_today: bool,
    pub area: AreaCode,
    pub description: &'static str,
    /// "<student> is responsible for Area <X>"
    pub headline: String,
    /// "Today 2025-8-25" or "Date 2025-8-30".
    pub date_line: String,
    pub avatar: &'static str,
    /// The floor-plan diagram with the duty area highlighted.
    pub cells: Vec<RenderCell>,
}

impl DutyView {
    /// Composes the duty screen for `student` on `date`.
    pub fn compose(
        student: &str,
        date: NaiveDate,
        today: NaiveDate,
        viewport_width: f32,
        viewport_height: f32,
        measure: &dyn TextMeasure,
    ) -> DutyView {
        let area = assign(student, date.day() as i32);
        let is_today = same_day(date, today);

        DutyView {
            student: student.to_string(),
            date,
            is_today,
            area,
            description: area.description(),
            headline: format!("{student} is responsible for Area {area}"),
            date_line: format!(
                "{} {}-{}-{}",
                if is_today { "Today" } else { "Date" },
                date.year(),
                date.month(),
                date.day()
            ),
            avatar: avatar_asset(student),
            cells: layout(viewport_width, viewport_height, area, measure),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
