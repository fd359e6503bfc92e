//! Calendar arithmetic for the date picker screen.
//!
//! The UI needs three things from dates: "is this the same calendar day as
//! today", "move one month forward/backward keeping the day where possible",
//! and the shape of a month grid (how many days, and which weekday column the
//! 1st lands in).  All of it is derived from [`chrono::NaiveDate`]; there is
//! no time-of-day or timezone handling anywhere in the app.

use chrono::{Datelike, NaiveDate};

/// Returns `true` when the two dates fall on the same calendar day
/// (year, month, and day-of-month all equal).
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Moves `date` by `delta` months, preserving the day-of-month where valid.
///
/// When the original day does not exist in the target month the day clamps
/// to the month's last day: Jan 31 + 1 month = Feb 28 (or 29 in a leap
/// year), which is what the month-navigation buttons expect.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() as i64 * 12 + date.month0() as i64 + delta as i64;
    let year = months.div_euclid(12) as i32;
    let month = months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(last_day_of_month(year, month));
    // Year/month/day are all in range by construction; keep the input date
    // as a total fallback rather than panicking.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_day_of_month(date.year(), date.month())
}

/// How many blank cells precede day 1 in a Sunday-first month grid.
pub fn leading_blanks(date: NaiveDate) -> u32 {
    month_start(date).weekday().num_days_from_sunday()
}

/// The shape of one rendered calendar month.
///
/// `week_rows` is the number of 7-cell rows the grid needs once the leading
/// blanks are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub day_count: u32,
    pub leading_blanks: u32,
    pub week_rows: u32,
}

impl MonthGrid {
    /// Builds the grid shape for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> MonthGrid {
        let day_count = days_in_month(date);
        let blanks = leading_blanks(date);
        MonthGrid {
            year: date.year(),
            month: date.month(),
            day_count,
            leading_blanks: blanks,
            week_rows: (blanks + day_count).div_ceil(7),
        }
    }

    /// The date a given 1-based day falls on, or `None` outside the month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_same_day_true_for_identical_dates() {
        assert!(same_day(date(2025, 3, 14), date(2025, 3, 14)));
    }

    #[test]
    fn test_same_day_false_when_any_component_differs() {
        assert!(!same_day(date(2025, 3, 14), date(2025, 3, 15)));
        assert!(!same_day(date(2025, 3, 14), date(2025, 4, 14)));
        assert!(!same_day(date(2025, 3, 14), date(2024, 3, 14)));
    }

    #[test]
    fn test_add_months_preserves_day_when_valid() {
        assert_eq!(add_months(date(2025, 3, 14), 1), date(2025, 4, 14));
        assert_eq!(add_months(date(2025, 3, 14), -1), date(2025, 2, 14));
    }

    #[test]
    fn test_add_months_clamps_to_last_day_of_shorter_month() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 3, 31), 1), date(2025, 4, 30));
    }

    #[test]
    fn test_add_months_crosses_year_boundaries_both_ways() {
        assert_eq!(add_months(date(2025, 12, 10), 1), date(2026, 1, 10));
        assert_eq!(add_months(date(2025, 1, 10), -1), date(2024, 12, 10));
    }

    #[test]
    fn test_days_in_month_handles_february_and_leap_years() {
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 12, 25)), 31);
    }

    #[test]
    fn test_leading_blanks_matches_known_month() {
        // June 2025 starts on a Sunday.
        assert_eq!(leading_blanks(date(2025, 6, 15)), 0);
        // August 2025 starts on a Friday.
        assert_eq!(leading_blanks(date(2025, 8, 1)), 5);
    }

    #[test]
    fn test_month_grid_week_rows_cover_whole_month() {
        let grid = MonthGrid::for_date(date(2025, 8, 25));
        assert_eq!(grid.day_count, 31);
        assert_eq!(grid.leading_blanks, 5);
        // 5 blanks + 31 days = 36 cells → 6 rows of 7.
        assert_eq!(grid.week_rows, 6);
    }

    #[test]
    fn test_month_grid_date_of_rejects_out_of_month_days() {
        let grid = MonthGrid::for_date(date(2025, 2, 10));
        assert_eq!(grid.date_of(28), Some(date(2025, 2, 28)));
        assert_eq!(grid.date_of(29), None);
        assert_eq!(grid.date_of(0), None);
    }
}
