//! Pure domain model for the cleaning rota.
//!
//! Everything in this module is deterministic data and arithmetic with no OS,
//! clock, or file-system dependencies:
//!
//! - **`roster`** – The fixed ordered list of students, the 18 area codes
//!   `A`..`R`, and the area description table.  Order matters: a student's
//!   position in the roster is the phase offset of their rotation, and an
//!   area's position drives the index arithmetic.
//!
//! - **`rotation`** – The duty assignment function.  Given a student and a
//!   day of the month it returns the area that student cleans on that day.
//!
//! - **`calendar`** – Date helpers the calendar screen needs: same-day
//!   comparison, month navigation that clamps the day-of-month, and the
//!   month-grid shape (leading blanks + day count).

pub mod calendar;
pub mod roster;
pub mod rotation;
