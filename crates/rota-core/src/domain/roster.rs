//! The student roster and the cleaning area tables.
//!
//! Both tables are fixed at compile time and their *order is significant*:
//!
//! - The roster order seeds the duty rotation.  Student 0 starts the month on
//!   area `A`, student 1 on area `B`, and so on.
//! - The area order is what the rotation's index arithmetic walks over.
//!
//! The two tables must stay the same length (18).  The rotation does not
//! crash if they diverge, but its period silently changes, so the equality is
//! pinned by a test below.

use serde::{Deserialize, Serialize};

/// Number of students, which equals the number of cleaning areas.
pub const AREA_COUNT: usize = 18;

/// The ordered student roster.
///
/// Position is the rotation seed; do not reorder without understanding that
/// every student's assignment shifts with it.
pub const ROSTER: [&str; AREA_COUNT] = [
    "Bailasan",
    "Christina",
    "Cyrus",
    "Harshpreet",
    "Isaish",
    "Janna",
    "Laura",
    "Linda",
    "Madison",
    "Marianne",
    "Raghad",
    "Shaista",
    "Neil",
    "Tamara",
    "Thomas",
    "Wesley",
    "Yunjia",
    "Ruby",
];

/// One of the 18 cleaning areas, coded `A` through `R`.
///
/// The discriminant is the area's 0-based position in the rotation order, so
/// `AreaCode::from_index` and [`AreaCode::index`] are exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AreaCode {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
}

/// All area codes in rotation order.
pub const ALL_AREAS: [AreaCode; AREA_COUNT] = [
    AreaCode::A,
    AreaCode::B,
    AreaCode::C,
    AreaCode::D,
    AreaCode::E,
    AreaCode::F,
    AreaCode::G,
    AreaCode::H,
    AreaCode::I,
    AreaCode::J,
    AreaCode::K,
    AreaCode::L,
    AreaCode::M,
    AreaCode::N,
    AreaCode::O,
    AreaCode::P,
    AreaCode::Q,
    AreaCode::R,
];

impl AreaCode {
    /// Returns the area at a 0-based rotation index.
    ///
    /// Indices at or beyond [`AREA_COUNT`] wrap around; the rotation always
    /// reduces modulo 18 before looking up, so this is a belt-and-braces wrap
    /// rather than a reachable path.
    pub fn from_index(index: usize) -> AreaCode {
        ALL_AREAS[index % AREA_COUNT]
    }

    /// The area's 0-based position in rotation order (`A` = 0, `R` = 17).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The single-letter code as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            AreaCode::A => "A",
            AreaCode::B => "B",
            AreaCode::C => "C",
            AreaCode::D => "D",
            AreaCode::E => "E",
            AreaCode::F => "F",
            AreaCode::G => "G",
            AreaCode::H => "H",
            AreaCode::I => "I",
            AreaCode::J => "J",
            AreaCode::K => "K",
            AreaCode::L => "L",
            AreaCode::M => "M",
            AreaCode::N => "N",
            AreaCode::O => "O",
            AreaCode::P => "P",
            AreaCode::Q => "Q",
            AreaCode::R => "R",
        }
    }

    /// Human-readable description of what cleaning this area involves.
    ///
    /// Several areas intentionally share a description (e.g. `F`, `G`, `J`
    /// and `K` are all mixer counters) — they are distinct physical zones of
    /// the same kind of station.
    pub fn description(self) -> &'static str {
        match self {
            AreaCode::A => {
                "Clean Up Supervisor Front and Back Area. Dental Laboratory Classroom 332, 333 & 334"
            }
            AreaCode::B => "Porcelain Room",
            AreaCode::C => "Acrylic Packing & Sink",
            AreaCode::D => "Printing & Sink / Counter. Boil Out & Curing Tank",
            AreaCode::E => "Trimmers & Sink",
            AreaCode::F => "Mixer Counter",
            AreaCode::G => "Mixer Counter",
            AreaCode::H => "Trimmers & Sink",
            AreaCode::I => "Trimmers & Sink",
            AreaCode::J => "Mixer Counter",
            AreaCode::K => "Mixer Counter",
            AreaCode::L => "Trimmers & Sink",
            AreaCode::M => "Sand Blaster",
            AreaCode::N => "Left Polishing",
            AreaCode::O => "Right Polishing",
            AreaCode::P => "Sink & Counter",
            AreaCode::Q => "Sink & Steamer",
            AreaCode::R => "Casting & Gypsum Area",
        }
    }
}

impl std::fmt::Display for AreaCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a student's 0-based roster position, or `None` for an unknown name.
///
/// Matching is exact (case-sensitive), the same as the selection list the
/// name originally came from.  Case-insensitive matching exists only at the
/// avatar lookup boundary.
pub fn roster_index(student: &str) -> Option<usize> {
    ROSTER.iter().position(|&s| s == student)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
