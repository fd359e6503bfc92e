//! Avatar asset lookup.
//!
//! Maps a student name to the bundled avatar image path.  The lookup is
//! case-insensitive because names arrive from two places with different
//! casing conventions (the roster list and the persisted preference), and an
//! unknown name gets the placeholder rather than an error — a missing
//! picture is cosmetic.

/// Asset path used when no avatar exists for a name.
pub const DEFAULT_AVATAR: &str = "avatars/default.png";

/// Returns the avatar asset path for a student.
pub fn avatar_asset(student: &str) -> &'static str {
    match student.to_lowercase().as_str() {
        "bailasan" => "avatars/bailasan.png",
        "christina" => "avatars/christina.png",
        "cyrus" => "avatars/cyrus.png",
        "harshpreet" => "avatars/harshpreet.png",
        "isaish" => "avatars/isaish.png",
        "janna" => "avatars/janna.png",
        "laura" => "avatars/laura.png",
        "linda" => "avatars/linda.png",
        "madison" => "avatars/madison.png",
        "marianne" => "avatars/marianne.png",
        "raghad" => "avatars/raghad.png",
        "shaista" => "avatars/shaista.png",
        "neil" => "avatars/neil.png",
        "tamara" => "avatars/tamara.png",
        "thomas" => "avatars/thomas.png",
        "wesley" => "avatars/wesley.png",
        "yunjia" => "avatars/yunjia.png",
        "ruby" => "avatars/ruby.png",
        _ => DEFAULT_AVATAR,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::ROSTER;

    #[test]
    fn test_every_roster_student_has_a_dedicated_avatar() {
        for student in ROSTER {
            assert_ne!(
                avatar_asset(student),
                DEFAULT_AVATAR,
                "{student} fell through to the placeholder"
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(avatar_asset("RUBY"), avatar_asset("ruby"));
        assert_eq!(avatar_asset("Ruby"), "avatars/ruby.png");
    }

    #[test]
    fn test_unknown_student_gets_the_placeholder() {
        assert_eq!(avatar_asset("NotARealStudent"), DEFAULT_AVATAR);
        assert_eq!(avatar_asset(""), DEFAULT_AVATAR);
    }
}
