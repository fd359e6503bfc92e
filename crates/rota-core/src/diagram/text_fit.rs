//! Shrink-to-fit sizing for the diagram's decorative labels.
//!
//! The two decorative blocks ("Printing & Counter" and the rotated "Faculty"
//! block) size their text by starting from a proportion of the block and
//! stepping the font size down one point at a time until the rendered width
//! fits the available extent, with a floor so the text never vanishes.
//!
//! Measuring rendered text requires a font stack, which this crate
//! deliberately does not have, so measurement sits behind [`TextMeasure`].
//! The UI layer plugs in its real measurer; [`HeuristicTextMeasure`] gives a
//! serviceable approximation for headless rendering and tests.

/// Measures the rendered width of a string at a given font size.
pub trait TextMeasure {
    /// Width in the same units as the diagram geometry (logical pixels).
    fn width_of(&self, text: &str, size: f32) -> f32;
}

/// Approximates text width as a fixed fraction of the font size per glyph.
///
/// 0.6 is a reasonable average advance for a bold sans-serif; exact fitting
/// is the real renderer's job.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicTextMeasure {
    pub advance_ratio: f32,
}

impl Default for HeuristicTextMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for HeuristicTextMeasure {
    fn width_of(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }
}

/// Steps `start_size` down by 1.0 until `text` fits within `max_extent`
/// or the size reaches `floor`.
///
/// The extent check happens before each decrement, so a string that never
/// fits comes back at (or one step below) the floor rather than spinning.
pub fn shrink_to_fit(
    measure: &dyn TextMeasure,
    text: &str,
    start_size: f32,
    floor: f32,
    max_extent: f32,
) -> f32 {
    let mut size = start_size;
    while measure.width_of(text, size) > max_extent && size > floor {
        size -= 1.0;
    }
    size
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_that_already_fits_keeps_start_size() {
        let measure = HeuristicTextMeasure::default();
        let size = shrink_to_fit(&measure, "A", 20.0, 5.0, 500.0);
        assert_eq!(size, 20.0);
    }

    #[test]
    fn test_long_text_shrinks_until_it_fits() {
        let measure = HeuristicTextMeasure::default();
        let size = shrink_to_fit(&measure, "Printing & Counter", 30.0, 5.0, 200.0);
        assert!(size < 30.0);
        assert!(measure.width_of("Printing & Counter", size) <= 200.0);
    }

    #[test]
    fn test_shrink_stops_at_floor_when_text_cannot_fit() {
        let measure = HeuristicTextMeasure::default();
        let size = shrink_to_fit(&measure, "An impossibly long label", 30.0, 12.0, 10.0);
        // The loop exits as soon as size is no longer above the floor.
        assert!(size <= 12.0);
        assert!(size > 11.0 - f32::EPSILON);
    }

    #[test]
    fn test_heuristic_width_scales_linearly_with_size_and_length() {
        let measure = HeuristicTextMeasure::default();
        let one = measure.width_of("x", 10.0);
        assert!((measure.width_of("xx", 10.0) - 2.0 * one).abs() < f32::EPSILON);
        assert!((measure.width_of("x", 20.0) - 2.0 * one).abs() < f32::EPSILON);
    }
}
