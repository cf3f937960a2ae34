//! Tonal ramp generation: one base color in, eleven `#RRGGBB` steps out.

use serde_json::Value;
use swatch_color::{ColorError, Rgb, parse_color, parse_color_value};

use crate::scale::ColorScale;
use crate::step::Step;

/// Generate the eleven-step ramp for a base color.
///
/// `base` may be 6- or 3-digit hex (the `#` is optional) or an `"r, g, b"`
/// triple. The result holds the keys `"50"` through `"950"` in ascending
/// order; step 500 is the base itself.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when `base` cannot be parsed.
///
/// # Examples
///
/// ```
/// use swatch_palette::shades;
///
/// let ramp = shades("#3b82f6").unwrap();
/// assert_eq!(ramp.get("500"), Some("#3B82F6"));
/// assert_eq!(ramp.get("50"), Some("#F5F9FF"));
/// ```
pub fn shades(base: &str) -> Result<ColorScale, ColorError> {
    parse_color(base).map(ramp)
}

/// [`shades`] for a base color read from JSON.
///
/// # Errors
///
/// Returns [`ColorError::NotAString`] when `base` is not a JSON string,
/// otherwise the errors of [`shades`].
pub fn shades_value(base: &Value) -> Result<ColorScale, ColorError> {
    parse_color_value(base).map(ramp)
}

/// The ramp for an already-parsed base color.
#[must_use]
pub fn ramp(base: Rgb) -> ColorScale {
    Step::ALL
        .into_iter()
        .map(|step| (step.as_str(), step.apply(base).to_hex()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
