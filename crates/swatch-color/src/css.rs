// SPDX-License-Identifier: MIT
//
// Classification of color strings found in theme configs.
//
// Two syntaxes can be split into channels and therefore re-wrapped with an
// alpha at CSS level: hex (`#rgb`, `#rrggbb`) and the numeric `rgb(r, g, b)`
// function. Other valid colors (`#rgba`, `#rrggbbaa`, `rgb(0 0 0 / 50%)`,
// `rgb(var(--x))`, keywords, other functions) are handed to the browser
// untouched. A `#` or `rgb(`/`rgba(` string that is not valid CSS is
// rejected so a typo never reaches the stylesheet.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;
use crate::rgb::Rgb;

/// One `rgb()` channel: 0-99 with optional fraction and `%`, a bare
/// fraction percentage, `100%`, or 100-255 with optional fraction.
const CHANNEL: &str = r"\s*0*(?:[0-9][0-9]?(?:\.[0-9]+)?(?:\s*%)?|\.[0-9]+\s*%|100(?:\.0*)?\s*%|(?:1[0-9][0-9]|2[0-4][0-9]|25[0-5])(?:\.[0-9]+)?)\s*";

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^rgb\({CHANNEL},{CHANNEL},{CHANNEL}\)$"))
        .expect("rgb() channel pattern is a valid regex")
});

/// Any numeric component CSS accepts inside `rgb()`/`rgba()`.
const COMPONENT: &str = r"(?:[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)%?|none)";

/// Legacy comma syntax with an optional alpha, or the space syntax with an
/// optional `/ alpha`. Case-insensitive.
static RGB_ANY: LazyLock<Regex> = LazyLock::new(|| {
    let c = COMPONENT;
    Regex::new(&format!(
        r"(?i)^rgba?\(\s*(?:{c}\s*,\s*{c}\s*,\s*{c}(?:\s*,\s*{c})?|{c}\s+{c}\s+{c}(?:\s*/\s*{c})?)\s*\)$"
    ))
    .expect("rgb() component pattern is a valid regex")
});

/// Whether `color` is `#` followed by exactly 3 or 6 hex digits.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    color.starts_with('#') && Rgb::from_hex(color).is_some()
}

/// Whether `color` is a numeric `rgb(r, g, b)` function with three
/// channels in range.
#[must_use]
pub fn is_rgb_function(color: &str) -> bool {
    RGB_FUNCTION.is_match(color)
}

/// Whether `color` can be stored as bare channels and later rendered with
/// an alpha value.
#[must_use]
pub fn can_opacitize(color: &str) -> bool {
    is_hex_color(color) || is_rgb_function(color)
}

// ─── CssColor ────────────────────────────────────────────────────────────────

/// A theme color string, sorted by what the emitter can do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssColor {
    /// `#rgb` or `#rrggbb`.
    Hex(Rgb),

    /// `rgb(...)`, holding the channel list between the parentheses with
    /// separators normalized to `", "`.
    Function(String),

    /// Any other string (`var(--x)`, `transparent`, `hsl(...)`, ...). Used
    /// verbatim and never opacity-aware.
    Passthrough(String),
}

impl CssColor {
    /// Classify a color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnrecognizedColor`] when the string starts with
    /// `#` but is not 3, 4, 6 or 8 hex digits, or starts with `rgb(`/`rgba(`
    /// but is not a well-formed color function.
    pub fn classify(color: &str) -> Result<Self, ColorError> {
        if let Some(digits) = color.strip_prefix('#') {
            if let Some(rgb) = Rgb::from_hex(color) {
                return Ok(Self::Hex(rgb));
            }
            if matches!(digits.len(), 4 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Ok(Self::Passthrough(color.to_owned()));
            }
            return Err(ColorError::unrecognized(color));
        }
        if is_rgb_function(color) {
            let inner = &color[4..color.len() - 1];
            let channels: Vec<&str> = inner.split(',').map(str::trim).collect();
            return Ok(Self::Function(channels.join(", ")));
        }
        if starts_with_ignore_case(color, "rgb(") || starts_with_ignore_case(color, "rgba(") {
            if RGB_ANY.is_match(color) || wraps_nested_call(color) {
                return Ok(Self::Passthrough(color.to_owned()));
            }
            return Err(ColorError::unrecognized(color));
        }
        Ok(Self::Passthrough(color.to_owned()))
    }

    /// The bare `"R, G, B"` channel list, if this color has one.
    #[must_use]
    pub fn channels(&self) -> Option<String> {
        match self {
            Self::Hex(rgb) => Some(rgb.to_channels()),
            Self::Function(channels) => Some(channels.clone()),
            Self::Passthrough(_) => None,
        }
    }

    /// Whether this color can be re-wrapped with an alpha value.
    #[must_use]
    pub const fn is_opacity_capable(&self) -> bool {
        !matches!(self, Self::Passthrough(_))
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(rgb) => write!(f, "{rgb}"),
            Self::Function(channels) => write!(f, "rgb({channels})"),
            Self::Passthrough(value) => f.write_str(value),
        }
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `name(...)` whose arguments hold another call (`var()`, `calc()`) with
/// balanced parentheses.
fn wraps_nested_call(color: &str) -> bool {
    let Some(open) = color.find('(') else {
        return false;
    };
    let Some(args) = color[open + 1..].strip_suffix(')') else {
        return false;
    };
    if !args.contains('(') {
        return false;
    }
    let mut depth = 0usize;
    for c in args.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_detection_requires_hash() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#fffffff"));
    }

    #[test]
    fn rgb_function_accepts_numbers_and_percentages() {
        for color in [
            "rgb(0,0,0)",
            "rgb(255, 255, 255)",
            "rgb( 12 , 34 , 56 )",
            "rgb(10.5, 20, 30)",
            "rgb(50%, 25%, 0%)",
            "rgb(100%, 100.0%, .5%)",
            "rgb(007, 250, 199)",
        ] {
            assert!(is_rgb_function(color), "{color} should match");
        }
    }

    #[test]
    fn rgb_function_rejects_bad_shapes() {
        for color in [
            "rgb(256, 0, 0)",
            "rgb(1, 2)",
            "rgb(1, 2, 3,)",
            "rgb(1, 2, 3, 4)",
            "rgba(1, 2, 3)",
            "rgb(1 2 3)",
            "RGB(1, 2, 3)",
            "rgb(a, b, c)",
            " rgb(1, 2, 3)",
        ] {
            assert!(!is_rgb_function(color), "{color} should not match");
        }
    }

    #[test]
    fn can_opacitize_covers_both_syntaxes() {
        assert!(can_opacitize("#112233"));
        assert!(can_opacitize("rgb(1, 2, 3)"));
        assert!(!can_opacitize("var(--brand)"));
        assert!(!can_opacitize("transparent"));
    }

    #[test]
    fn classify_hex() {
        let c = CssColor::classify("#3b82f6").unwrap();
        assert_eq!(c, CssColor::Hex(Rgb::new(59, 130, 246)));
        assert_eq!(c.channels().as_deref(), Some("59, 130, 246"));
        assert!(c.is_opacity_capable());
    }

    #[test]
    fn classify_rgb_function_normalizes_separators() {
        let c = CssColor::classify("rgb( 1 ,2,  3 )").unwrap();
        assert_eq!(c, CssColor::Function("1, 2, 3".into()));
        assert_eq!(c.to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn classify_passthrough() {
        for color in ["var(--brand)", "transparent", "currentColor", "hsl(0 0% 0%)"] {
            let c = CssColor::classify(color).unwrap();
            assert_eq!(c, CssColor::Passthrough(color.into()));
            assert_eq!(c.channels(), None);
            assert!(!c.is_opacity_capable());
        }
    }

    #[test]
    fn classify_other_valid_css_colors_as_passthrough() {
        for color in [
            "#fff8",
            "#ffffff80",
            "rgb(0 0 0 / 50%)",
            "rgb(1 2 3)",
            "RGB(1, 2, 3)",
            "rgba(1, 2, 3, 0.5)",
            "rgb(300, 0, 0)",
            "rgb(var(--brand))",
            "rgb(var(--brand) / 0.5)",
            "rgba(calc(10 + 5), 0, 0, 1)",
        ] {
            assert_eq!(
                CssColor::classify(color),
                Ok(CssColor::Passthrough(color.into())),
                "{color}"
            );
        }
    }

    #[test]
    fn classify_rejects_malformed_lookalikes() {
        for color in [
            "#12",
            "#12345",
            "#zzzzzz",
            "#ffff8g",
            "RGB(1,2)",
            "rgb(1, 2, 3,)",
            "rgb(1, 2, 3",
            "rgb()",
            "rgb(a, b, c)",
            "rgba(var(--x)",
            "rgb(var(--x)))",
        ] {
            assert_eq!(
                CssColor::classify(color),
                Err(ColorError::UnrecognizedColor {
                    input: color.into()
                }),
            );
        }
    }
}
