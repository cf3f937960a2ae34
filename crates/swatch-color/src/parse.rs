// SPDX-License-Identifier: MIT
//
// Strict parsing for base colors. Palette generation needs real channel
// values, so anything outside the accepted syntaxes is an error rather than
// a pass-through:
//
//   3b82f6   #3b82f6   f0a   #f0a   59, 130, 246

use serde_json::Value;

use crate::error::ColorError;
use crate::rgb::Rgb;

/// Parse a base color into an [`Rgb`] triple.
///
/// Accepts 6-digit or 3-digit hex (with or without `#`, any case) or a
/// comma-separated triple of integers in `0..=255`. Whitespace around each
/// triple component is ignored.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the input matches none of
/// the accepted syntaxes, including out-of-range triples like `256,0,0`.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    if let Some(rgb) = Rgb::from_hex(input) {
        return Ok(rgb);
    }
    if input.contains(',') {
        return parse_triple(input).ok_or_else(|| ColorError::invalid(input));
    }
    Err(ColorError::invalid(input))
}

/// Parse a base color from a JSON value.
///
/// # Errors
///
/// Returns [`ColorError::NotAString`] for any non-string value, otherwise
/// whatever [`parse_color`] returns.
pub fn parse_color_value(value: &Value) -> Result<Rgb, ColorError> {
    match value {
        Value::String(s) => parse_color(s),
        other => Err(ColorError::NotAString {
            found: json_type_name(other),
        }),
    }
}

/// Name of a JSON value's type, as reported in [`ColorError::NotAString`].
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_triple(input: &str) -> Option<Rgb> {
    let mut parts = input.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
