// SPDX-License-Identifier: MIT
//
// 8-bit sRGB triples and the two channel-wise operations palette generation
// is built on:
//
//   tint(i)  = c + (255 - c) * i    mixes toward white
//   shade(i) = c * i                scales toward black
//
// Single-letter channel names (r, g, b, c) follow the usual color-math
// convention.
#![allow(clippy::many_single_char_names)]

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// This is the common currency between the strict parser, the palette
/// generator and the CSS emitter. There is no alpha channel: opacity is
/// applied at CSS level through `rgba(var(--name), alpha)`.
///
/// # Examples
///
/// ```
/// use swatch_color::Rgb;
///
/// let blue = Rgb::new(0x3B, 0x82, 0xF6);
/// assert_eq!(blue.to_hex(), "#3B82F6");
/// assert_eq!(blue.to_channels(), "59, 130, 246");
/// assert_eq!(blue.shade(0.2).to_hex(), "#0C1A31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#RGB` or `#RRGGBB`, the `#` is optional.
    ///
    /// Returns `None` if the string is not a 3- or 6-digit hex color.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Mix toward white by `intensity` (0.0 keeps the color, 1.0 is white).
    #[must_use]
    pub fn tint(self, intensity: f64) -> Self {
        self.map(|c| c + (255.0 - c) * intensity)
    }

    /// Scale toward black by `intensity` (1.0 keeps the color, 0.0 is black).
    #[must_use]
    pub fn shade(self, intensity: f64) -> Self {
        self.map(|c| c * intensity)
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Bare channel list `"R, G, B"`, the form stored in a custom property
    /// so it can be wrapped in `rgb()` or `rgba()` later.
    #[must_use]
    pub fn to_channels(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            r: to_u8(f(f64::from(self.r))),
            g: to_u8(f(f64::from(self.g))),
            b: to_u8(f(f64::from(self.b))),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Round to the nearest integer and clamp into a channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
