//! Intensity steps of a tonal ramp.
//!
//! A ramp has eleven fixed steps. Steps below 500 are tints (mixed toward
//! white), 500 is the base color itself, and steps above 500 are shades
//! (scaled toward black):
//!
//! | Step | Variant | Intensity |
//! |------|---------|-----------|
//! | 50   | tint    | 0.95      |
//! | 100  | tint    | 0.9       |
//! | 200  | tint    | 0.75      |
//! | 300  | tint    | 0.6       |
//! | 400  | tint    | 0.3       |
//! | 500  | base    |           |
//! | 600  | shade   | 0.9       |
//! | 700  | shade   | 0.6       |
//! | 800  | shade   | 0.45      |
//! | 900  | shade   | 0.3       |
//! | 950  | shade   | 0.2       |

use std::fmt;

use swatch_color::Rgb;

/// How a step derives its color from the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// `c + (255 - c) * intensity`
    Tint(f64),
    /// The base color unchanged.
    Base,
    /// `c * intensity`
    Shade(f64),
}

impl Variant {
    #[must_use]
    pub fn apply(self, base: Rgb) -> Rgb {
        match self {
            Self::Tint(intensity) => base.tint(intensity),
            Self::Base => base,
            Self::Shade(intensity) => base.shade(intensity),
        }
    }
}

/// One of the eleven steps of a tonal ramp, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Step {
    /// Every step in ascending order.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The step picked as `DEFAULT` when none is given.
    pub const CANONICAL: Self = Self::S500;

    /// The step mirrored into `foreground`.
    pub const FOREGROUND: Self = Self::S950;

    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// The key this step uses in a color scale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// Look a step up by its key. Returns `None` for anything that is not
    /// one of the eleven step numbers.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.as_str() == key)
    }

    #[must_use]
    pub const fn variant(self) -> Variant {
        match self {
            Self::S50 => Variant::Tint(0.95),
            Self::S100 => Variant::Tint(0.9),
            Self::S200 => Variant::Tint(0.75),
            Self::S300 => Variant::Tint(0.6),
            Self::S400 => Variant::Tint(0.3),
            Self::S500 => Variant::Base,
            Self::S600 => Variant::Shade(0.9),
            Self::S700 => Variant::Shade(0.6),
            Self::S800 => Variant::Shade(0.45),
            Self::S900 => Variant::Shade(0.3),
            Self::S950 => Variant::Shade(0.2),
        }
    }

    /// This step's color for the given base.
    #[must_use]
    pub fn apply(self, base: Rgb) -> Rgb {
        self.variant().apply(base)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
