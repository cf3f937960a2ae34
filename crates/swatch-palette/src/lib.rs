//! # swatch-palette — tonal ramps from a single base color
//!
//! ```text
//! "#3b82f6"
//!     │  parse_color (swatch-color)
//!     ▼
//! Rgb(59, 130, 246)
//!     │  Step::ALL → tint / base / shade
//!     ▼
//! ColorScale { "50": "#F5F9FF", ..., "950": "#0C1A31" }
//!     │  colorize
//!     ▼
//! + DEFAULT (step 500), foreground (step 950)
//! ```
//!
//! Everything here is a pure function of its input.

pub mod scale;
pub mod shades;
pub mod step;

pub use scale::{Color, ColorScale, DEFAULT_KEY, FOREGROUND_KEY};
pub use shades::{ramp, shades, shades_value};
pub use step::{Step, Variant};
