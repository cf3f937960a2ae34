// SPDX-License-Identifier: MIT
//
// swatch-color — the color vocabulary shared by palette generation and
// scheme emission.
//
// Two parsing paths live here on purpose, with one policy each:
//
//   parse_color       strict: hex or "r, g, b" triple, anything else errors
//   CssColor::classify  permissive for non-colors (var(), keywords), strict
//                       for strings that start like hex or rgb()
//
// Neither path ever silently turns a malformed color into CSS.

pub mod css;
pub mod error;
pub mod parse;
pub mod rgb;

pub use css::{CssColor, can_opacitize, is_hex_color, is_rgb_function};
pub use error::ColorError;
pub use parse::{json_type_name, parse_color, parse_color_value};
pub use rgb::Rgb;
