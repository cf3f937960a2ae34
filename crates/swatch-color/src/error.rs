// SPDX-License-Identifier: MIT
//
// Color errors. Two of them come from the strict parser used for palette
// generation (wrong input type, unknown syntax); the third is raised when a
// value handed to the CSS emitter looks like a color but is malformed.

use thiserror::Error;

/// Errors produced while parsing or classifying a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A non-string value was given where a color string is required.
    #[error("color should be a string, found {found}")]
    NotAString {
        /// JSON type name of the offending value (`"number"`, `"object"`, ...).
        found: &'static str,
    },

    /// The string matches none of the accepted color syntaxes.
    #[error("invalid color format: {input:?}")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },

    /// The string starts like a hex or `rgb()` color but is not valid CSS.
    #[error("unrecognized color {input:?}: expected 3, 4, 6 or 8 hex digits or a well-formed rgb() function")]
    UnrecognizedColor {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }

    pub(crate) fn unrecognized(input: &str) -> Self {
        Self::UnrecognizedColor {
            input: input.to_owned(),
        }
    }
}
