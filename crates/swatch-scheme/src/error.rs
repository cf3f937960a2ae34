//! Errors raised while loading a theme config or emitting its variables.

use std::io;
use std::path::PathBuf;

use swatch_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// A scheme color starts like hex or `rgb()` but is not valid CSS.
    #[error("scheme {scheme:?}, color {name:?}: {source}")]
    Color {
        /// Scheme name, or `"global"` for the global palette.
        scheme: String,
        /// Flattened token name of the color.
        name: String,
        #[source]
        source: ColorError,
    },

    /// The config is well-formed JSON but describes something unusable.
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
