//! # swatch-scheme — CSS custom-property color schemes
//!
//! Turns a [`ThemeConfig`] into the two things a utility-CSS host needs:
//!
//! - **base styles**: one rule per scheme (`.dark`, `[data-theme="dark"]`,
//!   `:root` for the global palette) declaring `--name: R, G, B;`
//! - **color tokens**: `name → rgb(var(--name))`, rendered as
//!   `rgba(var(--name), alpha)` when the host asks for an opacity
//!
//! ```text
//! config.rs   ThemeConfig / Scheme / Selector, JSON loading, validation
//! flatten.rs  nested groups → dash-joined token names
//! emit.rs     scheme colors → custom properties + tokens
//! token.rs    ColorToken rendering, TokenTable
//! styles.rs   BaseStyles and its CSS rendering
//! reset.rs    element resets (@apply or raw declarations)
//! plugin.rs   PluginApi host seam, SchemesPlugin, ResetPlugin
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod flatten;
pub mod plugin;
pub mod reset;
pub mod styles;
pub mod token;

pub use config::{Scheme, SchemeValue, Selector, ThemeConfig};
pub use emit::{ThemeOutput, emit};
pub use error::ThemeError;
pub use flatten::flatten;
pub use plugin::{CollectedTheme, PluginApi, ResetPlugin, SchemesPlugin};
pub use reset::{ResetOptions, ResetProperty, reset};
pub use styles::{BaseStyles, Declarations};
pub use token::{ColorToken, TokenTable};
