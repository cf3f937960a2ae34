//! Theme configuration: schemes, selector strategy, variable prefix.
//!
//! A config is built once, either in Rust or from JSON, and never changes
//! afterwards:
//!
//! ```json
//! {
//!   "selector": "class",
//!   "prefix": "tw",
//!   "global": { "white": "#fff" },
//!   "schemes": {
//!     "light": { "primary": { "500": "#3b82f6", "DEFAULT": "#3b82f6" } },
//!     "dark":  { "primary": { "500": "#60a5fa", "DEFAULT": "#60a5fa" } }
//!   }
//! }
//! ```
//!
//! | Field      | Default        | Meaning                                      |
//! |------------|----------------|----------------------------------------------|
//! | `selector` | `"data-theme"` | `"class"`, or the data attribute to match on |
//! | `prefix`   | none           | prepended to every custom-property name      |
//! | `global`   | none           | colors emitted under `:root`                 |
//! | `schemes`  | empty          | scheme name → colors                         |

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_palette::{Color, ColorScale};

use crate::error::ThemeError;
use crate::flatten::flatten;

/// Attribute matched when no selector strategy is configured.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Selector of the global palette.
pub const ROOT_SELECTOR: &str = ":root";

/// Name the global palette goes by in logs and errors. No scheme may use it.
pub const GLOBAL_SCHEME: &str = "global";

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// How a scheme is switched on in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// `.dark { ... }`
    Class,
    /// `[data-theme="dark"] { ... }`
    Attribute(String),
}

impl Selector {
    /// The CSS selector that activates `scheme`.
    #[must_use]
    pub fn for_scheme(&self, scheme: &str) -> String {
        match self {
            Self::Class => format!(".{scheme}"),
            Self::Attribute(attr) => format!("[{attr}=\"{scheme}\"]"),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Attribute(DEFAULT_ATTRIBUTE.to_owned())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        if s == "class" {
            Self::Class
        } else {
            Self::Attribute(s)
        }
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::Class => "class".to_owned(),
            Selector::Attribute(attr) => attr,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Attribute(attr) => f.write_str(attr),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A scheme entry: a color string, or a group of further entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeValue {
    Color(String),
    Group(IndexMap<String, SchemeValue>),
}

impl From<&str> for SchemeValue {
    fn from(value: &str) -> Self {
        Self::Color(value.to_owned())
    }
}

impl From<String> for SchemeValue {
    fn from(value: String) -> Self {
        Self::Color(value)
    }
}

impl From<ColorScale> for SchemeValue {
    fn from(scale: ColorScale) -> Self {
        Self::Group(
            scale
                .iter()
                .map(|(k, v)| (k.to_owned(), Self::from(v)))
                .collect(),
        )
    }
}

impl From<Color> for SchemeValue {
    fn from(color: Color) -> Self {
        match color {
            Color::Value(value) => Self::Color(value),
            Color::Scale(scale) => scale.into(),
        }
    }
}

impl From<Scheme> for SchemeValue {
    fn from(scheme: Scheme) -> Self {
        Self::Group(scheme.entries)
    }
}

/// Semantic color names mapped to colors, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scheme {
    entries: IndexMap<String, SchemeValue>,
}

impl Scheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SchemeValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemeValue> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) const fn entries(&self) -> &IndexMap<String, SchemeValue> {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<SchemeValue>> FromIterator<(K, V)> for Scheme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// Everything needed to emit one stylesheet and one token table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub selector: Selector,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<Scheme>,

    #[serde(default)]
    pub schemes: IndexMap<String, Scheme>,
}

impl ThemeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] for malformed JSON or unknown fields and
    /// [`ThemeError::InvalidConfig`] when [`validate`](Self::validate) fails.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] when the file cannot be read, otherwise
    /// the errors of [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn global(mut self, scheme: Scheme) -> Self {
        self.global = Some(scheme);
        self
    }

    #[must_use]
    pub fn scheme(mut self, name: impl Into<String>, scheme: Scheme) -> Self {
        self.schemes.insert(name.into(), scheme);
        self
    }

    /// Check that every selector and variable name this config produces is
    /// well-formed CSS.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if let Selector::Attribute(attr) = &self.selector {
            if !is_css_ident(attr) {
                return Err(ThemeError::InvalidConfig(format!(
                    "selector attribute {attr:?} is not a valid attribute name"
                )));
            }
        }
        if let Some(prefix) = &self.prefix {
            if !prefix.is_empty() && !is_css_ident(prefix) {
                return Err(ThemeError::InvalidConfig(format!(
                    "prefix {prefix:?} cannot be used in a custom-property name"
                )));
            }
        }
        for name in self.schemes.keys() {
            if !is_css_ident(name) {
                return Err(ThemeError::InvalidConfig(format!(
                    "scheme name {name:?} cannot be used in a selector"
                )));
            }
            if name == GLOBAL_SCHEME {
                return Err(ThemeError::InvalidConfig(format!(
                    "scheme name {name:?} is reserved for the global palette"
                )));
            }
        }
        for scope in self.scopes() {
            if let Some(token) = flatten(scope.scheme).into_keys().find(|t| !is_token_name(t)) {
                return Err(ThemeError::InvalidConfig(format!(
                    "scheme {:?}, color {token:?} cannot be used in a custom-property name",
                    scope.name
                )));
            }
        }
        Ok(())
    }

    /// Variable name (without the leading `--`) for a flattened token.
    #[must_use]
    pub fn variable_name(&self, token: &str) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}-{token}"),
            _ => token.to_owned(),
        }
    }

    /// Every scheme to emit with its selector: the global palette first
    /// (under `:root`), then the named schemes in declaration order.
    pub fn scopes(&self) -> impl Iterator<Item = Scope<'_>> {
        let global = self.global.as_ref().map(|scheme| Scope {
            name: GLOBAL_SCHEME,
            selector: ROOT_SELECTOR.to_owned(),
            scheme,
        });
        let named = self.schemes.iter().map(move |(name, scheme)| Scope {
            name: name.as_str(),
            selector: self.selector.for_scheme(name),
            scheme,
        });
        global.into_iter().chain(named)
    }
}

/// A scheme paired with the selector it is emitted under.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    pub name: &'a str,
    pub selector: String,
    pub scheme: &'a Scheme,
}

/// Letters, digits, `-` and `_`, not starting with a digit.
fn is_css_ident(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '-' || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Letters, digits, `-` and `_`. Digits may lead since the name follows `--`.
fn is_token_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
