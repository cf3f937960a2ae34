//! Color tokens handed to the host framework's theme.
//!
//! An opacity-aware token is the reason colors are stored as bare channels:
//!
//! ```text
//! --brand: 59, 130, 246;
//!
//! render(None)         rgb(var(--brand))
//! render(Some("0.5"))  rgba(var(--brand), 0.5)
//! ```

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tracing::warn;

/// How one flattened color is referenced from utility classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// Backed by a custom property holding `"R, G, B"`; accepts an alpha.
    Opacity {
        /// Property name without the leading `--`.
        variable: String,
    },
    /// A color that cannot be split into channels, used verbatim.
    Literal(String),
}

impl ColorToken {
    #[must_use]
    pub fn opacity(variable: impl Into<String>) -> Self {
        Self::Opacity {
            variable: variable.into(),
        }
    }

    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// The CSS value for this token. An empty `opacity` counts as none;
    /// literals ignore it.
    #[must_use]
    pub fn render(&self, opacity: Option<&str>) -> String {
        match (self, opacity.filter(|o| !o.is_empty())) {
            (Self::Opacity { variable }, Some(alpha)) => {
                format!("rgba(var(--{variable}), {alpha})")
            }
            (Self::Opacity { variable }, None) => format!("rgb(var(--{variable}))"),
            (Self::Literal(value), _) => value.clone(),
        }
    }

    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::Opacity { variable } => Some(variable.as_str()),
            Self::Literal(_) => None,
        }
    }

    #[must_use]
    pub const fn is_opacity_aware(&self) -> bool {
        matches!(self, Self::Opacity { .. })
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render(None))
    }
}

/// Token name → token, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenTable {
    tokens: IndexMap<String, ColorToken>,
}

impl TokenTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. A later token replaces an earlier one with the same
    /// name; switching between opacity-aware and literal is logged since
    /// the schemes then disagree on how the color can be used.
    pub fn insert(&mut self, name: impl Into<String>, token: ColorToken) {
        let name = name.into();
        if let Some(previous) = self.tokens.get(&name) {
            if previous.is_opacity_aware() != token.is_opacity_aware() {
                warn!(
                    token = %name,
                    previous = %previous.render(None),
                    next = %token.render(None),
                    "schemes disagree on whether a color is opacity-aware; keeping the last"
                );
            }
        }
        self.tokens.insert(name, token);
    }

    /// Merge `other` into this table, later tokens winning.
    pub fn extend(&mut self, other: Self) {
        for (name, token) in other.tokens {
            self.insert(name, token);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorToken> {
        self.tokens.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorToken)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token rendered with the same opacity.
    #[must_use]
    pub fn render_all(&self, opacity: Option<&str>) -> IndexMap<String, String> {
        self.tokens
            .iter()
            .map(|(name, token)| (name.clone(), token.render(opacity)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
