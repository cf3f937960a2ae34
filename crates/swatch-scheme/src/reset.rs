//! Base resets, the element-level rules that wire the scheme tokens into
//! `html`, `body` and friends.
//!
//! Each selector takes one of three shapes:
//!
//! | Config                              | Emitted                             |
//! |-------------------------------------|-------------------------------------|
//! | `"bg-background text-foreground"`   | `@apply bg-background text-foreground` |
//! | `["antialiased", "min-h-screen"]`   | `@apply antialiased min-h-screen`   |
//! | `{ "color-scheme": "light dark" }`  | the declarations verbatim           |

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::styles::{BaseStyles, Declarations};

/// Directive used to pull utility classes into a base rule.
pub const APPLY: &str = "@apply";

/// What to put under one reset selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResetProperty {
    /// Space-separated utility classes.
    Classes(String),
    /// Utility classes, one per entry.
    ClassList(Vec<String>),
    /// Raw declarations.
    Declarations(Declarations),
}

impl ResetProperty {
    fn declarations(&self) -> Declarations {
        let classes = match self {
            Self::Declarations(declarations) => return declarations.clone(),
            Self::Classes(classes) => classes.split_whitespace().collect::<Vec<_>>(),
            Self::ClassList(list) => list.iter().flat_map(|c| c.split_whitespace()).collect(),
        };
        let mut out = Declarations::new();
        if !classes.is_empty() {
            out.insert(APPLY.to_owned(), classes.join(" "));
        }
        out
    }
}

impl From<&str> for ResetProperty {
    fn from(classes: &str) -> Self {
        Self::Classes(classes.to_owned())
    }
}

impl From<Vec<String>> for ResetProperty {
    fn from(list: Vec<String>) -> Self {
        Self::ClassList(list)
    }
}

impl From<Declarations> for ResetProperty {
    fn from(declarations: Declarations) -> Self {
        Self::Declarations(declarations)
    }
}

/// Selector → reset, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetOptions {
    rules: IndexMap<String, ResetProperty>,
}

impl ResetOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, selector: impl Into<String>, property: impl Into<ResetProperty>) -> Self {
        self.rules.insert(selector.into(), property.into());
        self
    }

    /// Parse reset options from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or a value that
    /// fits none of the three shapes.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Turn reset options into base styles. Selectors whose reset is empty
/// produce no rule.
#[must_use]
pub fn reset(options: &ResetOptions) -> BaseStyles {
    let mut styles = BaseStyles::new();
    for (selector, property) in &options.rules {
        let declarations = property.declarations();
        if !declarations.is_empty() {
            styles.insert(selector.clone(), declarations);
        }
    }
    styles
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
