//! Base-layer styles: selector → declarations, rendered as plain CSS.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Property → value for one rule, in insertion order.
pub type Declarations = IndexMap<String, String>;

/// Rules for the host's base layer, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BaseStyles {
    rules: IndexMap<String, Declarations>,
}

impl BaseStyles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add declarations under `selector`, merging into an existing rule.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.rules
            .entry(selector.into())
            .or_default()
            .extend(declarations);
    }

    /// Merge every rule of `other` into this one.
    pub fn extend(&mut self, other: Self) {
        for (selector, declarations) in other.rules {
            self.insert(selector, declarations);
        }
    }

    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Renders one rule per selector, blank line between rules:
///
/// ```css
/// [data-theme="dark"] {
///   --brand: 59, 130, 246;
/// }
/// ```
impl fmt::Display for BaseStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (selector, declarations)) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{selector} {{")?;
            for (property, value) in declarations {
                writeln!(f, "  {property}: {value};")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decls(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn renders_rules_in_order() {
        let mut styles = BaseStyles::new();
        styles.insert(":root", decls(&[("--white", "255, 255, 255")]));
        styles.insert(
            ".dark",
            decls(&[("--bg", "0, 0, 0"), ("--fg", "255, 255, 255")]),
        );
        assert_eq!(
            styles.to_string(),
            ":root {\n  --white: 255, 255, 255;\n}\n\n.dark {\n  --bg: 0, 0, 0;\n  --fg: 255, 255, 255;\n}\n"
        );
    }

    #[test]
    fn same_selector_merges() {
        let mut styles = BaseStyles::new();
        styles.insert("html", decls(&[("color", "red"), ("margin", "0")]));
        styles.insert("html", decls(&[("color", "blue")]));
        assert_eq!(styles.len(), 1);
        assert_eq!(
            styles.get("html"),
            Some(&decls(&[("color", "blue"), ("margin", "0")]))
        );
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(BaseStyles::new().to_string(), "");
    }

    #[test]
    fn serializes_as_nested_object() {
        let mut styles = BaseStyles::new();
        styles.insert(".light", decls(&[("--bg", "255, 255, 255")]));
        assert_eq!(
            serde_json::to_string(&styles).unwrap(),
            r#"{".light":{"--bg":"255, 255, 255"}}"#
        );
    }
}
