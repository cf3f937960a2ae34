//! Nested scheme → flat token names.
//!
//! Group keys are joined with `-`, and a `DEFAULT` key stands for its parent:
//!
//! ```text
//! primary: { DEFAULT: a, 100: b, text: { DEFAULT: c, muted: d } }
//!
//! primary            a
//! primary-100        b
//! primary-text       c
//! primary-text-muted d
//! ```
//!
//! When two paths flatten to the same name the later one wins, keeping the
//! position of the first.

use indexmap::IndexMap;
use swatch_palette::DEFAULT_KEY;

use crate::config::{Scheme, SchemeValue};

/// Separator between the segments of a flattened name.
pub const DELIMITER: char = '-';

/// Flatten a scheme into token name → color string, in declaration order.
#[must_use]
pub fn flatten(scheme: &Scheme) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    flatten_into(None, scheme.entries(), &mut out);
    out
}

fn flatten_into(
    parent: Option<&str>,
    entries: &IndexMap<String, SchemeValue>,
    out: &mut IndexMap<String, String>,
) {
    for (key, value) in entries {
        let name = join(parent, key);
        match value {
            SchemeValue::Color(color) => {
                out.insert(name, color.clone());
            }
            SchemeValue::Group(group) => flatten_into(Some(name.as_str()), group, out),
        }
    }
}

fn join(parent: Option<&str>, key: &str) -> String {
    match parent {
        None => key.to_owned(),
        Some(parent) if key == DEFAULT_KEY => parent.to_owned(),
        Some(parent) => format!("{parent}{DELIMITER}{key}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_palette::ColorScale;

    fn pairs(map: &IndexMap<String, String>) -> Vec<(&str, &str)> {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn flat_scheme_is_unchanged() {
        let scheme = Scheme::new().with("background", "#fff").with("text", "#000");
        assert_eq!(
            pairs(&flatten(&scheme)),
            [("background", "#fff"), ("text", "#000")]
        );
    }

    #[test]
    fn two_levels_join_with_dash() {
        let brand = ColorScale::new().with("100", "#eef").with("900", "#112");
        let scheme = Scheme::new().with("brand", brand);
        assert_eq!(
            pairs(&flatten(&scheme)),
            [("brand-100", "#eef"), ("brand-900", "#112")]
        );
    }

    #[test]
    fn default_collapses_onto_parent() {
        let text = Scheme::new().with("DEFAULT", "#333").with("muted", "#777");
        let scheme = Scheme::new().with(
            "primary",
            Scheme::new().with("DEFAULT", "#00f").with("text", text),
        );
        assert_eq!(
            pairs(&flatten(&scheme)),
            [
                ("primary", "#00f"),
                ("primary-text", "#333"),
                ("primary-text-muted", "#777"),
            ]
        );
    }

    #[test]
    fn top_level_default_keeps_its_name() {
        let scheme = Scheme::new().with("DEFAULT", "#123");
        assert_eq!(pairs(&flatten(&scheme)), [("DEFAULT", "#123")]);
    }

    #[test]
    fn collisions_keep_last_value() {
        let scheme = Scheme::new()
            .with("brand-100", "#aaa")
            .with("brand", Scheme::new().with("100", "#bbb"));
        assert_eq!(pairs(&flatten(&scheme)), [("brand-100", "#bbb")]);
    }

    #[test]
    fn empty_groups_produce_nothing() {
        let scheme = Scheme::new().with("empty", Scheme::new());
        assert!(flatten(&scheme).is_empty());
    }
}
