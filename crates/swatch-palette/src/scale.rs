//! Color values as they appear in a theme: a single CSS color string, or a
//! scale of named variants keyed by step plus `DEFAULT` and `foreground`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_color::ColorError;

use crate::shades::shades;
use crate::step::Step;

/// Key of the variant used when a color group is referenced by name alone.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Key of the variant used for text drawn on top of the color.
pub const FOREGROUND_KEY: &str = "foreground";

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// An ordered set of color variants: step keys (`"50"` .. `"950"`),
/// optional `DEFAULT` and `foreground`, and any other names a theme uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale {
    variants: IndexMap<String, String>,
}

impl ColorScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the full ramp for `base` and fill in `DEFAULT` (step 500)
    /// and `foreground` (step 950).
    ///
    /// # Errors
    ///
    /// Fails when `base` is not a parseable color; see [`shades`].
    pub fn from_base(base: &str) -> Result<Self, ColorError> {
        let mut scale = shades(base)?;
        scale.colorize();
        Ok(scale)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variants.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn step(&self, step: Step) -> Option<&str> {
        self.get(step.as_str())
    }

    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.get(DEFAULT_KEY)
    }

    #[must_use]
    pub fn foreground(&self) -> Option<&str> {
        self.get(FOREGROUND_KEY)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.variants.contains_key(key)
    }

    /// Set a variant, returning the previous value. An existing key keeps
    /// its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.variants.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// [`colorize_with`](Self::colorize_with) using step 500.
    pub fn colorize(&mut self) -> &mut Self {
        self.colorize_with(Step::CANONICAL.as_str())
    }

    /// Fill in the alias variants without overwriting anything:
    ///
    /// - `DEFAULT` takes the value at `key` when `DEFAULT` is missing or
    ///   empty and `key` exists;
    /// - `foreground` takes step 950 when `foreground` is missing or empty
    ///   and step 950 exists.
    ///
    /// Applying it twice is the same as applying it once.
    pub fn colorize_with(&mut self, key: &str) -> &mut Self {
        if is_unset(self.default_color()) {
            if let Some(value) = self.get(key).map(str::to_owned) {
                self.insert(DEFAULT_KEY, value);
            }
        }
        if is_unset(self.foreground()) {
            if let Some(value) = self.step(Step::FOREGROUND).map(str::to_owned) {
                self.insert(FOREGROUND_KEY, value);
            }
        }
        self
    }
}

fn is_unset(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorScale {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variants: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ColorScale {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A theme color: either a plain CSS color string or a [`ColorScale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Value(String),
    Scale(ColorScale),
}

impl Color {
    /// [`colorize_with`](Self::colorize_with) using step 500.
    #[must_use]
    pub fn colorize(self) -> Self {
        self.colorize_with(Step::CANONICAL.as_str())
    }

    /// Fill in `DEFAULT` and `foreground` on a scale; plain strings pass
    /// through unchanged. See [`ColorScale::colorize_with`].
    #[must_use]
    pub fn colorize_with(self, key: &str) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Scale(mut scale) => {
                scale.colorize_with(key);
                Self::Scale(scale)
            }
        }
    }

    #[must_use]
    pub const fn as_scale(&self) -> Option<&ColorScale> {
        match self {
            Self::Scale(scale) => Some(scale),
            Self::Value(_) => None,
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<ColorScale> for Color {
    fn from(scale: ColorScale) -> Self {
        Self::Scale(scale)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> ColorScale {
        ColorScale::new().with("500", "#112233").with("950", "#000000")
    }

    #[test]
    fn colorize_sets_default_and_foreground() {
        let mut scale = sample();
        scale.colorize();
        assert_eq!(scale.default_color(), Some("#112233"));
        assert_eq!(scale.foreground(), Some("#000000"));
    }

    #[test]
    fn colorize_is_idempotent() {
        let mut once = sample();
        once.colorize();
        let mut twice = once.clone();
        twice.colorize();
        assert_eq!(once, twice);
    }

    #[test]
    fn colorize_keeps_explicit_values() {
        let mut scale = sample()
            .with("DEFAULT", "#abcdef")
            .with("foreground", "#ffffff");
        scale.colorize();
        assert_eq!(scale.default_color(), Some("#abcdef"));
        assert_eq!(scale.foreground(), Some("#ffffff"));
    }

    #[test]
    fn colorize_replaces_empty_aliases() {
        let mut scale = sample().with("DEFAULT", "").with("foreground", "");
        scale.colorize();
        assert_eq!(scale.default_color(), Some("#112233"));
        assert_eq!(scale.foreground(), Some("#000000"));
    }

    #[test]
    fn colorize_with_custom_key() {
        let mut scale = sample().with("600", "#0f1f2e");
        scale.colorize_with("600");
        assert_eq!(scale.default_color(), Some("#0f1f2e"));
    }

    #[test]
    fn colorize_missing_keys_adds_nothing() {
        let mut scale = ColorScale::new().with("100", "#eeeeee");
        scale.colorize();
        assert_eq!(scale.default_color(), None);
        assert_eq!(scale.foreground(), None);
        assert_eq!(scale.len(), 1);
    }

    #[test]
    fn color_value_passes_through() {
        let color = Color::from("#112233").colorize();
        assert_eq!(color, Color::Value("#112233".into()));
    }

    #[test]
    fn color_scale_is_colorized() {
        let color = Color::from(sample()).colorize();
        let scale = color.as_scale().unwrap();
        assert_eq!(scale.default_color(), Some("#112233"));
        assert_eq!(scale.foreground(), Some("#000000"));
    }

    #[test]
    fn deserializes_both_shapes() {
        let value: Color = serde_json::from_value(json!("var(--brand)")).unwrap();
        assert_eq!(value, Color::Value("var(--brand)".into()));

        let scale: Color =
            serde_json::from_value(json!({ "500": "#112233", "950": "#000000" })).unwrap();
        assert_eq!(scale, Color::Scale(sample()));
    }

    #[test]
    fn serialization_keeps_order() {
        let mut scale = sample();
        scale.colorize();
        let out = serde_json::to_string(&scale).unwrap();
        assert_eq!(
            out,
            r##"{"500":"#112233","950":"#000000","DEFAULT":"#112233","foreground":"#000000"}"##
        );
    }

    #[test]
    fn from_base_fills_aliases() {
        let scale = ColorScale::from_base("#3b82f6").unwrap();
        assert_eq!(scale.len(), 13);
        assert_eq!(scale.default_color(), Some("#3B82F6"));
        assert_eq!(scale.foreground(), Some("#0C1A31"));
    }
}
