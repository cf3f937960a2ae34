//! Scheme emission: the two outputs a theme build hands to the host.
//!
//! ```text
//! ThemeConfig
//!     │  scopes(): global → ":root", then each scheme → its selector
//!     ▼
//! flatten(scheme)                      brand-500 = "#3b82f6"
//!     │  CssColor::classify
//!     ├─ channels  → --tw-brand-500: 59, 130, 246;   Opacity token
//!     └─ other     → (no property)                   Literal token
//! ```

use swatch_color::CssColor;
use tracing::{debug, trace};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::flatten::flatten;
use crate::styles::{BaseStyles, Declarations};
use crate::token::{ColorToken, TokenTable};

/// Custom properties per selector plus the token table referencing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOutput {
    pub base: BaseStyles,
    pub colors: TokenTable,
}

/// Emit the custom properties and color tokens for every scheme of
/// `config`.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidConfig`] when the config fails validation
/// and [`ThemeError::Color`] for a color that starts like hex or `rgb()`
/// but is not valid CSS.
pub fn emit(config: &ThemeConfig) -> Result<ThemeOutput, ThemeError> {
    config.validate()?;

    let mut output = ThemeOutput::default();
    for scope in config.scopes() {
        let mut declarations = Declarations::new();

        for (name, value) in flatten(scope.scheme) {
            let color = CssColor::classify(&value).map_err(|source| ThemeError::Color {
                scheme: scope.name.to_owned(),
                name: name.clone(),
                source,
            })?;

            let token = if let Some(channels) = color.channels() {
                let variable = config.variable_name(&name);
                declarations.insert(format!("--{variable}"), channels);
                ColorToken::opacity(variable)
            } else {
                trace!(scheme = scope.name, token = %name, %value, "passing color through");
                ColorToken::literal(value)
            };
            output.colors.insert(name, token);
        }

        debug!(
            scheme = scope.name,
            selector = %scope.selector,
            variables = declarations.len(),
            "emitted scheme"
        );
        if !declarations.is_empty() {
            output.base.insert(scope.selector, declarations);
        }
    }

    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Scheme, Selector};
    use pretty_assertions::assert_eq;
    use swatch_color::ColorError;
    use swatch_palette::ColorScale;

    fn light_dark() -> ThemeConfig {
        ThemeConfig::new()
            .scheme(
                "light",
                Scheme::new()
                    .with("background", "#ffffff")
                    .with("brand", ColorScale::new().with("100", "#dbeafe").with("500", "#3b82f6")),
            )
            .scheme(
                "dark",
                Scheme::new()
                    .with("background", "rgb(0, 0, 0)")
                    .with("brand", ColorScale::new().with("100", "#1e3a8a").with("500", "#60a5fa")),
            )
    }

    fn props(output: &ThemeOutput, selector: &str) -> Vec<(String, String)> {
        output
            .base
            .get(selector)
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn one_property_per_leaf_under_attribute_selectors() {
        let output = emit(&light_dark()).unwrap();
        let selectors: Vec<&str> = output.base.selectors().collect();
        assert_eq!(selectors, ["[data-theme=\"light\"]", "[data-theme=\"dark\"]"]);

        assert_eq!(
            props(&output, "[data-theme=\"light\"]"),
            owned(&[
                ("--background", "255, 255, 255"),
                ("--brand-100", "219, 234, 254"),
                ("--brand-500", "59, 130, 246"),
            ])
        );
        assert_eq!(
            props(&output, "[data-theme=\"dark\"]"),
            owned(&[
                ("--background", "0, 0, 0"),
                ("--brand-100", "30, 58, 138"),
                ("--brand-500", "96, 165, 250"),
            ])
        );
    }

    #[test]
    fn prefix_applies_to_properties_and_tokens() {
        let output = emit(&light_dark().prefix("tw").selector(Selector::Class)).unwrap();
        let light = output.base.get(".light").unwrap();
        assert!(light.keys().all(|k| k.starts_with("--tw-")), "{light:?}");
        assert_eq!(
            output.colors.get("brand-500").unwrap().render(None),
            "rgb(var(--tw-brand-500))"
        );
        assert_eq!(
            output.colors.get("brand-500").unwrap().render(Some("0.5")),
            "rgba(var(--tw-brand-500), 0.5)"
        );
    }

    #[test]
    fn tokens_are_shared_across_schemes() {
        let output = emit(&light_dark()).unwrap();
        let names: Vec<&str> = output.colors.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["background", "brand-100", "brand-500"]);
        assert!(output.colors.iter().all(|(_, t)| t.is_opacity_aware()));
    }

    #[test]
    fn passthrough_colors_create_no_property() {
        let config = ThemeConfig::new().scheme(
            "light",
            Scheme::new()
                .with("accent", "var(--brand-accent)")
                .with("edge", "transparent")
                .with("ink", "#000"),
        );
        let output = emit(&config).unwrap();

        assert_eq!(
            output.colors.get("accent"),
            Some(&ColorToken::literal("var(--brand-accent)"))
        );
        assert_eq!(output.colors.get("edge"), Some(&ColorToken::literal("transparent")));
        assert_eq!(
            props(&output, "[data-theme=\"light\"]"),
            owned(&[("--ink", "0, 0, 0")])
        );
    }

    #[test]
    fn scheme_without_channel_colors_emits_no_rule() {
        let config =
            ThemeConfig::new().scheme("plain", Scheme::new().with("edge", "currentColor"));
        let output = emit(&config).unwrap();
        assert!(output.base.is_empty());
        assert_eq!(output.colors.len(), 1);
    }

    #[test]
    fn global_goes_to_root_first() {
        let config = light_dark().global(Scheme::new().with("white", "#fff"));
        let output = emit(&config).unwrap();
        assert_eq!(output.base.selectors().next(), Some(":root"));
        assert_eq!(props(&output, ":root"), owned(&[("--white", "255, 255, 255")]));
        assert_eq!(output.colors.iter().next().map(|(k, _)| k), Some("white"));
    }

    #[test]
    fn default_key_names_the_group() {
        let scale = ColorScale::from_base("#3b82f6").unwrap();
        let config = ThemeConfig::new().scheme("light", Scheme::new().with("primary", scale));
        let output = emit(&config).unwrap();
        let light = output.base.get("[data-theme=\"light\"]").unwrap();
        assert_eq!(light.len(), 13);
        assert_eq!(light["--primary"], "59, 130, 246");
        assert_eq!(light["--primary-foreground"], "12, 26, 49");
        assert!(output.colors.get("primary").is_some());
    }

    #[test]
    fn malformed_color_is_rejected() {
        let config = ThemeConfig::new().scheme(
            "dark",
            Scheme::new().with("brand", Scheme::new().with("500", "#3b82f")),
        );
        let (scheme, name, source) = match emit(&config).unwrap_err() {
            ThemeError::Color { scheme, name, source } => (scheme, name, source),
            other => panic!("expected a color error, got {other}"),
        };
        assert_eq!(scheme, "dark");
        assert_eq!(name, "brand-500");
        assert_eq!(
            source,
            ColorError::UnrecognizedColor {
                input: "#3b82f".into()
            }
        );
    }

    #[test]
    fn modern_css_colors_become_literal_tokens() {
        let colors = [
            "rgb(0 0 0 / 50%)",
            "#ffffff80",
            "rgb(var(--brand))",
            "RGB(1, 2, 3)",
            "#fff8",
        ];
        for color in colors {
            let config = ThemeConfig::new().scheme("light", Scheme::new().with("bg", color));
            let output = emit(&config).unwrap();
            assert_eq!(output.colors.get("bg"), Some(&ColorToken::literal(color)), "{color}");
            assert!(output.base.is_empty(), "{color}");
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_emission() {
        let config = ThemeConfig::new().scheme("two words", Scheme::new());
        assert!(matches!(emit(&config), Err(ThemeError::InvalidConfig(_))));
    }

    #[test]
    fn unusable_color_names_emit_nothing() {
        let config = ThemeConfig::new().scheme(
            "light",
            Scheme::new().with("bg color", "#fff").with("a:b", "#000"),
        );
        let Err(ThemeError::InvalidConfig(message)) = emit(&config) else {
            panic!("expected an invalid config");
        };
        assert!(message.contains("\"bg color\""), "{message}");
    }

    #[test]
    fn scheme_cannot_take_the_global_name() {
        let config = ThemeConfig::new()
            .global(Scheme::new().with("white", "#fff"))
            .scheme("global", Scheme::new().with("white", "#eee"));
        assert!(matches!(emit(&config), Err(ThemeError::InvalidConfig(_))));
    }
}
