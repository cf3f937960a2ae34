//! The seam to the host styling framework.
//!
//! A host exposes two registration hooks: one for base-layer styles and one
//! for extending its color theme. Plugins push their output through
//! [`PluginApi`] and never see the host itself.

use tracing::debug;

use crate::config::ThemeConfig;
use crate::emit::emit;
use crate::error::ThemeError;
use crate::reset::{ResetOptions, reset};
use crate::styles::BaseStyles;
use crate::token::TokenTable;

/// Registration hooks provided by the host framework.
pub trait PluginApi {
    /// Add rules to the base layer.
    fn add_base(&mut self, styles: BaseStyles);

    /// Merge color tokens into the theme's `colors`.
    fn extend_colors(&mut self, colors: TokenTable);
}

/// Color schemes as custom properties plus the matching tokens.
#[derive(Debug, Clone)]
pub struct SchemesPlugin {
    config: ThemeConfig,
}

impl SchemesPlugin {
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when the config fails
    /// validation.
    pub fn new(config: ThemeConfig) -> Result<Self, ThemeError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Emit the schemes and hand both outputs to the host.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`emit`]; nothing is registered on failure.
    pub fn register(&self, api: &mut impl PluginApi) -> Result<(), ThemeError> {
        let output = emit(&self.config)?;
        debug!(
            rules = output.base.len(),
            tokens = output.colors.len(),
            "registering color schemes"
        );
        api.add_base(output.base);
        api.extend_colors(output.colors);
        Ok(())
    }
}

/// Element resets registered into the base layer.
#[derive(Debug, Clone, Default)]
pub struct ResetPlugin {
    options: ResetOptions,
}

impl ResetPlugin {
    #[must_use]
    pub const fn new(options: ResetOptions) -> Self {
        Self { options }
    }

    pub fn register(&self, api: &mut impl PluginApi) {
        api.add_base(reset(&self.options));
    }
}

/// A [`PluginApi`] that just accumulates what plugins register, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedTheme {
    pub base: BaseStyles,
    pub colors: TokenTable,
}

impl PluginApi for CollectedTheme {
    fn add_base(&mut self, styles: BaseStyles) {
        self.base.extend(styles);
    }

    fn extend_colors(&mut self, colors: TokenTable) {
        self.colors.extend(colors);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
