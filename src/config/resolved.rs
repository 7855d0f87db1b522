//! Validated, read-only view of a theme configuration

use super::color::ColorValue;
use super::safelist::SafelistRule;
use super::schema::ThemeConfig;
use std::collections::BTreeMap;

/// A theme configuration that passed validation
///
/// Built by [`ThemeValidator::validate`](super::ThemeValidator::validate).
/// Holds the record exactly as declared alongside typed colors and compiled
/// content and safelist patterns. There is no way to mutate it after load.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub(crate) config: ThemeConfig,
    pub(crate) content: Vec<glob::Pattern>,
    pub(crate) colors: BTreeMap<String, ColorValue>,
    pub(crate) safelist: Vec<SafelistRule>,
}

impl ResolvedTheme {
    /// The record as declared
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn into_config(self) -> ThemeConfig {
        self.config
    }

    /// Compiled content globs, in declaration order
    pub fn content_patterns(&self) -> &[glob::Pattern] {
        &self.content
    }

    pub fn color(&self, name: &str) -> Option<&ColorValue> {
        self.colors.get(name)
    }

    pub fn colors(&self) -> &BTreeMap<String, ColorValue> {
        &self.colors
    }

    /// Fallback chain for a font role, most preferred first
    pub fn font_family(&self, name: &str) -> Option<&[String]> {
        self.config.font_family().get(name).map(Vec::as_slice)
    }

    pub fn font_families(&self) -> &BTreeMap<String, Vec<String>> {
        self.config.font_family()
    }

    pub fn safelist(&self) -> &[SafelistRule] {
        &self.safelist
    }

    /// Whether any safelist rule forces inclusion of `class_name`
    pub fn is_safelisted(&self, class_name: &str) -> bool {
        self.safelist.iter().any(|rule| rule.matches(class_name))
    }
}
