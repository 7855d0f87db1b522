//! Configuration schema definitions
//!
//! Defines the structure of theme configuration files using serde. Key names
//! match what the class generator expects (`content`, `theme.extend.fontFamily`,
//! `theme.extend.colors`, `plugins`, `safelist`) and must not change.

use super::safelist::SafelistEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root theme configuration record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    /// Glob patterns of source files scanned for class names
    #[serde(default)]
    pub content: Vec<String>,

    /// Theme tokens
    #[serde(default)]
    pub theme: ThemeSection,

    /// Plugin references
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Rules forcing inclusion of classes content scanning cannot find
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safelist: Vec<SafelistEntry>,
}

/// `theme` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeSection {
    /// Tokens added on top of the generator's defaults
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// `theme.extend` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeExtend {
    /// Font role name to fallback chain, most preferred first
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Color token name to color value
    /// Values are checked by the validator, not at parse time, so errors can
    /// name the offending token.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Shorthand for `theme.extend.colors`
    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.theme.extend.colors
    }

    /// Shorthand for `theme.extend.fontFamily`
    pub fn font_family(&self) -> &BTreeMap<String, Vec<String>> {
        &self.theme.extend.font_family
    }
}
