//! Theme configuration for utility-class CSS generators
//!
//! This module provides the configuration record (fonts, colors, content globs,
//! plugins and safelist), its load-time validation, file loading in YAML or
//! JSON, and a set of embedded presets.

pub mod color;
pub mod loader;
pub mod paths;
pub mod presets;
pub mod resolved;
pub mod safelist;
pub mod schema;
pub mod validator;

pub use color::{ColorParseError, ColorValue, HexColor};
pub use loader::{ConfigFormat, ThemeConfigLoader};
pub use resolved::ResolvedTheme;
pub use safelist::{SafelistEntry, SafelistPattern, SafelistRule};
pub use schema::{ThemeConfig, ThemeExtend, ThemeSection};
pub use validator::ThemeValidator;

/// Theme configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("content[{index}]: glob pattern cannot be empty")]
    EmptyContentPattern { index: usize },

    #[error("content[{index}]: invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        index: usize,
        pattern: String,
        source: glob::PatternError,
    },

    #[error("plugins[{index}]: plugin reference cannot be empty")]
    EmptyPlugin { index: usize },

    #[error("theme.extend.fontFamily.{key}: fallback chain cannot be empty")]
    EmptyFontChain { key: String },

    #[error("theme.extend.fontFamily.{key}[{index}]: font name cannot be empty")]
    EmptyFontName { key: String, index: usize },

    #[error("theme.extend.colors.{key}: {source}")]
    InvalidColor {
        key: String,
        source: ColorParseError,
    },

    #[error("theme.extend.colors.{key}: reserved token must be '{expected}', got '{found}'")]
    ReservedColor {
        key: String,
        expected: String,
        found: String,
    },

    #[error("safelist[{index}]: class name cannot be empty")]
    EmptySafelistClass { index: usize },

    #[error("safelist[{index}]: variant cannot be empty")]
    EmptySafelistVariant { index: usize },

    #[error("safelist[{index}]: pattern cannot be empty")]
    EmptySafelistPattern { index: usize },

    #[error("safelist[{index}]: {reason}")]
    InvalidSafelistEntry { index: usize, reason: String },

    #[error("safelist[{index}]: invalid pattern '{pattern}': {source}")]
    InvalidSafelistPattern {
        index: usize,
        pattern: String,
        source: regex::Error,
    },

    #[error("Failed to parse theme configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize theme configuration: {0}")]
    Serialize(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for theme configuration operations
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Get a configuration value by key (dot notation)
///
/// Lists and maps are returned as YAML, font chains as a comma-separated list.
pub fn get_config_value(config: &ThemeConfig, key: &str) -> anyhow::Result<String> {
    match key {
        "content" => to_yaml(key, &config.content),
        "plugins" => to_yaml(key, &config.plugins),
        "safelist" => to_yaml(key, &config.safelist),
        "theme.extend.colors" => to_yaml(key, config.colors()),
        "theme.extend.fontFamily" => to_yaml(key, config.font_family()),
        _ => {
            if let Some(name) = key.strip_prefix("theme.extend.colors.") {
                return config
                    .colors()
                    .get(name)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Unknown color token: {}", name));
            }
            if let Some(name) = key.strip_prefix("theme.extend.fontFamily.") {
                return config
                    .font_family()
                    .get(name)
                    .map(|chain| chain.join(", "))
                    .ok_or_else(|| anyhow::anyhow!("Unknown font family: {}", name));
            }
            Err(anyhow::anyhow!("Unknown configuration key: {}", key))
        }
    }
}

fn to_yaml<T: serde::Serialize + ?Sized>(key: &str, value: &T) -> anyhow::Result<String> {
    serde_yaml::to_string(value).map_err(|e| anyhow::anyhow!("Failed to serialize {}: {}", key, e))
}
