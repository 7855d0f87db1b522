//! Configuration loading and saving
//!
//! Reads theme configuration files in YAML or JSON, validates them and writes
//! them back out.

use super::paths;
use super::resolved::ResolvedTheme;
use super::schema::ThemeConfig;
use super::validator::ThemeValidator;
use super::{ThemeError, ThemeResult};
use anyhow::{Context, Result};
use std::path::Path;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    #[value(alias = "yml")]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension (`.yaml`, `.yml`, `.json`)
    pub fn from_path(path: &Path) -> ThemeResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(ThemeError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Theme configuration loader
pub struct ThemeConfigLoader;

impl ThemeConfigLoader {
    /// Parse configuration text without validating it
    pub fn parse_str(contents: &str, format: ConfigFormat) -> ThemeResult<ThemeConfig> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| ThemeError::Parse(e.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(|e| ThemeError::Parse(e.to_string()))
            }
        }
    }

    /// Parse and validate configuration text
    pub fn load_str(contents: &str, format: ConfigFormat) -> ThemeResult<ResolvedTheme> {
        let config = Self::parse_str(contents, format)?;
        ThemeValidator::validate(config)
    }

    /// Load and validate a configuration file
    pub fn load_file(path: &Path) -> Result<ResolvedTheme> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        tracing::debug!("Loading theme configuration from: {}", path.display());

        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let resolved = Self::load_str(&contents, format)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::info!(
            "Loaded theme configuration with {} color(s) from {}",
            resolved.colors().len(),
            path.display()
        );
        Ok(resolved)
    }

    /// Load and parse a configuration file without validating it
    pub fn parse_file(path: &Path) -> Result<ThemeConfig> {
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse_str(&contents, format)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Serialize a configuration
    pub fn to_string(config: &ThemeConfig, format: ConfigFormat) -> ThemeResult<String> {
        match format {
            ConfigFormat::Yaml => {
                serde_yaml::to_string(config).map_err(|e| ThemeError::Serialize(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| ThemeError::Serialize(e.to_string())),
        }
    }

    /// Save configuration to a file, in the format its extension names
    pub fn save(config: &ThemeConfig, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                paths::ensure_dir(parent)?;
            }
        }

        let format = ConfigFormat::from_path(path)?;
        let text = Self::to_string(config, format).context("Failed to serialize configuration")?;

        std::fs::write(path, text)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Saved theme configuration to: {}", path.display());
        Ok(())
    }
}
