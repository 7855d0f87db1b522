//! Embedded configuration presets
//!
//! Presets are example instances of the theme configuration record, built into
//! the binary. Users can add their own presets to the presets directory; a user
//! preset shadows an embedded preset of the same name.

use super::loader::{ConfigFormat, ThemeConfigLoader};
use super::paths;
use super::resolved::ResolvedTheme;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// List of embedded preset names
pub const EMBEDDED_PRESETS: &[&str] = &["minimal", "tournament"];

/// Preset used by `init` when none is named
pub const DEFAULT_PRESET: &str = "minimal";

/// Get embedded preset YAML content by name
pub fn get_embedded_preset(name: &str) -> Option<&'static str> {
    match name {
        "minimal" => Some(include_str!("presets/minimal.yaml")),
        "tournament" => Some(include_str!("presets/tournament.yaml")),
        _ => None,
    }
}

/// Check if a preset name is an embedded preset
pub fn is_embedded_preset(name: &str) -> bool {
    EMBEDDED_PRESETS.contains(&name)
}

/// Load an embedded preset by name
pub fn load_embedded_preset(name: &str) -> Result<ResolvedTheme> {
    let yaml_content = get_embedded_preset(name)
        .ok_or_else(|| anyhow::anyhow!("Embedded preset '{}' not found", name))?;

    ThemeConfigLoader::load_str(yaml_content, ConfigFormat::Yaml)
        .with_context(|| format!("Failed to load embedded preset '{}'", name))
}

/// Find a user preset file by name
fn user_preset_path(name: &str) -> Option<PathBuf> {
    let dir = paths::presets_dir();
    ["yaml", "yml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", name, ext)))
        .find(|path| path.is_file())
}

/// Raw text and format of a preset
///
/// Resolution order:
/// 1. User presets directory ({config dir}/presets/{name}.yaml|yml|json)
/// 2. Embedded presets
pub fn preset_source(name: &str) -> Result<(String, ConfigFormat)> {
    if let Some(path) = user_preset_path(name) {
        tracing::debug!("Using user preset '{}' from {}", name, path.display());
        let format = ConfigFormat::from_path(&path)?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
        return Ok((text, format));
    }

    get_embedded_preset(name)
        .map(|text| (text.to_string(), ConfigFormat::Yaml))
        .ok_or_else(|| anyhow::anyhow!("Preset '{}' not found", name))
}

/// Load a preset by name, preferring user presets over embedded ones
pub fn load_preset(name: &str) -> Result<ResolvedTheme> {
    if let Some(path) = user_preset_path(name) {
        return ThemeConfigLoader::load_file(&path);
    }
    load_embedded_preset(name)
}

/// List available presets, user and embedded, sorted and deduplicated
pub fn list_presets() -> Vec<String> {
    let mut presets: Vec<String> = EMBEDDED_PRESETS.iter().map(|s| s.to_string()).collect();

    if let Ok(entries) = std::fs::read_dir(paths::presets_dir()) {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_config = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml") | Some("json")
            );
            if !is_config {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                presets.push(stem.to_string());
            }
        }
    }

    presets.sort();
    presets.dedup();
    presets
}
