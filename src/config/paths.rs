//! Config file discovery and directory resolution
//!
//! Resolves which configuration file to load and where user presets live.

use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file to load
pub const CONFIG_ENV: &str = "WINDCFG_CONFIG";

/// Environment variable overriding the user configuration directory
pub const CONFIG_DIR_ENV: &str = "WINDCFG_CONFIG_DIR";

/// File names searched for in the working directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "tailwind.config.yaml",
    "tailwind.config.yml",
    "tailwind.config.json",
];

/// User configuration directory
///
/// `WINDCFG_CONFIG_DIR` wins when set. Otherwise the platform's per-user
/// config location is used (`$XDG_CONFIG_HOME/windcfg` on Linux,
/// `~/Library/Application Support/windcfg` on macOS, `%APPDATA%\windcfg\config`
/// on Windows), or `.config/windcfg` when no home directory can be found.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "windcfg")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| Path::new(".config").join("windcfg"))
}

/// Get the user presets directory path
pub fn presets_dir() -> PathBuf {
    config_dir().join("presets")
}

/// Resolve the configuration file to load
///
/// Precedence order (highest to lowest):
/// 1. Explicit path (e.g. `--config`)
/// 2. WINDCFG_CONFIG environment variable
/// 3. First of [`CONFIG_FILE_NAMES`] that exists in `dir`
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            tracing::debug!("Using config path from {}: {}", CONFIG_ENV, path);
            return Some(PathBuf::from(path));
        }
    }

    find_config_file(dir)
}

/// Find the first known configuration file name in `dir`
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_dir_under_config_dir() {
        assert!(presets_dir().starts_with(config_dir()));
        assert!(presets_dir().ends_with("presets"));
    }

    #[test]
    fn test_config_dir_follows_platform() {
        if std::env::var_os(CONFIG_DIR_ENV).is_some() {
            return;
        }
        match directories::ProjectDirs::from("", "", "windcfg") {
            Some(dirs) => assert_eq!(config_dir(), dirs.config_dir()),
            None => assert_eq!(config_dir(), Path::new(".config").join("windcfg")),
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tailwind.config.yaml"), "content: []").unwrap();

        let explicit = PathBuf::from("custom.json");
        assert_eq!(
            resolve_config_path(Some(explicit.as_path()), dir.path()),
            Some(explicit)
        );
    }

    #[test]
    fn test_find_config_file_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_config_file(dir.path()), None);

        std::fs::write(dir.path().join("tailwind.config.json"), "{}").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join("tailwind.config.json"))
        );

        std::fs::write(dir.path().join("tailwind.config.yml"), "content: []").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join("tailwind.config.yml"))
        );
    }

    #[test]
    fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }
}
