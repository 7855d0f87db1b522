//! windcfg library
//!
//! Theme configuration records for utility-class CSS generators: schema,
//! load-time validation, YAML/JSON loading and embedded presets. The `windcfg`
//! binary is a thin CLI over this library.

pub mod config;

// Re-export commonly used types for convenience
pub use config::{
    ColorValue, ConfigFormat, HexColor, ResolvedTheme, SafelistEntry, SafelistPattern,
    SafelistRule, ThemeConfig, ThemeConfigLoader, ThemeError, ThemeResult, ThemeValidator,
};
