//! Theme configuration validation
//!
//! Checks a parsed configuration against the load-time policy and builds the
//! typed [`ResolvedTheme`]. Errors name the offending key path.

use super::color::{CURRENT, ColorValue, TRANSPARENT};
use super::resolved::ResolvedTheme;
use super::safelist::{self, SafelistEntry, SafelistPattern, SafelistRule};
use super::schema::ThemeConfig;
use super::{ThemeError, ThemeResult};
use std::collections::BTreeMap;

/// Theme configuration validator
pub struct ThemeValidator;

impl ThemeValidator {
    /// Validate a configuration, failing on the first violation
    ///
    /// Sections are checked in order: content, plugins, fontFamily, colors,
    /// safelist.
    pub fn validate(config: ThemeConfig) -> ThemeResult<ResolvedTheme> {
        let mut errors = Vec::new();
        let (content, colors, safelist) = Self::resolve(&config, &mut errors);

        if let Some(first) = errors.into_iter().next() {
            return Err(first);
        }

        tracing::debug!(
            "Validated theme: {} content pattern(s), {} font role(s), {} color(s), {} safelist rule(s)",
            content.len(),
            config.font_family().len(),
            colors.len(),
            safelist.len()
        );

        Ok(ResolvedTheme {
            config,
            content,
            colors,
            safelist,
        })
    }

    /// Collect every violation instead of stopping at the first
    pub fn diagnose(config: &ThemeConfig) -> Vec<ThemeError> {
        let mut errors = Vec::new();
        let _ = Self::resolve(config, &mut errors);
        errors
    }

    fn resolve(
        config: &ThemeConfig,
        errors: &mut Vec<ThemeError>,
    ) -> (
        Vec<glob::Pattern>,
        BTreeMap<String, ColorValue>,
        Vec<SafelistRule>,
    ) {
        let content = Self::validate_content(&config.content, errors);
        Self::validate_plugins(&config.plugins, errors);
        Self::validate_fonts(config.font_family(), errors);
        let colors = Self::validate_colors(config.colors(), errors);
        let safelist = Self::validate_safelist(&config.safelist, errors);
        (content, colors, safelist)
    }

    /// Validate content glob patterns
    fn validate_content(content: &[String], errors: &mut Vec<ThemeError>) -> Vec<glob::Pattern> {
        if content.is_empty() {
            tracing::warn!("content is empty, no source files will be scanned");
        }

        let mut patterns = Vec::with_capacity(content.len());
        for (index, pattern) in content.iter().enumerate() {
            if pattern.trim().is_empty() {
                errors.push(ThemeError::EmptyContentPattern { index });
                continue;
            }

            match glob::Pattern::new(pattern) {
                Ok(compiled) => patterns.push(compiled),
                Err(source) => errors.push(ThemeError::InvalidGlob {
                    index,
                    pattern: pattern.clone(),
                    source,
                }),
            }
        }
        patterns
    }

    fn validate_plugins(plugins: &[String], errors: &mut Vec<ThemeError>) {
        for (index, plugin) in plugins.iter().enumerate() {
            if plugin.trim().is_empty() {
                errors.push(ThemeError::EmptyPlugin { index });
            }
        }
    }

    /// Validate font fallback chains
    fn validate_fonts(fonts: &BTreeMap<String, Vec<String>>, errors: &mut Vec<ThemeError>) {
        for (key, chain) in fonts {
            if chain.is_empty() {
                errors.push(ThemeError::EmptyFontChain { key: key.clone() });
                continue;
            }

            for (index, name) in chain.iter().enumerate() {
                if name.trim().is_empty() {
                    errors.push(ThemeError::EmptyFontName {
                        key: key.clone(),
                        index,
                    });
                }
            }
        }
    }

    /// Validate color tokens, including the reserved `transparent` and `current` keys
    fn validate_colors(
        colors: &BTreeMap<String, String>,
        errors: &mut Vec<ThemeError>,
    ) -> BTreeMap<String, ColorValue> {
        let mut parsed = BTreeMap::new();

        for (key, value) in colors {
            let expected = match key.as_str() {
                TRANSPARENT => Some(ColorValue::Transparent),
                CURRENT => Some(ColorValue::Current),
                _ => None,
            };

            if let Some(expected) = expected {
                if value.parse::<ColorValue>().ok().as_ref() == Some(&expected) {
                    parsed.insert(key.clone(), expected);
                } else {
                    errors.push(ThemeError::ReservedColor {
                        key: key.clone(),
                        expected: expected.as_css().to_string(),
                        found: value.clone(),
                    });
                }
                continue;
            }

            match value.parse::<ColorValue>() {
                Ok(color) => {
                    parsed.insert(key.clone(), color);
                }
                Err(source) => errors.push(ThemeError::InvalidColor {
                    key: key.clone(),
                    source,
                }),
            }
        }

        parsed
    }

    /// Validate and compile safelist entries
    fn validate_safelist(
        safelist: &[SafelistEntry],
        errors: &mut Vec<ThemeError>,
    ) -> Vec<SafelistRule> {
        let mut rules = Vec::with_capacity(safelist.len());

        for (index, entry) in safelist.iter().enumerate() {
            match entry {
                SafelistEntry::Class(name) => {
                    if name.trim().is_empty() {
                        errors.push(ThemeError::EmptySafelistClass { index });
                        continue;
                    }
                    rules.push(SafelistRule::Class(name.clone()));
                }
                SafelistEntry::Pattern(pattern) => {
                    // An empty regex matches every class name
                    if safelist::pattern_body(&pattern.pattern).trim().is_empty() {
                        errors.push(ThemeError::EmptySafelistPattern { index });
                        continue;
                    }

                    if pattern.variants.iter().any(|v| v.trim().is_empty()) {
                        errors.push(ThemeError::EmptySafelistVariant { index });
                        continue;
                    }

                    match SafelistRule::compile(pattern) {
                        Ok(rule) => rules.push(rule),
                        Err(source) => errors.push(ThemeError::InvalidSafelistPattern {
                            index,
                            pattern: pattern.pattern.clone(),
                            source,
                        }),
                    }
                }
                SafelistEntry::Unrecognized(value) => {
                    errors.push(ThemeError::InvalidSafelistEntry {
                        index,
                        reason: Self::describe_unrecognized(value),
                    });
                }
            }
        }

        rules
    }

    /// Explain why a safelist entry is neither a class name nor a pattern object
    fn describe_unrecognized(value: &serde_json::Value) -> String {
        if value.is_object() {
            // Re-run the pattern deserializer for its field-level message
            match serde_json::from_value::<SafelistPattern>(value.clone()) {
                Err(e) => e.to_string(),
                Ok(_) => "unexpected pattern object".to_string(),
            }
        } else {
            format!("expected a class name or a pattern object, got {}", value)
        }
    }
}
