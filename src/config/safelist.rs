//! Safelist rules
//!
//! Safelist entries force the class generator to emit classes that content
//! scanning cannot see, such as class names assembled at runtime.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A safelist entry as declared in the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SafelistEntry {
    /// A single class name, always emitted
    Class(String),

    /// A regular expression matched against candidate class names
    Pattern(SafelistPattern),

    /// Anything else; kept so the validator can name the offending entry
    Unrecognized(serde_json::Value),
}

/// Pattern form of a safelist entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SafelistPattern {
    /// Regular expression, bare (`grid-cols-+`) or slash-delimited (`/grid-cols-+/`)
    pub pattern: String,

    /// Variants (e.g. `hover`, `md`) generated for every match
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl SafelistPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            variants: Vec::new(),
        }
    }
}

/// A validated safelist entry
#[derive(Debug, Clone)]
pub enum SafelistRule {
    Class(String),
    Pattern {
        source: String,
        regex: Regex,
        variants: Vec<String>,
    },
}

impl SafelistRule {
    /// Compile a pattern entry
    pub fn compile(pattern: &SafelistPattern) -> Result<Self, regex::Error> {
        let regex = Regex::new(&to_regex_syntax(&pattern.pattern))?;
        Ok(SafelistRule::Pattern {
            source: pattern.pattern.clone(),
            regex,
            variants: pattern.variants.clone(),
        })
    }

    /// Whether this rule forces inclusion of `class_name`
    ///
    /// Patterns are searched, not anchored, so `grid-cols-+` matches `grid-cols-4`.
    pub fn matches(&self, class_name: &str) -> bool {
        match self {
            SafelistRule::Class(name) => name == class_name,
            SafelistRule::Pattern { regex, .. } => regex.is_match(class_name),
        }
    }

    pub fn variants(&self) -> &[String] {
        match self {
            SafelistRule::Class(_) => &[],
            SafelistRule::Pattern { variants, .. } => variants,
        }
    }

    /// The rule as declared
    pub fn source(&self) -> &str {
        match self {
            SafelistRule::Class(name) => name,
            SafelistRule::Pattern { source, .. } => source,
        }
    }
}

/// Split a `/body/flags` literal into body and flags
///
/// Returns `None` when `pattern` is not such a literal.
fn split_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    flags
        .chars()
        .all(|c| "gimsuy".contains(c))
        .then_some((body, flags))
}

/// The regular expression part of a declared pattern, without delimiters or flags
pub fn pattern_body(pattern: &str) -> &str {
    split_literal(pattern).map_or(pattern, |(body, _)| body)
}

/// Convert a declared pattern into `regex` syntax
///
/// `/body/flags` literals lose their delimiters; `i`, `m` and `s` become inline
/// flags, other flags have no meaning for a single match test and are dropped.
/// Anything else is used as-is.
pub fn to_regex_syntax(pattern: &str) -> String {
    let Some((body, flags)) = split_literal(pattern) else {
        return pattern.to_string();
    };

    let inline: String = flags.chars().filter(|c| "ims".contains(*c)).collect();
    if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{}){}", inline, body)
    }
}
