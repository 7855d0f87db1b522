//! Theme configuration loading tests
//!
//! Exercises parsing, validation and serialization through the public API.

use insta::assert_snapshot;
use windcfg::config::presets;
use windcfg::{
    ColorValue, ConfigFormat, SafelistRule, ThemeConfigLoader, ThemeError, ThemeValidator,
};

const TOURNAMENT_JSON: &str = r##"{
  "content": ["./src/**/*.rs", "./index.html", "./src/**/*.html", "./src/**/*.css"],
  "theme": {
    "extend": {
      "fontFamily": {
        "bebas": ["Bebas Neue", "sans-serif"],
        "intrepid": ["Intrepid", "sans-serif"]
      },
      "colors": {
        "transparent": "transparent",
        "current": "currentColor",
        "highlight": "#ACEDFF",
        "nut": "#a07253",
        "dark": "#191923"
      }
    }
  },
  "plugins": [],
  "safelist": [
    { "pattern": "grid-cols-+" },
    { "pattern": "/grid-rows-+/" },
    { "pattern": "py-.+" }
  ]
}"##;

fn load_json(json: &str) -> Result<windcfg::ResolvedTheme, ThemeError> {
    ThemeConfigLoader::load_str(json, ConfigFormat::Json)
}

#[test]
fn test_hex_color_kept_verbatim() {
    let theme = load_json(TOURNAMENT_JSON).unwrap();
    let nut = theme.color("nut").unwrap();
    let hex = nut.as_hex().expect("nut should be a hex color");
    assert_eq!(hex.as_str(), "#a07253");
    assert_eq!(theme.config().colors()["nut"], "#a07253");
}

#[test]
fn test_transparent_is_reserved_not_hex() {
    let theme = load_json(TOURNAMENT_JSON).unwrap();
    let transparent = theme.color("transparent").unwrap();
    assert_eq!(transparent, &ColorValue::Transparent);
    assert!(transparent.as_hex().is_none());
    assert_eq!(theme.color("current"), Some(&ColorValue::Current));
}

#[test]
fn test_safelist_pattern_retained() {
    let theme = load_json(TOURNAMENT_JSON).unwrap();
    assert_eq!(theme.safelist().len(), 3);
    assert!(matches!(
        &theme.safelist()[0],
        SafelistRule::Pattern { source, .. } if source == "grid-cols-+"
    ));
    assert!(theme.is_safelisted("grid-cols-6"));
    assert!(theme.is_safelisted("grid-rows-2"));
}

#[test]
fn test_font_chain_order_preserved() {
    let theme = load_json(TOURNAMENT_JSON).unwrap();
    assert_eq!(
        theme.font_family("bebas").unwrap(),
        ["Bebas Neue".to_string(), "sans-serif".to_string()]
    );
}

#[test]
fn test_missing_hash_rejected() {
    let json = r#"{"content": ["./src/**/*.rs"], "theme": {"extend": {"colors": {"broken": "123456"}}}}"#;
    let err = load_json(json).unwrap_err();
    assert_snapshot!(err.to_string(), @"theme.extend.colors.broken: invalid hex color '123456': expected '#RRGGBB'");
}

#[test]
fn test_reserved_token_error_message() {
    let json = r##"{"theme": {"extend": {"colors": {"current": "#000000"}}}}"##;
    let err = load_json(json).unwrap_err();
    assert_snapshot!(err.to_string(), @"theme.extend.colors.current: reserved token must be 'currentColor', got '#000000'");
}

#[test]
fn test_empty_font_chain_error_message() {
    let json = r#"{"theme": {"extend": {"fontFamily": {"bebas": []}}}}"#;
    let err = load_json(json).unwrap_err();
    assert_snapshot!(err.to_string(), @"theme.extend.fontFamily.bebas: fallback chain cannot be empty");
}

#[test]
fn test_invalid_safelist_regex_names_entry() {
    let json = r#"{"safelist": [{"pattern": "py-.+"}, {"pattern": "grid-(cols"}]}"#;
    let err = load_json(json).unwrap_err();
    assert!(err.to_string().starts_with("safelist[1]: invalid pattern 'grid-(cols'"));
}

#[test]
fn test_every_color_matches_grammar() {
    let theme = presets::load_embedded_preset("tournament").unwrap();
    for (name, value) in theme.config().colors() {
        let is_hex = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        let is_reserved = matches!(value.as_str(), "transparent" | "current" | "currentColor");
        assert!(is_hex || is_reserved, "color '{}' = '{}'", name, value);
        assert_eq!(theme.color(name).unwrap().is_reserved(), is_reserved);
    }
}

#[test]
fn test_every_font_chain_non_empty() {
    let theme = presets::load_embedded_preset("tournament").unwrap();
    for (name, chain) in theme.font_families() {
        assert!(!chain.is_empty(), "font '{}' has no fallbacks", name);
        assert!(chain.iter().all(|font| !font.is_empty()));
    }
}

#[test]
fn test_roundtrip_yaml_and_json() {
    let original = load_json(TOURNAMENT_JSON).unwrap().into_config();

    for format in [ConfigFormat::Yaml, ConfigFormat::Json] {
        let text = ThemeConfigLoader::to_string(&original, format).unwrap();
        let reparsed = ThemeConfigLoader::load_str(&text, format).unwrap();
        assert_eq!(reparsed.config(), &original, "roundtrip through {:?}", format);
    }
}

#[test]
fn test_duplicate_color_keys_last_wins() {
    let json = r##"{"theme": {"extend": {"colors": {"nut": "#000000", "nut": "#a07253"}}}}"##;
    let theme = load_json(json).unwrap();
    assert_eq!(theme.colors().len(), 1);
    assert_eq!(theme.color("nut").unwrap().as_css(), "#a07253");
}

#[test]
fn test_duplicate_color_keys_last_wins_yaml() {
    let yaml = r##"
theme:
  extend:
    colors:
      nut: "#000000"
      nut: "#a07253"
"##;
    let theme = ThemeConfigLoader::load_str(yaml, ConfigFormat::Yaml).unwrap();
    assert_eq!(theme.colors().len(), 1);
    assert_eq!(theme.color("nut").unwrap().as_css(), "#a07253");
}

#[test]
fn test_misspelled_safelist_field_names_entry() {
    let yaml = r#"
safelist:
  - pattern: grid-cols-+
  - pattern: py-.+
    variant: [md]
"#;
    let err = ThemeConfigLoader::load_str(yaml, ConfigFormat::Yaml).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("safelist[1]: "), "{}", message);
    assert!(message.contains("unknown field `variant`"), "{}", message);
}

#[test]
fn test_empty_safelist_pattern_rejected() {
    let yaml = r#"
safelist:
  - pattern: "//"
"#;
    let err = ThemeConfigLoader::load_str(yaml, ConfigFormat::Yaml).unwrap_err();
    assert_snapshot!(err.to_string(), @"safelist[0]: pattern cannot be empty");
}

#[test]
fn test_unknown_key_rejected_at_parse() {
    let json = r#"{"content": [], "darkMode": "class"}"#;
    assert!(matches!(load_json(json), Err(ThemeError::Parse(_))));
}

#[test]
fn test_diagnose_reports_all_sections() {
    let json = r##"{
        "content": [""],
        "theme": {"extend": {
            "fontFamily": {"bebas": [""]},
            "colors": {"nut": "#a0725"}
        }},
        "safelist": [{"pattern": "("}]
    }"##;
    let config = ThemeConfigLoader::parse_str(json, ConfigFormat::Json).unwrap();
    let errors: Vec<String> = ThemeValidator::diagnose(&config)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(errors.len(), 4);
    assert!(errors[0].starts_with("content[0]"));
    assert!(errors[1].starts_with("theme.extend.fontFamily.bebas[0]"));
    assert!(errors[2].starts_with("theme.extend.colors.nut"));
    assert!(errors[3].starts_with("safelist[0]"));
}
