//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::{
    ConfigFormat, ResolvedTheme, ThemeConfigLoader, ThemeValidator, get_config_value, paths,
    presets,
};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration and report every problem found
    Validate,
    /// Print the configuration
    Show {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = ConfigFormat::Yaml)]
        format: ConfigFormat,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., "content", "theme.extend.colors.nut")
        key: String,
    },
    /// List color tokens
    Colors,
    /// List font fallback chains
    Fonts,
    /// Check whether the safelist forces inclusion of a class name
    CheckClass {
        /// Class name (e.g., "grid-cols-3")
        class: String,
    },
    /// Write a preset as a new configuration file
    Init {
        /// Preset name (see `presets`)
        #[arg(long, short = 'p')]
        preset: Option<String>,
        /// Output path (defaults to tailwind.config.yaml)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List available presets
    Presets,
    /// Show the configuration file path
    Path,
    /// Show version information
    Version,
}

/// Handle a subcommand
///
/// `config` is the `--config` flag, if given.
pub fn handle_command(cmd: Command, config: Option<&Path>) -> Result<()> {
    tracing::debug!("Handling command: {:?}", cmd);

    match cmd {
        Command::Validate => validate(config),
        Command::Show { format } => {
            let theme = load(config)?;
            let text = ThemeConfigLoader::to_string(theme.config(), format)
                .context("Failed to serialize configuration")?;
            print!("{}", text);
            Ok(())
        }
        Command::Get { key } => {
            let theme = load(config)?;
            let value = get_config_value(theme.config(), &key)?;
            println!("{}", value.trim_end());
            Ok(())
        }
        Command::Colors => {
            let theme = load(config)?;
            let width = theme.colors().keys().map(String::len).max().unwrap_or(0);
            for (name, color) in theme.colors() {
                match color.as_hex() {
                    Some(hex) => {
                        let [r, g, b] = hex.rgb();
                        println!("{:<width$}  {}  rgb({}, {}, {})", name, hex, r, g, b);
                    }
                    None => println!("{:<width$}  {}", name, color),
                }
            }
            Ok(())
        }
        Command::Fonts => {
            let theme = load(config)?;
            for (name, chain) in theme.font_families() {
                println!("{}: {}", name, chain.join(", "));
            }
            Ok(())
        }
        Command::CheckClass { class } => {
            let theme = load(config)?;
            match theme.safelist().iter().find(|rule| rule.matches(&class)) {
                Some(rule) => println!("{} is safelisted by '{}'", class, rule.source()),
                None => {
                    println!("{} is not safelisted", class);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Command::Init {
            preset,
            output,
            force,
        } => init(preset.as_deref(), output, force),
        Command::Presets => {
            println!("Available presets:");
            for preset in presets::list_presets() {
                println!("  - {}", preset);
            }
            Ok(())
        }
        Command::Path => {
            let path = config_path(config)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Version => {
            super::display_version();
            Ok(())
        }
    }
}

/// Resolve the configuration path from the flag, environment or working directory
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    paths::resolve_config_path(explicit, &cwd).ok_or_else(|| {
        anyhow::anyhow!(
            "No configuration file found in {} (looked for {})",
            cwd.display(),
            paths::CONFIG_FILE_NAMES.join(", ")
        )
    })
}

fn load(explicit: Option<&Path>) -> Result<ResolvedTheme> {
    let path = config_path(explicit)?;
    ThemeConfigLoader::load_file(&path).context("Failed to load configuration")
}

fn validate(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;
    let config = match ThemeConfigLoader::parse_file(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    };

    let errors = ThemeValidator::diagnose(&config);
    if errors.is_empty() {
        println!("Configuration is valid: {}", path.display());
        return Ok(());
    }

    eprintln!(
        "Configuration validation failed with {} error(s): {}",
        errors.len(),
        path.display()
    );
    for error in &errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(1);
}

fn init(preset: Option<&str>, output: Option<PathBuf>, force: bool) -> Result<()> {
    let name = preset.unwrap_or(presets::DEFAULT_PRESET);
    let output = output.unwrap_or_else(|| PathBuf::from(paths::CONFIG_FILE_NAMES[0]));

    if output.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists (use --force to overwrite)",
            output.display()
        ));
    }

    let (text, source_format) = presets::preset_source(name)?;
    let target_format = ConfigFormat::from_path(&output)?;

    // Validate before writing; the parsed record is only re-serialized when
    // the formats differ, so comments in YAML presets survive.
    let config = ThemeConfigLoader::parse_str(&text, source_format)
        .with_context(|| format!("Failed to parse preset '{}'", name))?;
    let config = ThemeValidator::validate(config)
        .with_context(|| format!("Preset '{}' is invalid", name))?
        .into_config();

    if source_format == target_format {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                paths::ensure_dir(parent)?;
            }
        }
        std::fs::write(&output, text)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;
    } else {
        ThemeConfigLoader::save(&config, &output)?;
    }

    println!("Wrote preset '{}' to {}", name, output.display());
    Ok(())
}
