//! windcfg - load, validate and inspect utility-CSS theme configuration files
//!
//! Reads a `tailwind.config.yaml` (or `.yml`/`.json`) record of content globs,
//! font families, colors and safelist rules and checks it before a build
//! consumes it.

mod cli;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use windcfg::config;

/// windcfg - load, validate and inspect utility-CSS theme configuration files
#[derive(Parser, Debug)]
#[command(name = "windcfg")]
#[command(about = "Load, validate and inspect utility-CSS theme configuration files", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Configuration file (defaults to $WINDCFG_CONFIG, then tailwind.config.* in the working directory)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);

    cli::handle_command(args.command, args.config.as_deref())
}
