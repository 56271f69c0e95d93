//! Handles settings for the binary.
//!
//! Sources, later ones win: the optional settings file (`--config`, default
//! `config/billsplit.toml`), `BILLSPLIT_*` environment variables, then
//! command-line flags.
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/billsplit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level for this binary and the engine.
    pub level: String,
    /// Print the report on a single line.
    pub compact: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "billsplit")]
#[command(about = "Split a shared bill and list the transfers that settle it")]
pub struct Args {
    /// Bill document (TOML, JSON or YAML).
    pub bill: PathBuf,
    /// Optional settings file path.
    #[arg(long)]
    pub config: Option<String>,
    /// Override log level (e.g. `debug`).
    #[arg(long)]
    pub level: Option<String>,
    /// Print the report on a single line.
    #[arg(long)]
    pub compact: bool,
    /// Split equally regardless of the entered contributions.
    #[arg(long)]
    pub equal_split: bool,
}

/// Everything a run needs.
#[derive(Debug)]
pub struct RunConfig {
    pub bill: PathBuf,
    pub force_equal_split: bool,
    pub settings: Settings,
}

pub fn load() -> Result<RunConfig> {
    load_from(Args::parse())
}

pub fn load_from(args: Args) -> Result<RunConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BILLSPLIT"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(level) = args.level {
        settings.level = level;
    }
    if args.compact {
        settings.compact = true;
    }

    Ok(RunConfig {
        bill: args.bill,
        force_equal_split: args.equal_split,
        settings,
    })
}
