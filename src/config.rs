//! Configuration management for the region-ruler command line tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Options file discovery
//! - Command-line option overrides

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::options::OptionSet;

/// Options file looked up in the current directory
pub const PROJECT_OPTIONS_FILE: &str = "region-ruler.toml";

/// Output format for reported diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for region-ruler
#[derive(Debug, Parser)]
#[command(name = "region-ruler")]
#[command(about = "Check #region names against a naming policy")]
#[command(version)]
pub struct Args {
    /// Source files to check
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// TOML file with region_ruler options
    #[arg(long, value_name = "FILE", help = "TOML file with region_ruler options")]
    pub config: Option<PathBuf>,

    /// Option overrides applied on top of the options file
    #[arg(
        short = 'o',
        long = "option",
        value_name = "KEY=VALUE",
        help = "Override an option (e.g. 'allow_empty=false')"
    )]
    pub options: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with a failure status when anything is reported
    #[arg(long)]
    pub deny_warnings: bool,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to analyze, each an independent unit
    pub files: Vec<PathBuf>,
    /// Options file that was loaded, if any
    pub options_file: Option<PathBuf>,
    /// Effective analysis options
    pub options: OptionSet,
    pub format: OutputFormat,
    pub deny_warnings: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let options_file = match args.config {
            Some(path) => Some(path),
            None => discover_options_file(Path::new(".")),
        };

        let mut options = match &options_file {
            Some(path) => OptionSet::load(path)?,
            None => OptionSet::new(),
        };

        let mut overrides = OptionSet::new();
        for assignment in &args.options {
            overrides
                .parse_assignment(assignment)
                .with_context(|| format!("Invalid --option '{}'", assignment))?;
        }
        options.merge(overrides);

        Ok(Config {
            files: args.files,
            options_file,
            options,
            format: args.format,
            deny_warnings: args.deny_warnings,
            log_level: args.log_level,
        })
    }
}

/// First existing options file: project directory, then user config dir
pub fn discover_options_file(project_dir: &Path) -> Option<PathBuf> {
    let mut candidates = vec![project_dir.join(PROJECT_OPTIONS_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("region-ruler").join("options.toml"));
    }

    candidates.into_iter().find(|path| path.is_file())
}
