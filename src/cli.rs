//! Command line host: reads files, extracts their regions, runs the
//! analyzer per file and prints what it reports.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analyzer::RegionAnalyzer;
use crate::config::{Config, OutputFormat};
use crate::options::OptionSet;
use crate::parser::{SourceLocation, scan_regions};
use crate::validation::Diagnostic;

/// Flat record used for JSON output
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub id: &'static str,
    pub severity: &'static str,
    pub title: &'static str,
    pub message: String,
}

impl From<&Diagnostic<SourceLocation>> for ReportEntry {
    fn from(diagnostic: &Diagnostic<SourceLocation>) -> Self {
        Self {
            path: diagnostic.location.path.display().to_string(),
            line: diagnostic.location.line,
            column: diagnostic.location.column,
            id: diagnostic.descriptor.id,
            severity: diagnostic.descriptor.severity.as_str(),
            title: diagnostic.descriptor.title,
            message: diagnostic.message(),
        }
    }
}

/// Analyze one file's text as an independent unit
pub fn analyze_source(
    analyzer: &RegionAnalyzer,
    options: &OptionSet,
    path: &Path,
    text: &str,
) -> Vec<Diagnostic<SourceLocation>> {
    let regions = scan_regions(text)
        .into_iter()
        .map(|directive| {
            let location = directive.location(path);
            (directive.name, location)
        });
    analyzer.analyze_unit(options, regions)
}

/// Analyze every configured file
pub fn analyze_files(config: &Config) -> Result<Vec<Diagnostic<SourceLocation>>> {
    let analyzer = RegionAnalyzer::new();
    let mut diagnostics = Vec::new();

    for path in &config.files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let found = analyze_source(&analyzer, &config.options, path, &text);
        log::debug!("{}: {} diagnostics", path.display(), found.len());
        diagnostics.extend(found);
    }

    Ok(diagnostics)
}

/// Write diagnostics in the requested format
pub fn write_report(
    out: &mut impl Write,
    diagnostics: &[Diagnostic<SourceLocation>],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for diagnostic in diagnostics {
                writeln!(
                    out,
                    "{}: {}[{}]: {}",
                    diagnostic.location,
                    diagnostic.descriptor.severity.as_str(),
                    diagnostic.id(),
                    diagnostic.message()
                )?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<ReportEntry> = diagnostics.iter().map(ReportEntry::from).collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Entry point of the `region-ruler` binary; returns the exit status
pub fn run() -> Result<i32> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match &config.options_file {
        Some(path) => log::info!("Using options file {}", path.display()),
        None => log::info!("No options file found"),
    }
    if config.options.is_empty() {
        log::info!("No options set; using built-in defaults");
    }
    for (key, value) in config.options.iter() {
        log::debug!("Option {} = {}", key, value);
    }

    let diagnostics = analyze_files(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &diagnostics, config.format)?;

    if config.deny_warnings && !diagnostics.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}
