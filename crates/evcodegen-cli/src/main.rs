//! evcodegen CLI
//!
//! Build-time generator for typed evdev event-code wrappers.
//!
//! ```text
//! evcodegen [OPTIONS] [HEADERS]... <DECL_OUT> <DEF_OUT>
//! ```
//!
//! The last two paths are the generated header and source file. Any paths
//! before them are the headers to scan; with none, the configured default
//! headers are used.

use anyhow::{bail, Context, Result};
use clap::Parser;
use evcodegen_core::{FamilyRegistry, GeneratorConfig};
use evcodegen_emit::{render, write_artifacts};
use evcodegen_scanner::{scan_headers, ScanStats};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "evcodegen")]
#[command(author, version, about = "Generate typed evdev event-code wrappers", long_about = None)]
struct Cli {
    /// Headers to scan, then the declaration and definition output files
    #[arg(value_name = "PATHS", num_args = 2.., required = true)]
    paths: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a JSON summary of the scan
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Split positional paths into (headers, declaration output, definition output)
    fn split_paths(&self) -> Result<(&[PathBuf], &Path, &Path)> {
        let (headers, outputs) = self.paths.split_at(self.paths.len().saturating_sub(2));
        match outputs {
            [decl, def] => Ok((headers, decl.as_path(), def.as_path())),
            _ => bail!("Expected declaration and definition output paths"),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    headers: &'a [PathBuf],
    declaration: &'a Path,
    definition: &'a Path,
    stats: &'a ScanStats,
    families: Vec<FamilyReport>,
}

#[derive(Serialize)]
struct FamilyReport {
    prefix: &'static str,
    type_name: &'static str,
    members: usize,
    aliases: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let (headers, decl_path, def_path) = cli.split_paths()?;
    let headers = if headers.is_empty() {
        info!("No headers given, using defaults");
        config.default_headers.as_slice()
    } else {
        headers
    };

    let (registry, stats) = scan_headers(headers, &config).context("Failed to scan headers")?;
    info!(
        "Scanned {} of {} headers: {} members, {} duplicates dropped",
        stats.files_scanned,
        headers.len(),
        stats.members(),
        stats.duplicates
    );

    let artifacts = render(&registry, &config.render, decl_path);
    write_artifacts(&artifacts, decl_path, def_path).context("Failed to write generated files")?;

    if let Some(report_path) = &cli.report {
        let report = Report {
            headers,
            declaration: decl_path,
            definition: def_path,
            stats: &stats,
            families: family_reports(&registry),
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
    }

    Ok(())
}

fn family_reports(registry: &FamilyRegistry) -> Vec<FamilyReport> {
    registry
        .iter()
        .map(|(prefix, family)| FamilyReport {
            prefix,
            type_name: family.type_name,
            members: family.members.len(),
            aliases: family.members.len() - family.map_entries().count(),
        })
        .collect()
}
