//! `notice-checkr` — collect vendored license files into a NOTICE document and
//! enforce that every dependency carries an accepted license.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and load config ([`config::load_config`]).
//! 2. Find vendor roots under the scan path ([`detector::detect_vendor_roots`]).
//! 3. Require a license at every `<host>/<org>` level ([`locator::check_all_documented`]).
//! 4. Classify each license file and merge it with manifest metadata ([`aggregate`]).
//! 5. Write the NOTICE document or CSV export ([`report`]).
//! 6. Exit `1` if any license is outside the allow-list ([`gate`]); the report
//!    has already been written at that point.

mod aggregate;
mod cli;
mod config;
mod detector;
mod error;
mod gate;
mod license;
mod locator;
mod manifest;
mod models;
mod report;

use std::io::IsTerminal;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::load_config;
use detector::detect_vendor_roots;
use manifest::{read_overrides, Overrides};
use report::notice::NoticeHeader;

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(&cli.path, cli.config.as_deref())?;
    let allowed = config.policy.allowed_licenses()?;

    // Command-line lists replace the configured ones
    let excludes = if cli.excludes.is_empty() {
        config.scan.excludes
    } else {
        cli.excludes.clone()
    };
    let skip_notice = if cli.skip_notice.is_empty() {
        config.scan.skip_notice
    } else {
        cli.skip_notice.clone()
    };

    let vendor_roots = detect_vendor_roots(&cli.path, &excludes);
    tracing::info!(
        "Get the licenses available from {:?}",
        vendor_roots
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
    );

    locator::check_all_documented(&vendor_roots)?;

    let overrides = match &cli.beats_origin {
        Some(path) => read_overrides(path)?,
        None => Overrides::new(),
    };

    let dependencies = aggregate::gather_dependencies(&vendor_roots, &overrides)?;
    if dependencies.is_empty() {
        tracing::warn!("No license files found under {}", cli.path.display());
    }

    match &cli.csv {
        Some(csv_path) => {
            report::csv::render(csv_path, &dependencies)?;
            tracing::info!("Available at {}", csv_path.display());
        }
        None => {
            let header = NoticeHeader {
                product: &cli.beat,
                copyright: &cli.copyright,
                year: chrono::Local::now().year(),
            };
            report::notice::render(&cli.output, &header, &dependencies, &skip_notice)?;
            tracing::info!("Available at {}", cli.output.display());
        }
    }

    let violations = gate::violations(&dependencies, &allowed);
    report::terminal::render(&dependencies, &vendor_roots, &allowed, &violations, cli.quiet);

    gate::check_compliance(&dependencies, &allowed)?;

    Ok(())
}
