//! routemap - build-time sitemap generator for single-page applications.

mod classify;
mod cli;
mod config;
mod discover;
mod generator;
mod logger;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SiteConfig;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);
    logger::set_stderr_only(cli.stdout);

    let config = SiteConfig::load(&cli)?;

    let mut stdout = std::io::stdout().lock();
    let target = cli.stdout.then_some(&mut stdout as &mut dyn Write);
    let report = cli::build::run(&config, target)?;

    let written = [&report.sitemap, &report.robots].into_iter().flatten().count();
    let degraded: Vec<_> = report.degraded.iter().map(ToString::to_string).collect();
    debug!(
        "build";
        "{} urls, {} files written, degraded: {}",
        report.routes,
        written,
        if degraded.is_empty() { "none".to_string() } else { degraded.join(", ") }
    );

    Ok(())
}
