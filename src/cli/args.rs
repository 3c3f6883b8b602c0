//! Command-line interface definitions.

use crate::utils::date::DateUtc;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate sitemap.xml for a single-page application from its route table
/// and navigation config
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: routemap.toml, searched upward from cwd)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Route table source (relative to project root)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub routes: Option<PathBuf>,

    /// Navigation config source (relative to project root)
    #[arg(long = "nav", value_hint = clap::ValueHint::FilePath)]
    pub navigation: Option<PathBuf>,

    /// Sitemap output path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override the site origin used for every <loc>.
    ///
    /// Example: routemap --site-url "https://staging.example.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Fixed <lastmod> date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE")]
    pub lastmod: Option<DateUtc>,

    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Also write robots.txt
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,

    /// Print the sitemap to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_required() {
        let cli = Cli::try_parse_from(["routemap"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.minify.is_none());
        assert!(!cli.stdout);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "routemap",
            "-C",
            "site/routemap.toml",
            "--nav",
            "src/config.ts",
            "-o",
            "dist/sitemap.xml",
            "-U",
            "https://example.com",
            "--lastmod",
            "2024-01-31",
            "-m",
            "--robots",
            "false",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("site/routemap.toml")));
        assert_eq!(cli.navigation, Some(PathBuf::from("src/config.ts")));
        assert_eq!(cli.output, Some(PathBuf::from("dist/sitemap.xml")));
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.lastmod, Some(DateUtc::from_ymd(2024, 1, 31)));
        assert_eq!(cli.minify, Some(true));
        assert_eq!(cli.robots, Some(false));
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_lastmod_rejected() {
        assert!(Cli::try_parse_from(["routemap", "--lastmod", "2024-02-30"]).is_err());
    }
}
