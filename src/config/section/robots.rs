//! `[robots]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [robots]
//! enable = true                   # Write robots.txt next to the sitemap
//! path = "public/robots.txt"      # Output file (relative to project root)
//! disallow = ["/api/"]            # Extra Disallow lines (sitemap excludes are added too)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Enable robots.txt generation.
    pub enable: bool,
    /// Output path for the robots file.
    pub path: PathBuf,
    /// Additional `Disallow:` rules.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "public/robots.txt".into(),
            disallow: Vec::new(),
        }
    }
}

impl RobotsConfig {
    pub const PATH: FieldPath = FieldPath::new("robots.path");
    pub const DISALLOW: FieldPath = FieldPath::new("robots.disallow");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        if self.path.file_name().is_none() {
            diag.error(Self::PATH, "must name an output file");
        }
        for rule in &self.disallow {
            if !rule.starts_with('/') {
                diag.error_with_hint(
                    Self::DISALLOW,
                    format!("`{rule}` is not a path rule"),
                    "rules start with `/`, e.g. \"/api/\"",
                );
            }
        }
    }
}
