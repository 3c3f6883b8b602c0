//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! path = "public/sitemap.xml"   # Output file (relative to project root)
//! minify = false                # Strip indentation and newlines
//! lastmod = "2024-01-01"        # Pin <lastmod> (default: today, UTC)
//! fallback = ["/", "/about"]    # Pages always published
//! exclude = ["/admin"]          # Prefixes never published
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::RoutePath;
use crate::utils::date::DateUtc;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path for the sitemap file.
    pub path: PathBuf,

    /// Minify the XML output.
    pub minify: bool,

    /// Fixed `<lastmod>` date. Accepts a TOML date or a `"YYYY-MM-DD"` string.
    pub lastmod: Option<toml::Value>,

    /// Known pages published even when no source declares them.
    pub fallback: Vec<String>,

    /// Path prefixes kept out of the sitemap.
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "public/sitemap.xml".into(),
            minify: false,
            lastmod: None,
            fallback: default_fallback(),
            exclude: vec!["/admin".into(), "/content-manager".into()],
        }
    }
}

fn default_fallback() -> Vec<String> {
    [
        "/",
        "/about",
        "/teachings",
        "/teachings/discourses",
        "/teachings/chanting",
        "/teachings/teacher-training",
        "/teachings/lifestyle",
        "/schedule",
        "/testimonials",
        "/contact",
        "/gallery",
        "/news",
        "/privacy-policy",
        "/terms-of-service",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl SitemapConfig {
    pub const PATH: FieldPath = FieldPath::new("sitemap.path");
    pub const LASTMOD: FieldPath = FieldPath::new("sitemap.lastmod");
    pub const FALLBACK: FieldPath = FieldPath::new("sitemap.fallback");
    pub const EXCLUDE: FieldPath = FieldPath::new("sitemap.exclude");

    /// The configured `lastmod`, if it is a valid date.
    pub fn lastmod_date(&self) -> Option<DateUtc> {
        match self.lastmod.as_ref()? {
            toml::Value::String(s) => DateUtc::parse(s),
            toml::Value::Datetime(dt) => DateUtc::parse(&dt.to_string()),
            _ => None,
        }
    }

    /// Exclusion prefixes as normalized paths; invalid entries are dropped
    /// (and reported by `validate`).
    pub fn exclude_paths(&self) -> Vec<RoutePath> {
        self.exclude
            .iter()
            .filter_map(|p| RoutePath::parse(p))
            .collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.file_name().is_none() {
            diag.error(Self::PATH, "must name an output file");
        }

        if self.lastmod.is_some() && self.lastmod_date().is_none() {
            diag.error_with_hint(
                Self::LASTMOD,
                "not a valid calendar date",
                "use \"YYYY-MM-DD\", e.g. lastmod = \"2024-01-01\"",
            );
        }

        for entry in &self.fallback {
            if RoutePath::parse(entry).is_none() {
                diag.error_with_hint(
                    Self::FALLBACK,
                    format!("`{entry}` is not a static site path"),
                    "entries start with `/` and contain no `:` or `*`",
                );
            }
        }

        for entry in &self.exclude {
            if RoutePath::parse(entry).is_none() {
                diag.error_with_hint(
                    Self::EXCLUDE,
                    format!("`{entry}` is not a static site path"),
                    "entries start with `/` and contain no `:` or `*`",
                );
            }
        }
    }
}
