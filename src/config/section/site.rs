//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://vedicwisdomseries.com"   # Origin prepended to every path
//! ```
//!
//! When `url` is unset, the `siteUrl` value scanned from the navigation
//! config is used, then [`DEFAULT_SITE_URL`].

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;

/// Origin used when neither the config, the CLI nor the navigation source
/// declares one.
pub const DEFAULT_SITE_URL: &str = "https://vedicwisdomseries.com";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site origin, e.g. `https://example.com`.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && let Err(message) = check_origin(url)
        {
            diag.error_with_hint(
                Self::URL,
                message,
                "use an absolute http(s) URL such as \"https://example.com\"",
            );
        }
    }
}

/// Check that `url` can serve as a sitemap origin.
pub fn check_origin(url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url).map_err(|e| format!("invalid URL `{url}`: {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "unsupported scheme `{}` in `{url}`",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(format!("missing host in `{url}`"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(format!("query or fragment not allowed in `{url}`"));
    }
    Ok(())
}

/// Normalize an origin for URL composition: trimmed, no trailing slash.
pub fn normalize_origin(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
