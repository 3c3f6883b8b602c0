//! `[sources]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sources]
//! routes = "src/App.tsx"           # Route table (<Route path="..."> declarations)
//! navigation = "src/siteConfig.ts" # Navigation config (navigation.main / footer, siteUrl)
//! ```
//!
//! Paths are relative to the project root. Both files are only read.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Route table source.
    pub routes: PathBuf,
    /// Navigation config source.
    pub navigation: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            routes: "src/App.tsx".into(),
            navigation: "src/siteConfig.ts".into(),
        }
    }
}
