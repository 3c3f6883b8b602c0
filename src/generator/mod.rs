//! Output generators.
//!
//! - **Sitemap**: `sitemap.xml` in the sitemaps.org 0.9 protocol
//! - **Robots**: optional `robots.txt` pointing crawlers at the sitemap
//!
//! Both take the classified routes and resolved origin; neither looks at
//! the sources again.

pub mod robots;
pub mod sitemap;

use crate::utils::fs::write_atomic;
use anyhow::Result;
use std::borrow::Cow;
use std::path::Path;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    let Ok(xml) = std::str::from_utf8(content) else {
        return Cow::Borrowed(content);
    };
    let minified = xml
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>();
    Cow::Owned(minified.into_bytes())
}

/// Write a generated file, replacing any previous version atomically.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    write_atomic(path, content)
}
