//! Config field paths.

use std::fmt;

/// Dotted path of a config key, e.g. `sitemap.lastmod`.
///
/// Sections expose their keys as associated constants so diagnostics
/// never spell a path by hand:
///
/// ```ignore
/// impl SitemapConfig {
///     pub const LASTMOD: FieldPath = FieldPath::new("sitemap.lastmod");
/// }
///
/// diag.error(SitemapConfig::LASTMOD, "not a valid calendar date");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0)
    }
}
