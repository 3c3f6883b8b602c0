//! Normalized route path type.
//!
//! Raw values come from route declarations and navigation `href`s. Only
//! statically resolvable, site-relative paths survive normalization.

use std::fmt;
use std::sync::Arc;

/// Marker for a route parameter segment (`/events/:id`).
const PARAM_MARKER: char = ':';
/// Marker for a catch-all route (`/files/*`, `*`).
const WILDCARD_MARKER: char = '*';

/// Canonical page path.
///
/// Invariants:
/// - Always starts with `/`
/// - No trailing slash, except the root path itself
/// - No query string or fragment
/// - No parameter or wildcard markers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Normalize a raw path. Returns `None` for anything that is not a
    /// statically resolvable site path.
    ///
    /// ```ignore
    /// RoutePath::parse("/about/")       -> Some("/about")
    /// RoutePath::parse("/contact#form") -> Some("/contact")
    /// RoutePath::parse("/events/:id")   -> None
    /// RoutePath::parse("https://x.com") -> None
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let path = path_part(raw);

        // Site-relative only: rejects absolute URLs, `mailto:`, bare anchors
        // and protocol-relative `//host` links.
        if !path.starts_with('/') || path.starts_with("//") {
            return None;
        }
        if is_dynamic(path) {
            return None;
        }

        let stripped = path.trim_end_matches('/');
        if stripped.is_empty() {
            return Some(Self::root());
        }
        Some(Self(Arc::from(stripped)))
    }

    /// The site root, `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        &*self.0 == "/"
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix appended to the site origin when building a full URL.
    ///
    /// The root contributes nothing, so `https://example.com` + `/` stays
    /// `https://example.com`.
    #[inline]
    pub fn url_suffix(&self) -> &str {
        if self.is_root() { "" } else { &self.0 }
    }

    /// Whether this path equals `prefix` or lies below it.
    ///
    /// `/admin` covers `/admin` and `/admin/users`, but not `/administer`.
    pub fn is_under(&self, prefix: &RoutePath) -> bool {
        if prefix.is_root() {
            return true;
        }
        match self.0.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// `raw` trimmed, without query string or fragment.
///
/// Markers inside a query or fragment (`/news?at=10:00`) are not route
/// parameters, so dynamic checks look at this part only.
pub fn path_part(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.split(['?', '#']).next().unwrap_or(trimmed)
}

/// Whether a declared path contains parameter or wildcard markers.
#[inline]
pub fn is_dynamic(path: &str) -> bool {
    path.contains(PARAM_MARKER) || path.contains(WILDCARD_MARKER)
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// tests
// ============================================================================
