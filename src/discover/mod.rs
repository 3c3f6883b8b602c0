//! Route discovery.
//!
//! Collects every statically resolvable page path the site exposes:
//!
//! ```text
//! route table ──► scan_routes ─────┐
//!                                  ├─► normalize ─► exclude ─► RouteSet
//! nav config ──► scan_navigation ──┤
//!                                  │
//! fallback list ───────────────────┘
//! ```
//!
//! Each source is loaded and scanned independently. A source that cannot be
//! read or scanned is *degraded*: it logs a warning and contributes nothing,
//! and the run carries on with the rest. Only an empty union is fatal.

mod nav;
mod routes;

pub use nav::scan_navigation;
pub use routes::scan_routes;

use crate::route::{RoutePath, RouteSet, is_dynamic, path_part};
use crate::utils::plural_count;
use crate::{debug, log};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// sources
// ============================================================================

/// Which input file a source text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Application route table (`<Route path=...>`).
    Routes,
    /// Navigation config (`navigation.main`, `navigation.footer`, `siteUrl`).
    Navigation,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Routes => "route table",
            Self::Navigation => "navigation config",
        })
    }
}

/// Why a source contributed nothing.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read `{}`", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed `{block}` block: {reason}")]
    Malformed {
        block: &'static str,
        reason: &'static str,
    },
}

/// Raw text of one input, or the reason it could not be read.
#[derive(Debug)]
pub struct SourceText {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub content: Result<String, SourceError>,
}

impl SourceText {
    /// In-memory source.
    #[cfg(test)]
    pub fn from_text(kind: SourceKind, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: Ok(text.into()),
        }
    }
}

/// Read a source file. Never fails: read errors are kept in `content`.
pub fn load_source(kind: SourceKind, path: &Path) -> SourceText {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    });
    debug!("discover"; "loading {} from {}", kind, path.display());

    SourceText {
        kind,
        path: path.to_path_buf(),
        content,
    }
}

// ============================================================================
// discovery
// ============================================================================

/// Where a discovered path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Routes,
    Navigation,
    Footer,
    Fallback,
}

impl Origin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Routes => "routes",
            Self::Navigation => "navigation",
            Self::Footer => "footer",
            Self::Fallback => "fallback",
        }
    }
}

/// Fatal discovery outcome.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error(
        "no routes discovered: sources were empty or unreadable and the fallback list is empty"
    )]
    Empty,
}

/// Result of a discovery pass.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Deduplicated, sorted paths.
    pub routes: RouteSet,
    /// `siteUrl` scanned from the navigation config.
    pub site_url: Option<String>,
    /// Accepted paths per origin, before deduplication.
    pub contributions: Vec<(Origin, usize)>,
    /// Sources that contributed nothing because they failed.
    pub degraded: Vec<SourceKind>,
}

/// Union all sources into one route set.
///
/// `exclude` prefixes remove a path and everything below it. Paths with
/// parameter or wildcard markers never make it in.
pub fn discover(
    routes: &SourceText,
    navigation: &SourceText,
    fallback: &[String],
    exclude: &[RoutePath],
) -> Result<Discovery, DiscoverError> {
    let mut collector = Collector::new(exclude);

    match &routes.content {
        Ok(text) => collector.add(Origin::Routes, scan_routes(text)),
        Err(err) => collector.degrade(routes, err),
    }

    match &navigation.content {
        Ok(text) => match scan_navigation(text) {
            Ok(links) => {
                collector.discovery.site_url = links.site_url;
                collector.add(Origin::Navigation, links.main);
                collector.add(Origin::Footer, links.footer);
            }
            Err(err) => collector.degrade(navigation, &err),
        },
        Err(err) => collector.degrade(navigation, err),
    }

    collector.add(Origin::Fallback, fallback.iter().cloned());
    collector.finish()
}

/// Accumulates contributions while applying normalization and exclusion.
struct Collector<'a> {
    exclude: &'a [RoutePath],
    discovery: Discovery,
}

impl<'a> Collector<'a> {
    fn new(exclude: &'a [RoutePath]) -> Self {
        Self {
            exclude,
            discovery: Discovery::default(),
        }
    }

    fn add(&mut self, origin: Origin, raw_paths: impl IntoIterator<Item = String>) {
        let mut accepted = 0;

        for raw in raw_paths {
            let Some(path) = RoutePath::parse(&raw) else {
                let base = path_part(&raw);
                if base.starts_with(['/', '*']) && is_dynamic(base) {
                    debug!("discover"; "skipping dynamic route `{}`", raw);
                } else {
                    debug!("discover"; "skipping non-page link `{}`", raw);
                }
                continue;
            };
            if let Some(prefix) = self.exclude.iter().find(|prefix| path.is_under(prefix)) {
                debug!("discover"; "excluding `{}` (under `{}`)", path, prefix);
                continue;
            }

            accepted += 1;
            self.discovery.routes.insert(path);
        }

        debug!("discover"; "{}: {}", origin.as_str(), plural_count(accepted, "path"));
        self.discovery.contributions.push((origin, accepted));
    }

    fn degrade(&mut self, source: &SourceText, err: &SourceError) {
        log!(
            "warning";
            "{} `{}` skipped: {}", source.kind, source.path.display(), error_chain(err)
        );
        self.discovery.degraded.push(source.kind);
    }

    fn finish(self) -> Result<Discovery, DiscoverError> {
        if self.discovery.routes.is_empty() {
            return Err(DiscoverError::Empty);
        }
        Ok(self.discovery)
    }
}

/// Render an error with its source chain on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// ============================================================================
// tests
// ============================================================================
