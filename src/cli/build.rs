//! Sitemap build: Discovery → Classification → Output.

use crate::{
    classify::classify_all,
    config::SiteConfig,
    debug,
    discover::{Discovery, SourceKind, discover, load_source},
    generator::{minify_xml, robots, sitemap::Sitemap, write_output},
    log,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of `<url>` entries.
    pub routes: usize,
    /// Origin used for every `<loc>`.
    pub origin: String,
    /// Written sitemap file; `None` when printed instead.
    pub sitemap: Option<PathBuf>,
    /// Written robots file, if enabled.
    pub robots: Option<PathBuf>,
    /// Sources that contributed nothing because they could not be used.
    pub degraded: Vec<SourceKind>,
}

/// Run the whole pipeline.
///
/// With `stdout` set, the document goes there and no file is written.
/// Nothing is written at all when discovery finds no routes.
pub fn run(config: &SiteConfig, stdout: Option<&mut dyn Write>) -> Result<BuildReport> {
    let routes_source = load_source(SourceKind::Routes, &config.sources.routes);
    let navigation_source = load_source(SourceKind::Navigation, &config.sources.navigation);
    let exclude = config.exclude_paths();

    let Discovery {
        routes,
        site_url,
        contributions,
        degraded,
    } = discover(
        &routes_source,
        &navigation_source,
        &config.sitemap.fallback,
        &exclude,
    )
    .context("Route discovery failed, no sitemap written")?;

    let summary: Vec<_> = contributions
        .iter()
        .map(|(origin, count)| format!("{} {}", origin.as_str(), count))
        .collect();
    log!("discover"; "{} ({})", plural_count(routes.len(), "route"), summary.join(", "));

    let origin = config.resolve_origin(site_url.as_deref());
    debug!("sitemap"; "origin {}", origin);

    let classified = classify_all(&routes, config.lastmod());
    for route in &classified {
        debug!("classify"; "{} -> {} {}", route.path, route.priority, route.changefreq);
    }

    let sitemap = Sitemap::build(&origin, &classified);
    let count = sitemap.len();
    let xml = sitemap.into_xml();
    let xml = minify_xml(xml.as_bytes(), config.sitemap.minify);

    let mut report = BuildReport {
        routes: count,
        origin,
        sitemap: None,
        robots: None,
        degraded,
    };

    if let Some(out) = stdout {
        out.write_all(&xml)
            .and_then(|()| out.flush())
            .context("Failed to write sitemap to stdout")?;
        if config.robots.enable {
            log!("warning"; "robots.txt not written: sitemap printed to stdout");
        }
        return Ok(report);
    }

    let sitemap_path = &config.sitemap.path;
    write_output(sitemap_path, &xml)
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
    log!(
        "sitemap";
        "{} -> {}",
        plural_count(count, "url"),
        config.root_relative(sitemap_path).display()
    );
    report.sitemap = Some(sitemap_path.clone());

    if config.robots.enable {
        let robots_path = &config.robots.path;
        let web_root = robots_path.parent().unwrap_or(config.root.as_path());
        let Some(url) = robots::sitemap_url(&report.origin, sitemap_path, web_root) else {
            log!(
                "warning";
                "robots.txt not written: sitemap {} is outside the web root {}",
                config.root_relative(sitemap_path).display(),
                config.root_relative(web_root).display()
            );
            return Ok(report);
        };
        let content = robots::render(&exclude, &config.robots.disallow, &url);

        write_output(robots_path, content.as_bytes())
            .with_context(|| format!("Failed to write robots.txt to {}", robots_path.display()))?;
        log!("robots"; "{}", config.root_relative(robots_path).display());
        report.robots = Some(robots_path.clone());
    }

    Ok(report)
}
