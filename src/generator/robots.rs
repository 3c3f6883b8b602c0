//! robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Disallow: /admin
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```

use crate::route::RoutePath;
use std::path::{Component, Path};

/// Render robots.txt.
///
/// `excluded` prefixes become `Disallow` rules (with `extra` rules after
/// them, duplicates dropped). `sitemap_url` is the absolute sitemap URL.
pub fn render(excluded: &[RoutePath], extra: &[String], sitemap_url: &str) -> String {
    let mut rules: Vec<&str> = Vec::with_capacity(excluded.len() + extra.len());
    for rule in excluded
        .iter()
        .map(RoutePath::as_str)
        .chain(extra.iter().map(String::as_str))
    {
        if !rules.contains(&rule) {
            rules.push(rule);
        }
    }

    let mut out = String::from("User-agent: *\nAllow: /\n");
    for rule in rules {
        out.push_str("Disallow: ");
        out.push_str(rule);
        out.push('\n');
    }
    out.push_str("\nSitemap: ");
    out.push_str(sitemap_url);
    out.push('\n');
    out
}

/// Absolute URL of the sitemap file.
///
/// The robots file sits at the web root, so the sitemap URL path is the
/// sitemap location relative to `web_root`. `None` if the sitemap is not
/// inside `web_root` (no URL reaches it) or the path is not UTF-8.
pub fn sitemap_url(origin: &str, sitemap: &Path, web_root: &Path) -> Option<String> {
    let relative = sitemap.strip_prefix(web_root).ok()?;

    let mut url = origin.trim_end_matches('/').to_string();
    let mut segments = 0;
    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return None;
        };
        url.push('/');
        url.push_str(segment.to_str()?);
        segments += 1;
    }

    (segments > 0).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<RoutePath> {
        raw.iter().filter_map(|p| RoutePath::parse(p)).collect()
    }

    #[test]
    fn test_render_default_rules() {
        let robots = render(
            &paths(&["/admin", "/content-manager"]),
            &[],
            "https://example.com/sitemap.xml",
        );
        assert_eq!(
            robots,
            "User-agent: *\nAllow: /\nDisallow: /admin\nDisallow: /content-manager\n\nSitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_render_extra_rules_deduplicated() {
        let robots = render(
            &paths(&["/admin"]),
            &["/api/".into(), "/admin".into()],
            "https://example.com/sitemap.xml",
        );
        assert_eq!(robots.matches("Disallow: /admin\n").count(), 1);
        assert!(robots.contains("Disallow: /api/\n"));
    }

    #[test]
    fn test_render_without_rules() {
        let robots = render(&[], &[], "https://example.com/sitemap.xml");
        assert!(!robots.contains("Disallow"));
        assert!(robots.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_url_at_web_root() {
        assert_eq!(
            sitemap_url(
                "https://example.com/",
                Path::new("/site/public/sitemap.xml"),
                Path::new("/site/public")
            )
            .as_deref(),
            Some("https://example.com/sitemap.xml")
        );
    }

    #[test]
    fn test_sitemap_url_keeps_subdirectory() {
        assert_eq!(
            sitemap_url(
                "https://example.com",
                Path::new("/site/public/maps/sitemap.xml"),
                Path::new("/site/public")
            )
            .as_deref(),
            Some("https://example.com/maps/sitemap.xml")
        );
    }

    #[test]
    fn test_sitemap_url_outside_web_root() {
        assert_eq!(
            sitemap_url(
                "https://example.com",
                Path::new("/site/dist/sitemap.xml"),
                Path::new("/site/public")
            ),
            None
        );
        assert_eq!(
            sitemap_url(
                "https://example.com",
                Path::new("/site/public"),
                Path::new("/site/public")
            ),
            None
        );
    }
}
