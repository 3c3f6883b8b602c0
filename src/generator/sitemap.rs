//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com</loc>
//!     <lastmod>2024-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::route::{ChangeFreq, Priority, Route};
use crate::utils::date::DateUtc;
use std::borrow::Cow;
use std::fmt::Write;

/// Sitemap XML namespace
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// A complete sitemap, entries sorted by path.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct UrlEntry {
    path: String,
    loc: String,
    lastmod: DateUtc,
    changefreq: ChangeFreq,
    priority: Priority,
}

impl Sitemap {
    /// Compose absolute URLs from `origin` and each route path.
    ///
    /// The root route maps to the bare origin (no trailing slash).
    pub fn build(origin: &str, routes: &[Route]) -> Self {
        let origin = origin.trim_end_matches('/');

        let mut urls: Vec<_> = routes
            .iter()
            .map(|route| UrlEntry {
                path: route.path.as_str().to_string(),
                loc: format!("{origin}{}", route.path.url_suffix()),
                lastmod: route.lastmod,
                changefreq: route.changefreq,
                priority: route.priority,
            })
            .collect();
        urls.sort_by(|a, b| a.path.cmp(&b.path));
        urls.dedup_by(|a, b| a.path == b.path);

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.urls {
            // Writing into a String cannot fail.
            let _ = write!(
                xml,
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
                escape_xml(&entry.loc),
                entry.lastmod,
                entry.changefreq,
                entry.priority,
            );
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_all;
    use crate::route::{RoutePath, RouteSet};
    use quick_xml::Reader;
    use quick_xml::events::Event;

    const DATE: DateUtc = DateUtc::from_ymd(2024, 1, 15);

    fn routes(paths: &[&str]) -> Vec<Route> {
        let set: RouteSet = paths.iter().filter_map(|p| RoutePath::parse(p)).collect();
        classify_all(&set, DATE)
    }

    /// `(loc, lastmod, changefreq, priority)` per `<url>`, via a real XML parser.
    fn parse_urls(xml: &str) -> Vec<[String; 4]> {
        let mut reader = Reader::from_str(xml);
        let mut urls = Vec::new();
        let mut current: [String; 4] = Default::default();
        let mut field = None;

        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) => {
                    field = match e.name().as_ref() {
                        b"loc" => Some(0),
                        b"lastmod" => Some(1),
                        b"changefreq" => Some(2),
                        b"priority" => Some(3),
                        _ => None,
                    };
                }
                Event::Text(t) => {
                    if let Some(i) = field {
                        current[i] = String::from_utf8_lossy(&t).into_owned();
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"url" {
                        urls.push(std::mem::take(&mut current));
                    }
                    field = None;
                }
                Event::Eof => break,
                _ => {}
            }
        }
        urls
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("https://example.com/a"), "https://example.com/a");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(
            escape_xml("<a href=\"x\">'y'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&apos;y&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_root_is_bare_origin() {
        for origin in ["https://example.com", "https://example.com/"] {
            let xml = Sitemap::build(origin, &routes(&["/", "/about"])).into_xml();
            let locs: Vec<_> = parse_urls(&xml).into_iter().map(|u| u[0].clone()).collect();
            assert_eq!(locs, ["https://example.com", "https://example.com/about"]);
            assert!(!xml.contains("example.com//"));
        }
    }

    #[test]
    fn test_document_shape() {
        let xml = Sitemap::build("https://example.com", &routes(&["/teachings/chanting"])).into_xml();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(&format!("<urlset xmlns=\"{SITEMAP_NS}\">")));
        assert_eq!(
            parse_urls(&xml),
            [[
                "https://example.com/teachings/chanting".to_string(),
                "2024-01-15".to_string(),
                "monthly".to_string(),
                "0.8".to_string(),
            ]]
        );
    }

    #[test]
    fn test_entries_sorted_by_path() {
        let mut input = routes(&["/news", "/", "/about", "/contact"]);
        input.reverse();

        let xml = Sitemap::build("https://example.com", &input).into_xml();
        let locs: Vec<_> = parse_urls(&xml).into_iter().map(|u| u[0].clone()).collect();

        assert_eq!(
            locs,
            [
                "https://example.com",
                "https://example.com/about",
                "https://example.com/contact",
                "https://example.com/news",
            ]
        );
    }

    #[test]
    fn test_priority_always_one_decimal() {
        let xml = Sitemap::build("https://example.com", &routes(&["/", "/privacy-policy"])).into_xml();
        let priorities: Vec<_> = parse_urls(&xml).into_iter().map(|u| u[3].clone()).collect();
        assert_eq!(priorities, ["1.0", "0.3"]);
    }

    #[test]
    fn test_into_xml_deterministic() {
        let input = routes(&["/", "/about", "/gallery"]);
        let first = Sitemap::build("https://example.com", &input).into_xml();
        let second = Sitemap::build("https://example.com", &input).into_xml();
        assert_eq!(first, second);
    }

    #[test]
    fn test_minified_output_still_parses() {
        let xml = Sitemap::build("https://example.com", &routes(&["/", "/about"])).into_xml();
        let minified = crate::generator::minify_xml(xml.as_bytes(), true);
        let minified = std::str::from_utf8(&minified).unwrap();

        assert!(!minified.contains('\n'));
        assert_eq!(parse_urls(minified), parse_urls(&xml));
    }

    #[test]
    fn test_empty_sitemap() {
        let sitemap = Sitemap::build("https://example.com", &[]);
        assert!(sitemap.is_empty());
        let xml = sitemap.into_xml();
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }
}
