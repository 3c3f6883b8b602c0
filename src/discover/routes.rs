//! Route table scanning.
//!
//! Extracts `path` attributes from JSX route declarations:
//!
//! ```text
//! <Route path="/about" element={<AboutPage />} />
//! <Route element={<News />} path='/news' />
//! <Route path={"/gallery"} element={<Gallery />} />
//! ```
//!
//! Block comments are removed first, so `{/* <Route path="/old" /> */}`
//! does not publish a retired page.

use regex::Regex;
use std::sync::LazyLock;

/// Every statically written route path, in declaration order.
///
/// Dynamic paths are returned as well; filtering happens during
/// normalization. A source with no route declarations yields an empty list.
pub fn scan_routes(text: &str) -> Vec<String> {
    static RE_BLOCK_COMMENT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
    static RE_ROUTE_PATH: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<Route\b(?:[^<>]|<[^<>]*>)*?\bpath\s*=\s*(?:\{\s*)?["']([^"']+)["']"#)
            .unwrap()
    });

    let text = RE_BLOCK_COMMENT.replace_all(text, "");

    RE_ROUTE_PATH
        .captures_iter(&text)
        .map(|caps| caps[1].to_string())
        .collect()
}
