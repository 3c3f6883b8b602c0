//! Sitemap priority and change-frequency policy.
//!
//! Rules are checked top to bottom and the first match wins:
//!
//! | Pattern                                    | priority | changefreq |
//! |--------------------------------------------|----------|------------|
//! | `/`                                        | 1.0      | daily      |
//! | `/about`, `/teachings`, `/contact`         | 0.9      | monthly    |
//! | `/teachings/...`                           | 0.8      | monthly    |
//! | `/schedule`, `/testimonials`, `/gallery`   | 0.7      | weekly     |
//! | `/news`                                    | 0.6      | weekly     |
//! | `/privacy-policy`, `/terms-of-service`     | 0.3      | yearly     |
//!
//! A path no rule matches gets [`DEFAULT`] (0.5, yearly).
//! `/teachings` itself hits the exact tier before the prefix tier is tried.

use crate::route::{ChangeFreq, Priority, Route, RoutePath, RouteSet};
use crate::utils::date::DateUtc;

/// How a rule selects paths.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    Root,
    Exact(&'static [&'static str]),
    /// Strictly below the prefix (`/teachings/x`, not `/teachings`).
    Below(&'static str),
}

impl Pattern {
    fn matches(self, path: &RoutePath) -> bool {
        match self {
            Self::Root => path.is_root(),
            Self::Exact(paths) => paths.iter().any(|p| *p == path.as_str()),
            Self::Below(prefix) => path
                .as_str()
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/')),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    pattern: Pattern,
    priority: Priority,
    changefreq: ChangeFreq,
}

const fn rule(pattern: Pattern, tenths: u8, changefreq: ChangeFreq) -> Rule {
    Rule {
        pattern,
        priority: Priority::from_tenths(tenths),
        changefreq,
    }
}

const RULES: &[Rule] = &[
    rule(Pattern::Root, 10, ChangeFreq::Daily),
    rule(
        Pattern::Exact(&["/about", "/teachings", "/contact"]),
        9,
        ChangeFreq::Monthly,
    ),
    rule(Pattern::Below("/teachings"), 8, ChangeFreq::Monthly),
    rule(
        Pattern::Exact(&["/schedule", "/testimonials", "/gallery"]),
        7,
        ChangeFreq::Weekly,
    ),
    rule(Pattern::Exact(&["/news"]), 6, ChangeFreq::Weekly),
    rule(
        Pattern::Exact(&["/privacy-policy", "/terms-of-service"]),
        3,
        ChangeFreq::Yearly,
    ),
];

/// Policy for paths outside every tier.
const DEFAULT: (Priority, ChangeFreq) = (Priority::from_tenths(5), ChangeFreq::Yearly);

/// Priority and change frequency for one path.
pub fn classify(path: &RoutePath) -> (Priority, ChangeFreq) {
    RULES
        .iter()
        .find(|rule| rule.pattern.matches(path))
        .map_or(DEFAULT, |rule| (rule.priority, rule.changefreq))
}

/// Classify a whole route set, keeping its (sorted) order.
pub fn classify_all(routes: &RouteSet, lastmod: DateUtc) -> Vec<Route> {
    routes
        .iter()
        .map(|path| {
            let (priority, changefreq) = classify(path);
            Route {
                path: path.clone(),
                priority,
                changefreq,
                lastmod,
            }
        })
        .collect()
}
