//! Sitemap metadata attached to each route.

use super::RoutePath;
use crate::utils::date::DateUtc;
use std::fmt;

/// Sitemap priority hint in `[0.0, 1.0]`.
///
/// Stored in tenths so every value renders with exactly one fractional
/// digit and compares exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MAX: Self = Self(10);

    /// Create from tenths, clamped to `0..=10`.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > 10 { Self::MAX } else { Self(tenths) }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Sitemap change-frequency hint.
///
/// The full protocol set; the rule table uses only some of these.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol token written into `<changefreq>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One published page, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: RoutePath,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
    /// Generation date; no per-page modification time exists.
    pub lastmod: DateUtc,
}
