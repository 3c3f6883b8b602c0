//! Route model shared by discovery, classification and output.
//!
//! | Type         | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `RoutePath`  | Normalized, static, site-relative page path     |
//! | `RouteSet`   | Deduplicated paths in lexicographic order       |
//! | `Priority`   | Sitemap priority in tenths                      |
//! | `ChangeFreq` | Sitemap change-frequency token                  |
//! | `Route`      | Path plus its sitemap metadata                  |

mod meta;
mod path;

pub use meta::{ChangeFreq, Priority, Route};
pub use path::{RoutePath, is_dynamic, path_part};

use std::collections::BTreeSet;

/// Deduplicated set of discovered paths.
///
/// Backed by a `BTreeSet` so iteration order is the sort order of the
/// paths, independent of the order sources were scanned in.
pub type RouteSet = BTreeSet<RoutePath>;
