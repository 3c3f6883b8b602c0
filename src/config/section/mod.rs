//! Configuration section definitions.
//!
//! Each module corresponds to a section in `routemap.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `site`    | `[site]`      | Site origin                              |
//! | `sources` | `[sources]`   | Route table and navigation config paths  |
//! | `sitemap` | `[sitemap]`   | Output path, lastmod, fallback, exclude  |
//! | `robots`  | `[robots]`    | Optional robots.txt                      |

mod robots;
pub mod site;
mod sitemap;
mod sources;

pub use robots::RobotsConfig;
pub use site::SiteSectionConfig;
pub use sitemap::SitemapConfig;
pub use sources::SourcesConfig;
