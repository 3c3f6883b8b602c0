//! Project configuration for `routemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── sources    # [sources]
//! │   ├── sitemap    # [sitemap]
//! │   └── robots     # [robots]
//! ├── types/         # FieldPath, ConfigError, ConfigDiagnostics
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every key is optional. Without a config file the built-in defaults apply
//! and the project root is the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{RobotsConfig, SiteSectionConfig, SitemapConfig, SourcesConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::route::RoutePath;
use crate::utils::date::DateUtc;
use crate::utils::fs::normalize_path;
use crate::{debug, log};
use anyhow::{Context, Result};
use section::site::{DEFAULT_SITE_URL, check_origin, normalize_origin};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for when `--config` is not given.
pub const CONFIG_FILE: &str = "routemap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing routemap.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory: parent of the config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsConfig,
}

impl SiteConfig {
    /// Load configuration for this run.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if started in `cwd`.
    ///
    /// Order: config file (or defaults), CLI overrides, validation, then
    /// every path is made absolute against the project root.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = Self::resolve_config_path(cli, cwd)?;

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {CONFIG_FILE} found, using defaults");
                Self::default()
            }
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd)
            .to_path_buf();

        config.config_path = config_path.map(|p| normalize_path(&p));
        config.apply_cli_options(cli);
        config.validate()?;
        config.normalize_paths(&root);

        Ok(config)
    }

    /// Locate the config file.
    ///
    /// An explicit `--config` must exist. Otherwise `routemap.toml` is
    /// searched upward from `cwd`, and not finding one is fine.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>, ConfigError> {
        match &cli.config {
            Some(path) => {
                let path = cwd.join(path);
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path))
                }
            }
            None => Ok(find_config_file(cwd, Path::new(CONFIG_FILE))),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.unknown_field(field);
        }
        diag.print_warnings();

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.sources.routes, cli.routes.as_ref());
        Self::update_option(&mut self.sources.navigation, cli.navigation.as_ref());
        Self::update_option(&mut self.sitemap.path, cli.output.as_ref());
        Self::update_option(&mut self.sitemap.minify, cli.minify.as_ref());
        Self::update_option(&mut self.robots.enable, cli.robots.as_ref());

        if let Some(url) = &cli.site_url {
            self.site.url = Some(url.clone());
        }
        if let Some(date) = cli.lastmod {
            self.sitemap.lastmod = Some(toml::Value::String(date.to_string()));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make every configured path absolute against `root`.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);

        self.sources.routes = normalize_path(&root.join(&self.sources.routes));
        self.sources.navigation = normalize_path(&root.join(&self.sources.navigation));
        self.sitemap.path = normalize_path(&root.join(&self.sitemap.path));
        self.robots.path = normalize_path(&root.join(&self.robots.path));

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.robots.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // resolved values
    // ========================================================================

    /// Origin for every `<loc>`.
    ///
    /// `--site-url` and `[site] url` (already merged into `site.url`) win
    /// over the `siteUrl` scanned from the navigation config, which wins
    /// over the built-in default. An unusable scanned value is skipped.
    pub fn resolve_origin(&self, scanned: Option<&str>) -> String {
        if let Some(url) = &self.site.url {
            return normalize_origin(url);
        }

        if let Some(url) = scanned {
            match check_origin(url.trim()) {
                Ok(()) => return normalize_origin(url),
                Err(reason) => log!("warning"; "ignoring scanned siteUrl: {reason}"),
            }
        }

        DEFAULT_SITE_URL.to_string()
    }

    /// Date written to every `<lastmod>`.
    pub fn lastmod(&self) -> DateUtc {
        self.sitemap.lastmod_date().unwrap_or_else(DateUtc::today)
    }

    pub fn exclude_paths(&self) -> Vec<RoutePath> {
        self.sitemap.exclude_paths()
    }

    /// Path shown in log lines: relative to the project root when possible.
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet. Panics on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();

        assert!(config.config_path.is_none());
        assert!(config.site.url.is_none());
        assert_eq!(config.sources.routes, Path::new("src/App.tsx"));
        assert_eq!(config.sources.navigation, Path::new("src/siteConfig.ts"));
        assert_eq!(config.sitemap.path, Path::new("public/sitemap.xml"));
        assert!(!config.sitemap.minify);
        assert!(!config.robots.enable);
        assert_eq!(config.sitemap.exclude, ["/admin", "/content-manager"]);
    }

    #[test]
    fn test_parse_all_sections() {
        let config = test_parse_config(
            r#"
[site]
url = "https://example.com"

[sources]
routes = "app/routes.tsx"
navigation = "app/nav.ts"

[sitemap]
path = "dist/sitemap.xml"
minify = true
lastmod = "2024-05-01"
fallback = ["/"]
exclude = []

[robots]
enable = true
disallow = ["/api/"]
"#,
        );

        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.sources.routes, Path::new("app/routes.tsx"));
        assert_eq!(config.sitemap.path, Path::new("dist/sitemap.xml"));
        assert!(config.sitemap.minify);
        assert_eq!(config.lastmod(), DateUtc::from_ymd(2024, 5, 1));
        assert_eq!(config.sitemap.fallback, ["/"]);
        assert!(config.sitemap.exclude.is_empty());
        assert!(config.robots.enable);
        assert_eq!(config.robots.path, Path::new("public/robots.txt"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[sitemap\npath = 1").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[sitemap]\nminfy = true\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert!(!config.sitemap.minify);
        assert!(ignored.iter().any(|f| f == "sitemap.minfy"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = test_parse_config(
            "[site]\nurl = \"https://example.com\"\n[sitemap]\nminify = true\n",
        );
        let cli = Cli {
            site_url: Some("https://staging.example.com".into()),
            output: Some("out/sitemap.xml".into()),
            minify: Some(false),
            robots: Some(true),
            lastmod: Some(DateUtc::from_ymd(2023, 12, 24)),
            ..Cli::default()
        };
        config.apply_cli_options(&cli);

        assert_eq!(
            config.site.url.as_deref(),
            Some("https://staging.example.com")
        );
        assert_eq!(config.sitemap.path, Path::new("out/sitemap.xml"));
        assert!(!config.sitemap.minify);
        assert!(config.robots.enable);
        assert_eq!(config.lastmod(), DateUtc::from_ymd(2023, 12, 24));
    }

    #[test]
    fn test_resolve_origin_order() {
        let mut config = SiteConfig::default();
        assert_eq!(config.resolve_origin(None), DEFAULT_SITE_URL);
        assert_eq!(
            config.resolve_origin(Some("https://scanned.example/")),
            "https://scanned.example"
        );
        assert_eq!(config.resolve_origin(Some("not a url")), DEFAULT_SITE_URL);

        config.site.url = Some("https://configured.example/".into());
        assert_eq!(
            config.resolve_origin(Some("https://scanned.example")),
            "https://configured.example"
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r#"
[site]
url = "example.com"

[sitemap]
lastmod = "yesterday"
"#,
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_without_config_file_uses_cwd() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from(&Cli::default(), dir.path()).unwrap();

        let root = normalize_path(dir.path());
        assert!(config.config_path.is_none());
        assert_eq!(config.root, root);
        assert_eq!(config.sources.routes, root.join("src/App.tsx"));
        assert_eq!(config.sitemap.path, root.join("public/sitemap.xml"));
    }

    #[test]
    fn test_load_finds_config_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/pages");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[sitemap]\npath = \"dist/sitemap.xml\"\n",
        )
        .unwrap();

        let config = SiteConfig::load_from(&Cli::default(), &nested).unwrap();

        let root = normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.sitemap.path, root.join("dist/sitemap.xml"));
    }

    #[test]
    fn test_load_explicit_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            config: Some("missing.toml".into()),
            ..Cli::default()
        };

        let err = SiteConfig::load_from(&cli, dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[site\n").unwrap();

        let err = SiteConfig::load_from(&Cli::default(), dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(..))
        ));
    }
}
