//! Site configuration management for `plume.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, description, url, ...) |
//! | `[social]`  | Profile links (github, linkedin)             |
//! | `[build]`   | Content/output paths, feed generation        |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//! author = "Alice"
//! email = "alice@example.com"
//!
//! [social]
//! github = "https://github.com/alice"
//! linkedin = "https://www.linkedin.com/in/alice"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [build.feed]
//! enable = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod social;

pub use error::ConfigError;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use social::SocialConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing plume.toml.
///
/// Constructed once at process start, validated, then leaked to `'static`
/// and referenced read-only by every later stage. There is no setter
/// surface after `update_with_cli`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Social profile links
    #[serde(default)]
    pub social: SocialConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { feed, sitemap } = &cli.command {
            Self::update_option(&mut self.build.feed.enable, feed.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.feed.path = self.build.output.join(&self.build.feed.path);
        self.build.sitemap.path = self.build.output.join(&self.build.sitemap.path);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the site constants before anything else runs.
    ///
    /// Every required field must be non-empty and every URL field must be
    /// a well-formed absolute http(s) URL. The first violation aborts with
    /// an error naming the field.
    pub fn validate(&self) -> Result<()> {
        Self::require_non_empty("base.title", &self.base.title)?;
        Self::require_non_empty("base.description", &self.base.description)?;
        Self::require_non_empty("base.author", &self.base.author)?;
        Self::require_non_empty("base.email", &self.base.email)?;
        Self::require_absolute_url("base.url", &self.base.url)?;
        Self::require_absolute_url("social.github", &self.social.github)?;
        Self::require_absolute_url("social.linkedin", &self.social.linkedin)?;

        Ok(())
    }

    /// Check that a required field is non-empty
    fn require_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            bail!(ConfigError::Validation {
                field: field.to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    /// Check that a URL field parses as an absolute http(s) URL
    fn require_absolute_url(field: &str, value: &str) -> Result<()> {
        Self::require_non_empty(field, value)?;

        let url = Url::parse(value).map_err(|err| ConfigError::Validation {
            field: field.to_owned(),
            reason: err.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!(ConfigError::Validation {
                field: field.to_owned(),
                reason: "must be an absolute http(s) URL".to_owned(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Site Constant Accessors
// ============================================================================

/// Read-only accessors for the seven site-wide constants consumed by the
/// rendering collaborator for headers, meta tags and footers.
#[allow(unused)]
impl SiteConfig {
    pub fn title(&self) -> &str {
        &self.base.title
    }

    pub fn description(&self) -> &str {
        &self.base.description
    }

    pub fn url(&self) -> &str {
        &self.base.url
    }

    pub fn author(&self) -> &str {
        &self.base.author
    }

    pub fn email(&self) -> &str {
        &self.base.email
    }

    pub fn github_url(&self) -> &str {
        &self.social.github
    }

    pub fn linkedin_url(&self) -> &str {
        &self.social.linkedin
    }
}

// ============================================================================
// Tests
// ============================================================================
