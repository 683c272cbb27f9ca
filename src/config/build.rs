//! `[build]` section configuration.
//!
//! Content/output paths and generated-output settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in plume.toml - build paths and outputs.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
///
/// [build.feed]
/// enable = true
/// path = "feed.xml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not from the config file).
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Directory holding the markdown documents.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Directory generated outputs are written to.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Feed generation settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.feed]` section - rss feed generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Whether `build` writes the feed.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::feed_path")]
    #[educe(Default = defaults::build::feed_path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` section - sitemap generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Whether `build` writes the sitemap.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Sitemap file path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap_path")]
    #[educe(Default = defaults::build::sitemap_path())]
    pub path: PathBuf,
}
