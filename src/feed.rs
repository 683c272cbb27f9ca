//! rss feed generation.
//!
//! Turns the ordered post collection and the site constants into a
//! validated rss channel written into the output directory.

use crate::{
    config::SiteConfig,
    content::{Post, Posts},
    log,
};
use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config.
pub fn build_feed(config: &SiteConfig, posts: &Posts) -> Result<()> {
    if config.build.feed.enable {
        Feed::build(config, posts).write(config)?;
    }
    Ok(())
}

// ============================================================================
// Feed Implementation
// ============================================================================

/// rss feed builder
struct Feed<'a> {
    config: &'a SiteConfig,
    posts: Vec<&'a Post>,
}

impl<'a> Feed<'a> {
    /// Build the feed over the presentation-ordered collection.
    fn build(config: &'a SiteConfig, posts: &'a Posts) -> Self {
        Self {
            config,
            posts: posts.list_all(),
        }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .posts
            .iter()
            .map(|post| post_to_rss_item(post, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(self.config.title())
            .link(self.config.url())
            .description(self.config.description())
            .generator("plume".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write the feed to the configured path
    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let feed_path = &config.build.feed.path;

        if let Some(parent) = feed_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(feed_path, &xml)?;

        log!("feed"; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a post to an rss item.
fn post_to_rss_item(post: &Post, config: &SiteConfig) -> rss::Item {
    let link = post.permalink(config.url());

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(Some(post.description.clone()))
        .pub_date(rfc2822(post.pub_date))
        .author(feed_author(config))
        .build()
}

/// Format a publication date as RFC 2822 at midnight.
fn rfc2822(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Normalize the author field to rss format: "email@example.com (Name)"
///
/// A configured author already in that format is used as-is; otherwise
/// the site email and author name are combined.
fn feed_author(config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = config.author();
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_owned());
    }

    Some(format!("{} ({})", config.email(), author))
}
