//! Post entity.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Recommended ceiling for meta descriptions, in characters.
pub const DESCRIPTION_RECOMMENDED_MAX: usize = 160;

/// A validated blog post.
///
/// Identity is the `slug`; the set of posts is fixed once loading
/// succeeds, so every field is plain owned data with no interior
/// mutability.
#[derive(Debug, Clone)]
pub struct Post {
    /// Unique identifier derived from the source path.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Meta description, also shown on listing pages.
    pub description: String,

    /// Publication date (date-only, no time zone).
    pub pub_date: NaiveDate,

    /// Optional hero image reference; `None` means no hero image.
    pub hero_image: Option<String>,

    /// Tags in author-supplied order, preserved for display.
    pub tags: Vec<String>,

    /// Raw markdown body, handed to the renderer unmodified.
    pub body: String,

    /// Content-relative source path, kept for error reporting.
    pub source: PathBuf,
}

impl Post {
    /// True when the description exceeds the recommended meta length.
    pub fn description_overlong(&self) -> bool {
        self.description.chars().count() > DESCRIPTION_RECOMMENDED_MAX
    }

    /// Absolute URL for this post under `base_url`: `base/slug/`.
    pub fn permalink(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.slug)
    }
}
