//! The validated post collection.
//!
//! `Posts` is the queryable group the rendering collaborator consumes:
//! `list_all()` for index pages, `get_by_slug()` for individual post
//! routing. Construction performs the collection-wide duplicate-slug
//! check; everything after that is a read-only query.

use crate::content::{ContentError, Post};
use std::collections::HashMap;

/// The validated, slug-indexed set of posts.
#[derive(Debug, Default)]
pub struct Posts {
    /// Posts in loader (discovery) order.
    items: Vec<Post>,
    /// Slug → index into `items`.
    by_slug: HashMap<String, usize>,
}

impl Posts {
    /// Build the store, rejecting duplicate slugs.
    pub fn from_posts(items: Vec<Post>) -> Result<Self, ContentError> {
        let mut by_slug = HashMap::with_capacity(items.len());

        for (index, post) in items.iter().enumerate() {
            if let Some(first) = by_slug.insert(post.slug.clone(), index) {
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: items[first].source.clone(),
                    second: post.source.clone(),
                });
            }
        }

        Ok(Self { items, by_slug })
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the collection holds no posts.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate posts in loader order.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.items.iter()
    }

    /// Look up a post by its slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<&Post, ContentError> {
        self.by_slug
            .get(slug)
            .map(|&index| &self.items[index])
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_owned(),
            })
    }

    /// Presentation order for listing pages: `pub_date` descending,
    /// most recent first. Equal dates keep loader order (stable sort),
    /// and the same input always produces the same output.
    pub fn list_all(&self) -> Vec<&Post> {
        let mut ordered: Vec<&Post> = self.items.iter().collect();
        ordered.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        ordered
    }
}

// ============================================================================
// Tests
// ============================================================================
