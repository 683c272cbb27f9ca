//! Content discovery and loading.
//!
//! Discovery is the single file-system pass: it walks the content
//! directory in stable path order and reads raw text. Loading consumes
//! the injected `Document` sources, parses each independently (in
//! parallel, since documents have no cross-dependency until the
//! duplicate-slug check), and builds the slug-indexed store.

use crate::content::{
    ContentError, FrontMatter, Post, Posts,
    front_matter::parse_front_matter,
    slug::{derive_slug, is_markdown},
};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// A raw document source: content-relative path plus raw text.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// Enumerate markdown documents under `content_dir` in stable path order.
///
/// Read-only: nothing in the build writes back to the content directory.
pub fn discover_documents(content_dir: &Path) -> Result<Vec<Document>, ContentError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| content_dir.to_path_buf());
            ContentError::Io(path, err.into())
        })?;

        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        let text = fs::read_to_string(entry.path())
            .map_err(|err| ContentError::Io(entry.path().to_path_buf(), err))?;
        let path = entry
            .path()
            .strip_prefix(content_dir)
            .unwrap_or(entry.path())
            .to_path_buf();

        documents.push(Document { path, text });
    }

    Ok(documents)
}

/// Parse and validate every document, then build the slug-indexed store.
///
/// The first schema error aborts the load; on success the returned set
/// keeps the discovery order (presentation order is a separate concern).
pub fn load_posts(documents: &[Document]) -> Result<Posts, ContentError> {
    let posts = documents
        .par_iter()
        .map(load_post)
        .collect::<Result<Vec<_>, _>>()?;

    Posts::from_posts(posts)
}

/// Parse and validate a single document.
fn load_post(document: &Document) -> Result<Post, ContentError> {
    let (front_matter, body) = parse_front_matter(&document.path, &document.text)?;
    let FrontMatter {
        title,
        description,
        pub_date,
        hero_image,
        tags,
    } = front_matter;

    Ok(Post {
        slug: derive_slug(&document.path),
        title,
        description,
        pub_date,
        hero_image,
        tags,
        body,
        source: document.path.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================
