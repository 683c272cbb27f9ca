//! Slug derivation for content documents.
//!
//! A post's identity is its slug, computed deterministically from the
//! document path relative to the content root: lowercased, markdown
//! extension stripped, path separators kept as slug separators.

use std::path::Path;

/// Extensions recognized as markdown documents.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Return true when `path` has a markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Derive the slug for a document from its content-relative path.
///
/// # Examples
///
/// | Source | Slug |
/// |--------|------|
/// | `My-Post.md` | `my-post` |
/// | `Posts/Hello.md` | `posts/hello` |
/// | `notes/setup.markdown` | `notes/setup` |
pub fn derive_slug(relative: &Path) -> String {
    let mut components: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().to_lowercase())
        .collect();

    if let Some(file) = components.last_mut() {
        for ext in MARKDOWN_EXTENSIONS {
            if let Some(stem) = file.strip_suffix(&format!(".{ext}")) {
                *file = stem.to_owned();
                break;
            }
        }
    }

    components.join("/")
}
