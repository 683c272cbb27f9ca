//! Content collection error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the content collection.
///
/// Every load-time variant is fatal to the build; there is no partial
/// success where some posts render and others are skipped.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Schema validation error in `{path}`: field `{field}`: {reason}")]
    Schema {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error("Duplicate slug `{slug}`: `{first}` and `{second}` resolve to the same post")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("No post found for slug `{slug}`")]
    NotFound { slug: String },
}

impl ContentError {
    /// Create a schema error naming the document and the offending field.
    pub fn schema(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Schema {
            path: path.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
