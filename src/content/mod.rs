//! Content collection: markdown documents with validated front-matter.
//!
//! # Pipeline
//!
//! ```text
//! discover_documents() ──► Vec<Document>        (fs walk, raw text)
//!                              │
//!                              ▼
//! load_posts() ──────────► Posts                (parse + validate + index)
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!        list_all()                     get_by_slug()
//!        (pub_date descending)          (identity lookup)
//! ```
//!
//! Discovery is the only file-system pass; everything after it consumes
//! the injected `Document` sources and is testable without real files.

mod error;
mod front_matter;
mod loader;
mod post;
mod slug;
mod store;

pub use error::ContentError;
pub use front_matter::FrontMatter;
pub use loader::{Document, discover_documents, load_posts};
pub use post::{DESCRIPTION_RECOMMENDED_MAX, Post};
pub use slug::derive_slug;
pub use store::Posts;
