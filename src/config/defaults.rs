//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "My Blog".into()
    }

    pub fn description() -> String {
        "A personal developer blog".into()
    }

    pub fn url() -> String {
        "https://example.com".into()
    }

    pub fn author() -> String {
        "Site Author".into()
    }

    pub fn email() -> String {
        "author@example.com".into()
    }
}

// ============================================================================
// [social] Section Defaults
// ============================================================================

pub mod social {
    pub fn github() -> String {
        "https://github.com/username".into()
    }

    pub fn linkedin() -> String {
        "https://www.linkedin.com/in/username".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn feed_path() -> PathBuf {
        "feed.xml".into()
    }

    pub fn sitemap_path() -> PathBuf {
        "sitemap.xml".into()
    }
}
