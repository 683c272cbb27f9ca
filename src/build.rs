//! Build orchestration.
//!
//! One pass: validate the whole collection, then write generated
//! outputs. Any validation failure aborts the build; nothing is
//! partially emitted.

use crate::{
    config::SiteConfig,
    content::{DESCRIPTION_RECOMMENDED_MAX, Posts, discover_documents, load_posts},
    feed::build_feed,
    log,
    sitemap::build_sitemap,
};
use anyhow::Result;
use std::fs;

/// Load and validate the content collection, reporting progress.
///
/// This is the `check` command, and the first half of `build`.
pub fn check_site(config: &'static SiteConfig) -> Result<Posts> {
    let documents = discover_documents(&config.build.content)?;
    log!("content"; "found {} documents", documents.len());

    let posts = load_posts(&documents)?;
    warn_overlong_descriptions(&posts);
    log!("content"; "validated {} posts", posts.len());

    Ok(posts)
}

/// Build the site: validate the collection, then write generated outputs.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let posts = check_site(config)?;

    fs::create_dir_all(&config.build.output)?;
    build_feed(config, &posts)?;
    build_sitemap(config, &posts)?;

    log!("build"; "done");
    Ok(())
}

/// Log a warning for descriptions beyond the recommended meta length.
fn warn_overlong_descriptions(posts: &Posts) {
    for post in posts.iter() {
        if post.description_overlong() {
            log!(
                "warn";
                "{}: description exceeds {} characters",
                post.source.display(),
                DESCRIPTION_RECOMMENDED_MAX
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &std::path::Path, name: &str, title: &str, date: &str) {
        fs::write(
            dir.join(name),
            format!(
                "---\ntitle: \"{title}\"\ndescription: \"About {title}\"\npubDate: {date}\n---\n\nBody.\n"
            ),
        )
        .unwrap();
    }

    fn leak_config(root: &std::path::Path) -> &'static SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config.build.feed.path = root.join("public/feed.xml");
        config.build.sitemap.path = root.join("public/sitemap.xml");
        Box::leak(Box::new(config))
    }

    #[test]
    fn test_check_site_counts_posts() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "one.md", "One", "2024-01-15");
        write_post(&content, "two.md", "Two", "2024-01-05");

        let config = leak_config(dir.path());
        let posts = check_site(config).expect("check");

        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_check_site_fails_fast_on_bad_document() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "good.md", "Good", "2024-01-15");
        fs::write(content.join("bad.md"), "---\ntitle: \"Bad\"\n---\nBody").unwrap();

        let config = leak_config(dir.path());
        let err = check_site(config).unwrap_err().to_string();

        assert!(err.contains("bad.md"));
        assert!(err.contains("description"));
    }

    #[test]
    fn test_build_site_writes_feed() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "hello.md", "Hello", "2024-01-15");

        let config = leak_config(dir.path());
        build_site(config).expect("build");

        let xml = fs::read_to_string(dir.path().join("public/feed.xml")).expect("feed written");
        assert!(xml.contains("<rss"));
        assert!(xml.contains("hello"));

        let sitemap =
            fs::read_to_string(dir.path().join("public/sitemap.xml")).expect("sitemap written");
        assert!(sitemap.contains("<urlset"));
        assert!(sitemap.contains("/hello/"));
    }

    #[test]
    fn test_build_site_feed_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "hello.md", "Hello", "2024-01-15");

        let config_box = {
            let mut config = SiteConfig::default();
            config.build.content = content.clone();
            config.build.output = dir.path().join("public");
            config.build.feed.path = dir.path().join("public/feed.xml");
            config.build.feed.enable = false;
            config.build.sitemap.path = dir.path().join("public/sitemap.xml");
            config.build.sitemap.enable = false;
            config
        };
        let config: &'static SiteConfig = Box::leak(Box::new(config_box));

        build_site(config).expect("build");
        assert!(!dir.path().join("public/feed.xml").exists());
        assert!(!dir.path().join("public/sitemap.xml").exists());
    }
}
