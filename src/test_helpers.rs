//! Shared test utilities for the folio test suite.
//!
//! Provides record builders, a fixture copier, and lookups that panic with a
//! clear message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let merged = merge_and_sort_posts([
//!     vec![post("local", "2025-01-01")],
//!     vec![post_with_tags("feed", "2025-01-15", &[("Rust", "rust")])],
//! ]);
//! assert_eq!(ids(&merged), vec!["feed", "local"]);
//! ```

use chrono::{DateTime, Utc};
use std::path::Path;
use tempfile::TempDir;

use crate::dates::parse_date;
use crate::normalize::raw::{FeedEntry, LocalFrontmatter, RawFeedPost, RawLocalPost};
use crate::types::{LightweightPost, PostData, PostSource, Tag, TagWithCount};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Path of the fixture feed document.
pub fn fixture_feed() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/feed.xml")
}

// =========================================================================
// Builders
// =========================================================================

/// Parse a date literal. Panics on typos.
pub fn date(s: &str) -> DateTime<Utc> {
    parse_date(s).unwrap_or_else(|| panic!("bad test date {s:?}"))
}

/// A raw local post with only the required fields set.
pub fn local_post(id: &str, published: &str, body: &str) -> RawLocalPost {
    RawLocalPost {
        id: id.to_string(),
        body: Some(body.to_string()),
        data: LocalFrontmatter {
            title: None,
            slug: None,
            brief: None,
            cover_image: None,
            tags: None,
            published_at: date(published),
            reading_time: None,
        },
    }
}

/// A raw feed entry with only an id and URL.
pub fn feed_post(id: &str, url: &str) -> RawFeedPost {
    RawFeedPost {
        id: id.to_string(),
        data: FeedEntry {
            url: Some(url.to_string()),
            ..FeedEntry::default()
        },
    }
}

/// A normalized post with no tags.
pub fn post(id: &str, published: &str) -> LightweightPost {
    post_with_tags(id, published, &[])
}

/// A normalized post carrying `(name, slug)` tags.
pub fn post_with_tags(id: &str, published: &str, tags: &[(&str, &str)]) -> LightweightPost {
    LightweightPost {
        id: id.to_string(),
        data: PostData {
            slug: id.to_string(),
            title: format!("Post {id}"),
            brief: String::new(),
            cover_image: None,
            tags: tags.iter().map(|(name, slug)| Tag::new(*name, *slug)).collect(),
            published_at: date(published),
            reading_time: 1,
            source: PostSource::Hashnode,
            external_url: None,
        },
    }
}

// =========================================================================
// Extractors and lookups
// =========================================================================

/// Post ids in order.
pub fn ids(posts: &[LightweightPost]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

/// Post ids in order, for borrowed result lists.
pub fn ids_of<'a>(posts: &[&'a LightweightPost]) -> Vec<&'a str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

/// Find a post by slug. Panics if not found.
pub fn find_post<'a>(posts: &'a [LightweightPost], slug: &str) -> &'a LightweightPost {
    posts
        .iter()
        .find(|p| p.data.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = posts.iter().map(|p| p.data.slug.as_str()).collect();
            panic!("post '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a counted tag by slug. Panics if not found.
pub fn find_tag<'a>(tags: &'a [TagWithCount], slug: &str) -> &'a TagWithCount {
    tags.iter().find(|t| t.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = tags.iter().map(|t| t.slug.as_str()).collect();
        panic!("tag '{slug}' not found. Available: {slugs:?}")
    })
}
