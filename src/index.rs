//! The merged blog index: scan, normalize, read the feed, merge.
//!
//! This is the whole content pipeline in one call. The output is what the
//! site's listing pages render and what `folio index` writes as JSON.

use crate::aggregate::merge_and_sort_posts;
use crate::config::SiteConfig;
use crate::feed::{self, FeedError};
use crate::normalize::{normalize_freecodecamp_posts_at, normalize_local_posts_with};
use crate::scan::{self, ScanError};
use crate::types::LightweightPost;
use chrono::Utc;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the merged, newest-first post list.
///
/// Local posts come from `source`; external posts from `feed` when given.
/// Every post id must be unique across both sources.
pub fn load_index(
    source: &Path,
    feed: Option<&Path>,
    config: &SiteConfig,
) -> Result<Vec<LightweightPost>, IndexError> {
    let local = normalize_local_posts_with(scan::scan(source)?, &config.posts);
    tracing::info!(count = local.len(), source = %source.display(), "local posts");

    let external = match feed {
        Some(path) => {
            let entries = feed::read_feed(path)?;
            let posts = normalize_freecodecamp_posts_at(entries, &config.posts, Utc::now());
            tracing::info!(count = posts.len(), feed = %path.display(), "feed posts");
            posts
        }
        None => Vec::new(),
    };

    let merged = merge_and_sort_posts([local, external]);
    check_unique_ids(&merged)?;
    Ok(merged)
}

fn check_unique_ids(posts: &[LightweightPost]) -> Result<(), IndexError> {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.id.as_str()) {
            return Err(IndexError::DuplicateId(post.id.clone()));
        }
    }
    Ok(())
}

/// Write `posts` as pretty JSON, creating parent directories.
pub fn write_index(posts: &[LightweightPost], path: &Path) -> Result<(), IndexError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(posts)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), posts = posts.len(), "wrote index");
    Ok(())
}
