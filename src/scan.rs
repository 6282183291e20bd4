//! Content directory scanning.
//!
//! Stage 1 of the folio pipeline. Walks the content root, reads every
//! markdown post, and splits it into frontmatter and body, producing the
//! [`RawLocalPost`] records the local normalizer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                               # Content root
//! ├── config.toml                        # Site configuration (optional)
//! ├── hello-world.md                     # id: hello-world.md
//! ├── 2024/
//! │   ├── astro-migration.mdx            # id: 2024/astro-migration.mdx
//! │   └── _draft-ideas.md                # skipped (leading underscore)
//! └── _templates/                        # skipped with everything inside
//!     └── post.md
//! ```
//!
//! ## Post Files
//!
//! A post is a `.md`, `.mdx` or `.markdown` file that opens with a YAML
//! frontmatter block between `---` fences:
//!
//! ```text
//! ---
//! title: Hello World
//! publishedAt: 2025-01-15
//! tags: [Rust, { name: Web Dev, slug: webdev }]
//! ---
//! Body text...
//! ```
//!
//! Files and directories whose names start with `_` or `.` are ignored. The
//! post id is the path relative to the root with `/` separators on every
//! platform. Files are parsed in parallel; the result is sorted by id.

use crate::naming::CONTENT_EXTENSIONS;
use crate::normalize::raw::{LocalFrontmatter, RawLocalPost};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("No frontmatter block found in {0}")]
    MissingFrontmatter(PathBuf),
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

const FENCE: &str = "---";

pub fn scan(root: &Path) -> Result<Vec<RawLocalPost>, ScanError> {
    let files = collect_post_files(root)?;
    tracing::debug!(root = %root.display(), files = files.len(), "scanning content");

    let mut posts = files
        .par_iter()
        .map(|path| read_post(root, path))
        .collect::<Result<Vec<_>, _>>()?;

    posts.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(posts)
}

fn collect_post_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_post(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('_') || name.starts_with('.'))
        .unwrap_or(false)
}

fn is_post(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| CONTENT_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
        .unwrap_or(false)
}

fn read_post(root: &Path, path: &Path) -> Result<RawLocalPost, ScanError> {
    let content = fs::read_to_string(path)?;
    let (frontmatter, body) =
        split_frontmatter(&content).ok_or_else(|| ScanError::MissingFrontmatter(path.to_path_buf()))?;

    let data: LocalFrontmatter =
        serde_yaml::from_str(frontmatter).map_err(|source| ScanError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    let id = post_id(root, path);
    tracing::debug!(id = %id, "read post");

    Ok(RawLocalPost {
        id,
        body: Some(body.to_string()),
        data,
    })
}

/// Root-relative path with `/` separators.
fn post_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split `content` into (frontmatter, body).
///
/// The first line must be a `---` fence (a BOM is tolerated) and a later line
/// must close it. Returns `None` otherwise.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let first_line_end = content.find('\n').unwrap_or(content.len());
    if content[..first_line_end].trim_end() != FENCE {
        return None;
    }
    let rest = content.get(first_line_end + 1..)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let frontmatter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((frontmatter, body));
        }
        offset += line.len();
    }
    None
}
