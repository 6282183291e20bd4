//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every post is its positional index and title, with where it came from
//! (a content file or an external URL) shown as secondary context on an
//! indented `Source:` line. The output reads as a content inventory while
//! still letting users trace each post back to its origin.
//!
//! # Output Format
//!
//! ## Index
//!
//! ```text
//! Posts
//! 001 How to Build a Bento Grid (2025-01-22, 1 min)
//!     Source: https://www.freecodecamp.org/news/how-to-build-a-bento-grid/ [freecodecamp]
//!     Tags: Web Development, CSS
//! 002 Hello World (2025-01-15, 1 min)
//!     Source: hello-world.md [hashnode]
//!
//! Indexed 2 posts (1 local, 1 feed) → dist/posts.json
//! ```
//!
//! ## Tags
//!
//! ```text
//! Tags
//! 001 Rust (1 post)
//!     /blog/tags/rust
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::aggregate::PostPage;
use crate::layout::{GridSpanResult, ImageOrigin};
use crate::types::{LightweightPost, PostSource, TagWithCount};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    match n {
        1 => format!("{} {}", n, word),
        _ if word.ends_with("ch") => format!("{} {}es", n, word),
        _ => format!("{} {}s", n, word),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Header plus context lines for one post.
///
/// ```text
/// 001 Hello World (2025-01-15, 3 min)
///     Source: hello-world.md [hashnode]
///     Tags: Rust, Web Dev
/// ```
fn post_entry(index: usize, post: &LightweightPost) -> Vec<String> {
    let data = &post.data;
    let mut lines = vec![format!(
        "{} {} ({}, {} min)",
        format_index(index),
        data.title,
        data.published_at.format("%Y-%m-%d"),
        data.reading_time
    )];

    let source = match (data.source, data.external_url.as_deref()) {
        (PostSource::FreeCodeCamp, Some(url)) => url.to_string(),
        _ => post.id.clone(),
    };
    lines.push(format!("{}Source: {} [{}]", indent(1), source, data.source.as_str()));

    if !data.tags.is_empty() {
        let names: Vec<&str> = data.tags.iter().map(|t| t.name.as_str()).collect();
        lines.push(format!("{}Tags: {}", indent(1), names.join(", ")));
    }
    lines
}

// ============================================================================
// Index
// ============================================================================

pub fn format_index_output(posts: &[LightweightPost], output_path: &Path) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (i, post) in posts.iter().enumerate() {
        lines.extend(post_entry(i + 1, post));
    }

    let feed = posts
        .iter()
        .filter(|p| p.data.source == PostSource::FreeCodeCamp)
        .count();
    lines.push(String::new());
    lines.push(format!(
        "Indexed {} ({} local, {} feed) → {}",
        plural(posts.len(), "post"),
        posts.len() - feed,
        feed,
        output_path.display()
    ));
    lines
}

pub fn print_index_output(posts: &[LightweightPost], output_path: &Path) {
    for line in format_index_output(posts, output_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Tags
// ============================================================================

pub fn format_tags_output(tags: &[TagWithCount]) -> Vec<String> {
    let mut lines = vec!["Tags".to_string()];
    if tags.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, tag) in tags.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            tag.name,
            plural(tag.count, "post")
        ));
        lines.push(format!("{}/blog/tags/{}", indent(1), tag.slug));
    }
    lines
}

pub fn print_tags_output(tags: &[TagWithCount]) {
    for line in format_tags_output(tags) {
        println!("{}", line);
    }
}

// ============================================================================
// Search
// ============================================================================

pub fn format_search_output(query: &str, page: &PostPage<'_>) -> Vec<String> {
    let mut lines = vec![format!(
        "Search \"{}\": {}, page {} of {}",
        query,
        plural(page.total_posts, "match"),
        page.page,
        page.total_pages
    )];

    for (i, post) in page.posts.iter().enumerate() {
        lines.extend(post_entry(i + 1, post));
        if !post.data.brief.is_empty() {
            lines.push(format!("{}{}", indent(1), truncate_desc(&post.data.brief, 60)));
        }
    }

    if page.has_previous() || page.has_next() {
        lines.push(String::new());
    }
    if page.has_previous() {
        lines.push(format!("Previous results: --page {}", page.page - 1));
    }
    if page.has_next() {
        lines.push(format!("More results: --page {}", page.page + 1));
    }
    lines
}

pub fn print_search_output(query: &str, page: &PostPage<'_>) {
    for line in format_search_output(query, page) {
        println!("{}", line);
    }
}

// ============================================================================
// Layout
// ============================================================================

pub fn format_bento_output(slots: &[GridSpanResult]) -> Vec<String> {
    let mut lines = vec!["Bento grid".to_string()];
    for (i, slot) in slots.iter().enumerate() {
        lines.push(format!(
            "{} {} {} {}",
            format_index(i + 1),
            slot.desktop,
            slot.aspect_class,
            slot.height
        ));
    }
    lines
}

pub fn print_bento_output(slots: &[GridSpanResult]) {
    for line in format_bento_output(slots) {
        println!("{}", line);
    }
}

pub fn format_image_check(url: &str, origin: Option<ImageOrigin>) -> Vec<String> {
    match origin {
        Some(origin) => vec![url.to_string(), format!("{}Origin: {}", indent(1), origin.label())],
        None => vec![url.to_string(), format!("{}Rejected: not a usable image URL", indent(1))],
    }
}

pub fn print_image_check(url: &str, origin: Option<ImageOrigin>) {
    for line in format_image_check(url, origin) {
        println!("{}", line);
    }
}

// ============================================================================
