//! Merging normalized sources into the blog stream, plus paging and search.

use crate::types::LightweightPost;
use serde::Serialize;

/// Concatenate post lists in argument order and sort newest first.
///
/// The sort is stable: posts with equal `publishedAt` keep their
/// concatenation order. Nothing is deduplicated.
pub fn merge_and_sort_posts<I>(sources: I) -> Vec<LightweightPost>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = LightweightPost>,
{
    let mut merged: Vec<LightweightPost> = sources.into_iter().flatten().collect();
    merged.sort_by(|a, b| b.data.published_at.cmp(&a.data.published_at));
    merged
}

/// One page of the blog index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage<'a> {
    pub posts: &'a [LightweightPost],
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
}

impl PostPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out page `page` (1-based) of `per_page` posts.
///
/// Returns `None` for page 0, a zero page size, or a page past the end. An
/// empty list still has one (empty) page so the index can render.
pub fn paginate(posts: &[LightweightPost], page: usize, per_page: usize) -> Option<PostPage<'_>> {
    if page == 0 || per_page == 0 {
        return None;
    }
    let total_pages = posts.len().div_ceil(per_page).max(1);
    if page > total_pages {
        return None;
    }
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(posts.len());
    Some(PostPage {
        posts: &posts[start..end],
        page,
        total_pages,
        total_posts: posts.len(),
    })
}

/// Case-insensitive substring search over title, brief, and tag names.
///
/// A blank query matches everything. Order is preserved.
pub fn search_posts<'a>(posts: &'a [LightweightPost], query: &str) -> Vec<&'a LightweightPost> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }
    posts
        .iter()
        .filter(|post| {
            post.data.title.to_lowercase().contains(&needle)
                || post.data.brief.to_lowercase().contains(&needle)
                || post
                    .data
                    .tags
                    .iter()
                    .any(|t| t.name.to_lowercase().contains(&needle))
        })
        .collect()
}
