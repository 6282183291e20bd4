//! Tag indexes for the `/blog/tags` pages.
//!
//! A tag's slug is its identity. When two posts spell the same slug
//! differently, the first spelling encountered wins; nothing is reconciled.
//! Listings are ordered by name with a Unicode-aware comparison: accents and
//! case only decide between names that are otherwise equal.

use crate::types::{LightweightPost, Tag, TagWithCount};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Collation in three tiers: base letters, then accents, then case
/// (lowercase first). Bytes break any remaining tie.
fn by_name(a: &str, b: &str) -> Ordering {
    let (a_key, b_key) = (CollationKey::new(a), CollationKey::new(b));
    a_key
        .base
        .cmp(&b_key.base)
        .then_with(|| a_key.accented.cmp(&b_key.accented))
        .then_with(|| a_key.uppercase.cmp(&b_key.uppercase))
        .then_with(|| a.cmp(b))
}

struct CollationKey {
    /// Lowercased, accents stripped.
    base: String,
    /// Lowercased, decomposed with accents kept.
    accented: String,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let decomposed: String = name.nfd().collect();
        Self {
            base: decomposed
                .chars()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            accented: decomposed.chars().flat_map(char::to_lowercase).collect(),
            uppercase: name.chars().map(char::is_uppercase).collect(),
        }
    }
}

/// Every distinct tag across `posts`, sorted by name.
pub fn get_all_tags(posts: &[LightweightPost]) -> Vec<Tag> {
    get_tags_with_count(posts)
        .into_iter()
        .map(|t| Tag {
            name: t.name,
            slug: t.slug,
        })
        .collect()
}

/// Every distinct tag with the number of posts carrying it, sorted by name.
///
/// One pass over the posts. A post that lists the same slug twice counts once,
/// so `count` always matches [`filter_posts_by_tag`].
pub fn get_tags_with_count(posts: &[LightweightPost]) -> Vec<TagWithCount> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut tags: Vec<TagWithCount> = Vec::new();

    for post in posts {
        let mut seen_in_post: HashSet<&str> = HashSet::new();
        for tag in &post.data.tags {
            if !seen_in_post.insert(tag.slug.as_str()) {
                continue;
            }
            match position.get(tag.slug.as_str()) {
                Some(&i) => tags[i].count += 1,
                None => {
                    position.insert(tag.slug.as_str(), tags.len());
                    tags.push(TagWithCount {
                        name: tag.name.clone(),
                        slug: tag.slug.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort: identical names keep first-seen order.
    tags.sort_by(|a, b| by_name(&a.name, &b.name));
    tags
}

/// Posts carrying the tag `slug`, in their original order.
pub fn filter_posts_by_tag<'a>(posts: &'a [LightweightPost], slug: &str) -> Vec<&'a LightweightPost> {
    if slug.is_empty() {
        return Vec::new();
    }
    posts.iter().filter(|post| post.has_tag(slug)).collect()
}

/// Look up a tag by slug. Not finding one is a normal outcome.
pub fn get_tag_by_slug(posts: &[LightweightPost], slug: &str) -> Option<Tag> {
    if slug.is_empty() {
        return None;
    }
    get_all_tags(posts).into_iter().find(|t| t.slug == slug)
}
