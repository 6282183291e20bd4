//! Reading the external article feed.
//!
//! The freeCodeCamp author feed is RSS 2.0, but any Atom 1.0 document works
//! too: parsing tries RSS first and falls back to Atom. Entries come out as
//! [`RawFeedPost`] records; normalization happens later.
//!
//! | Entry field | RSS | Atom |
//! |---|---|---|
//! | id | `guid` → `link` → position | `id` → position |
//! | url | `link` | alternate `link` |
//! | description | `description` | `summary` |
//! | content | `content:encoded` | `content` |
//! | publishedAt | `pubDate` | `published` → `updated` |
//! | media | `media:content`, `media:thumbnail` | same |
//! | image | image `enclosure` | — |
//! | categories | `category` text as label and term | `category` label/term |

use crate::dates::parse_date;
use crate::normalize::raw::{FeedCategory, FeedEntry, FeedImage, FeedMedia, RawFeedPost};
use chrono::Utc;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not an RSS or Atom feed (rss: {rss}; atom: {atom})")]
    Unrecognized {
        rss: rss::Error,
        atom: atom_syndication::Error,
    },
}

const MEDIA_NAMESPACE: &str = "media";
const MEDIA_ELEMENTS: &[&str] = &["content", "thumbnail"];

pub fn read_feed(path: &Path) -> Result<Vec<RawFeedPost>, FeedError> {
    let content = std::fs::read(path)?;
    let posts = parse_feed(&content)?;
    tracing::debug!(path = %path.display(), entries = posts.len(), "read feed");
    Ok(posts)
}

pub fn parse_feed(content: &[u8]) -> Result<Vec<RawFeedPost>, FeedError> {
    match rss::Channel::read_from(Cursor::new(content)) {
        Ok(channel) => Ok(channel.items.into_iter().enumerate().map(rss_post).collect()),
        Err(rss) => match atom_syndication::Feed::read_from(Cursor::new(content)) {
            Ok(feed) => Ok(feed.entries.into_iter().enumerate().map(atom_post).collect()),
            Err(atom) => Err(FeedError::Unrecognized { rss, atom }),
        },
    }
}

fn rss_post((index, item): (usize, rss::Item)) -> RawFeedPost {
    let id = item
        .guid
        .as_ref()
        .map(|g| g.value.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| item.link.clone().filter(|l| !l.trim().is_empty()))
        .unwrap_or_else(|| index.to_string());

    let image = item
        .enclosure
        .as_ref()
        .filter(|e| e.mime_type.starts_with("image/"))
        .map(|e| FeedImage {
            url: Some(e.url.clone()),
        });

    let categories: Vec<FeedCategory> = item
        .categories
        .iter()
        .map(|c| FeedCategory {
            label: Some(c.name.clone()),
            term: Some(c.name.clone()),
        })
        .collect();

    let media = media_urls(item.extensions.get(MEDIA_NAMESPACE).map(|elements| {
        MEDIA_ELEMENTS
            .iter()
            .filter_map(|name| elements.get(*name))
            .flatten()
            .map(|ext| &ext.attrs)
            .collect::<Vec<_>>()
    }));

    RawFeedPost {
        id,
        data: FeedEntry {
            title: item.title,
            url: item.link,
            description: item.description,
            content: item.content,
            published_at: item.pub_date.as_deref().and_then(parse_date),
            media,
            image,
            categories: (!categories.is_empty()).then_some(categories),
        },
    }
}

fn atom_post((index, entry): (usize, atom_syndication::Entry)) -> RawFeedPost {
    let id = Some(entry.id.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| index.to_string());

    let url = entry
        .links
        .iter()
        .find(|l| l.rel == "alternate")
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone());

    let categories: Vec<FeedCategory> = entry
        .categories
        .iter()
        .map(|c| FeedCategory {
            label: c.label.clone(),
            term: Some(c.term.clone()),
        })
        .collect();

    let media = media_urls(entry.extensions.get(MEDIA_NAMESPACE).map(|elements| {
        MEDIA_ELEMENTS
            .iter()
            .filter_map(|name| elements.get(*name))
            .flatten()
            .map(|ext| &ext.attrs)
            .collect::<Vec<_>>()
    }));

    let published = entry.published.unwrap_or(entry.updated);

    RawFeedPost {
        id,
        data: FeedEntry {
            title: Some(entry.title.value),
            url,
            description: entry.summary.map(|s| s.value),
            content: entry.content.and_then(|c| c.value),
            published_at: Some(published.with_timezone(&Utc)),
            media,
            image: None,
            categories: (!categories.is_empty()).then_some(categories),
        },
    }
}

/// `url` attributes of media elements, in document order.
fn media_urls(elements: Option<Vec<&BTreeMap<String, String>>>) -> Option<Vec<FeedMedia>> {
    let media: Vec<FeedMedia> = elements?
        .into_iter()
        .filter_map(|attrs| attrs.get("url"))
        .map(|url| FeedMedia {
            url: Some(url.clone()),
        })
        .collect();
    (!media.is_empty()).then_some(media)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{date, fixture_feed};

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/"
     xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Feed</title>
    <link>https://example.com</link>
    <description>Test</description>
    <item>
      <title>First</title>
      <link>https://example.com/news/first/</link>
      <guid>g-1</guid>
      <description>Summary</description>
      <content:encoded><![CDATA[<p>Body</p>]]></content:encoded>
      <pubDate>Wed, 15 Jan 2025 10:00:00 +0000</pubDate>
      <category>JavaScript</category>
      <media:thumbnail url="https://cdn.example.com/thumb.png"></media:thumbnail>
    </item>
    <item>
      <link>https://example.com/news/second/</link>
      <pubDate>not a date</pubDate>
    </item>
    <item>
      <title>Third</title>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/">
  <title>Feed</title>
  <id>urn:feed</id>
  <updated>2025-02-01T00:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:entry:1</id>
    <link rel="alternate" href="https://example.com/news/atom-entry/"/>
    <updated>2025-02-01T00:00:00Z</updated>
    <published>2025-01-20T12:00:00Z</published>
    <summary>Atom summary</summary>
    <category term="open-source" label="Open Source"/>
    <media:content url="https://cdn.example.com/atom.png"></media:content>
  </entry>
  <entry>
    <title>Only updated</title>
    <id>urn:entry:2</id>
    <updated>2025-01-05T00:00:00Z</updated>
  </entry>
</feed>"#;

    // =========================================================================
    // RSS
    // =========================================================================

    #[test]
    fn rss_entry_fields() {
        let posts = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(posts.len(), 3);

        let first = &posts[0];
        assert_eq!(first.id, "g-1");
        assert_eq!(first.data.title.as_deref(), Some("First"));
        assert_eq!(first.data.url.as_deref(), Some("https://example.com/news/first/"));
        assert_eq!(first.data.description.as_deref(), Some("Summary"));
        assert_eq!(first.data.content.as_deref(), Some("<p>Body</p>"));
        assert_eq!(first.data.published_at, Some(date("2025-01-15T10:00:00Z")));
        assert_eq!(
            first.data.media,
            Some(vec![FeedMedia {
                url: Some("https://cdn.example.com/thumb.png".into())
            }])
        );
        assert_eq!(
            first.data.categories,
            Some(vec![FeedCategory {
                label: Some("JavaScript".into()),
                term: Some("JavaScript".into()),
            }])
        );
    }

    #[test]
    fn rss_id_falls_back_to_link_then_position() {
        let posts = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(posts[1].id, "https://example.com/news/second/");
        assert_eq!(posts[2].id, "2");
    }

    #[test]
    fn rss_bad_date_is_none() {
        let posts = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(posts[1].data.published_at, None);
        assert_eq!(posts[1].data.categories, None);
        assert_eq!(posts[1].data.media, None);
    }

    #[test]
    fn fixture_feed_reads_enclosure_image() {
        let posts = read_feed(&fixture_feed()).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "65a1f0c2e4b0a1");
        assert_eq!(
            posts[1].data.image,
            Some(FeedImage {
                url: Some("https://assets.example.com/ratios.jpg".into())
            })
        );
        assert_eq!(posts[1].data.media, None);
    }

    // =========================================================================
    // Atom
    // =========================================================================

    #[test]
    fn atom_entry_fields() {
        let posts = parse_feed(ATOM.as_bytes()).unwrap();
        assert_eq!(posts.len(), 2);

        let entry = &posts[0];
        assert_eq!(entry.id, "urn:entry:1");
        assert_eq!(entry.data.url.as_deref(), Some("https://example.com/news/atom-entry/"));
        assert_eq!(entry.data.description.as_deref(), Some("Atom summary"));
        assert_eq!(entry.data.published_at, Some(date("2025-01-20T12:00:00Z")));
        assert_eq!(
            entry.data.categories,
            Some(vec![FeedCategory {
                label: Some("Open Source".into()),
                term: Some("open-source".into()),
            }])
        );
        assert_eq!(
            entry.data.media,
            Some(vec![FeedMedia {
                url: Some("https://cdn.example.com/atom.png".into())
            }])
        );
    }

    #[test]
    fn atom_published_falls_back_to_updated() {
        let posts = parse_feed(ATOM.as_bytes()).unwrap();
        assert_eq!(posts[1].data.published_at, Some(date("2025-01-05")));
        assert_eq!(posts[1].data.url, None);
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn garbage_is_unrecognized() {
        let result = parse_feed(b"<html><body>nope</body></html>");
        assert!(matches!(result, Err(FeedError::Unrecognized { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_feed(Path::new("/nonexistent/feed.xml"));
        assert!(matches!(result, Err(FeedError::Io(_))));
    }
}
