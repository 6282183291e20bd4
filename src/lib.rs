//! # Folio
//!
//! The content pipeline behind a developer portfolio's blog. Posts come from
//! two places: markdown files migrated from Hashnode, and an external
//! freeCodeCamp News author feed. Folio turns both into one chronological
//! stream of uniform records, indexes their tags, and computes the layout
//! data the listing pages need.
//!
//! # Architecture: Scan, Normalize, Merge
//!
//! ```text
//! 1. Scan       content/*.md  →  RawLocalPost    (frontmatter + body)
//!    Read       feed.xml      →  RawFeedPost     (RSS or Atom entries)
//! 2. Normalize  raw records   →  LightweightPost (one shape, defaults filled)
//! 3. Merge      all sources   →  newest-first index (dist/posts.json)
//! ```
//!
//! Everything after the scan and feed read is a pure function over in-memory
//! records, so the pipeline logic is tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content directory and splits frontmatter from body |
//! | [`feed`] | Reads RSS 2.0 / Atom 1.0 documents into raw feed entries |
//! | [`normalize`] | Per-source normalizers into [`types::LightweightPost`] |
//! | [`aggregate`] | Merge and newest-first sort, paging, search |
//! | [`index`] | The whole pipeline in one call, plus JSON output |
//! | [`tags`] | Distinct tags, counts, filtering, lookup by slug |
//! | [`layout`] | Responsive image dimensions, bento grid spans, cover URL checks |
//! | [`config`] | `config.toml` loading, validation, merging over stock defaults |
//! | [`diagnostics`] | Warning/error sink used by the image URL classifier |
//! | [`dates`] | Lenient date parsing for frontmatter and feeds |
//! | [`naming`] | Slugs from file names, URLs and tag names |
//! | [`types`] | The canonical post and tag records |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Raw Shapes Stop at the Normalizer
//!
//! Each source has its own explicitly typed raw record. Missing or null
//! fields are tolerated there and never leak past normalization: every
//! [`types::PostData`] field is filled, so templates never branch on absence
//! except for the cover image and external URL.
//!
//! ## Namespaced Feed Ids
//!
//! Feed posts get a configurable id prefix (`freecodecamp-` by default) so
//! they can never collide with local file ids. The merged index rejects
//! duplicate ids outright.
//!
//! ## Injected Diagnostics
//!
//! The image URL classifier reports through the [`diagnostics::Diagnostics`]
//! trait instead of logging directly. Builds use the `tracing` sink; tests
//! record and assert on what was reported.

pub mod aggregate;
pub mod config;
pub mod dates;
pub mod diagnostics;
pub mod feed;
pub mod index;
pub mod layout;
pub mod naming;
pub mod normalize;
pub mod output;
pub mod scan;
pub mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
