//! Source-specific records → the canonical [`LightweightPost`](crate::types::LightweightPost).
//!
//! Two sources feed the blog index, each with its own raw shape ([`raw`]):
//!
//! | Source | Normalizer | `source` tag |
//! |---|---|---|
//! | Local markdown (migrated from Hashnode) | [`normalize_local_posts`] | `hashnode` |
//! | freeCodeCamp News feed | [`normalize_freecodecamp_posts`] | `freecodecamp` |
//!
//! Missing optional fields never fail normalization; every gap has a default.
//! Both normalizers share reading-speed, brief-length, and placeholder settings
//! from [`PostsConfig`](crate::config::PostsConfig).

mod feed;
mod local;
pub mod raw;
pub mod text;

pub use feed::{normalize_freecodecamp_posts, normalize_freecodecamp_posts_at};
pub use local::{normalize_local_posts, normalize_local_posts_with};
pub use raw::{RawFeedPost, RawLocalPost};
