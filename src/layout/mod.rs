//! Per-card layout for the blog index — pure functions, no I/O.
//!
//! | Concern | Function |
//! |---|---|
//! | **Grid rhythm** | [`get_bento_grid_span`] — six-slot repeating pattern |
//! | **Image sizes** | [`calculate_image_dimensions`] — heights at fixed breakpoint widths |
//! | **Image URLs** | [`ImageUrlClassifier`] — passthrough / reject by origin |
//!
//! The renderer calls all three once per card: the bento slot supplies the
//! aspect ratio, the ratio yields breakpoint dimensions, and the classifier
//! vets the cover image URL those dimensions are attached to.

mod bento;
mod dimensions;
pub mod image_url;

use thiserror::Error;

pub use bento::{BENTO_PATTERN, GridSpanResult, bento_layout, get_bento_grid_span};
pub use dimensions::{
    DESKTOP_WIDTH, ImageDimensions, MOBILE_WIDTH, Size, TABLET_WIDTH, calculate_image_dimensions,
    parse_aspect_ratio,
};
pub use image_url::{ImageFormat, ImageOrigin, ImageUrlClassifier, transform_image_url};

/// Caller bugs in layout requests. These fail the build rather than being coerced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid aspect ratio {0:?}: expected \"<width>/<height>\" with positive numbers")]
    InvalidAspectRatio(String),
    #[error("Invalid grid position {0}: must be zero or greater")]
    InvalidGridPosition(i64),
}
