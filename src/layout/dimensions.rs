//! Pure calculation functions for responsive card image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::LayoutError;
use serde::Serialize;

/// Fixed breakpoint widths in pixels.
pub const MOBILE_WIDTH: u32 = 640;
pub const TABLET_WIDTH: u32 = 1024;
pub const DESKTOP_WIDTH: u32 = 1920;

/// Width and height of one breakpoint rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Precomputed image sizes for the three breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDimensions {
    pub mobile: Size,
    pub tablet: Size,
    pub desktop: Size,
    /// The parsed ratio echoed back as `"<w>/<h>"`.
    pub aspect_ratio: String,
}

/// Parse a `"<w>/<h>"` ratio into its two positive components.
///
/// Whitespace around either number is tolerated; anything else that isn't
/// exactly two finite positive numbers separated by one slash is rejected.
pub fn parse_aspect_ratio(aspect_ratio: &str) -> Result<(f64, f64), LayoutError> {
    let invalid = || LayoutError::InvalidAspectRatio(aspect_ratio.to_string());

    let mut parts = aspect_ratio.split('/');
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let parse = |s: &str| -> Result<f64, LayoutError> {
        let value: f64 = s.trim().parse().map_err(|_| invalid())?;
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(invalid())
        }
    };

    Ok((parse(w)?, parse(h)?))
}

/// Calculate image dimensions for each breakpoint from an aspect ratio.
///
/// Widths are fixed per breakpoint; heights follow the ratio, rounded to the
/// nearest pixel. `grid_position` is validated but does not change the output.
///
/// # Examples
/// ```
/// # use folio::layout::calculate_image_dimensions;
/// let dims = calculate_image_dimensions("16/9", 0).unwrap();
/// assert_eq!((dims.mobile.width, dims.mobile.height), (640, 360));
/// assert_eq!((dims.desktop.width, dims.desktop.height), (1920, 1080));
///
/// assert!(calculate_image_dimensions("16:9", 0).is_err());
/// assert!(calculate_image_dimensions("16/9", -1).is_err());
/// ```
pub fn calculate_image_dimensions(
    aspect_ratio: &str,
    grid_position: i64,
) -> Result<ImageDimensions, LayoutError> {
    let (ratio_w, ratio_h) = parse_aspect_ratio(aspect_ratio)?;
    if grid_position < 0 {
        return Err(LayoutError::InvalidGridPosition(grid_position));
    }

    let ratio = ratio_w / ratio_h;
    let size_for = |width: u32| Size {
        width,
        // Extreme panoramas would otherwise round to a zero-height image
        height: ((width as f64 / ratio).round() as u32).max(1),
    };

    Ok(ImageDimensions {
        mobile: size_for(MOBILE_WIDTH),
        tablet: size_for(TABLET_WIDTH),
        desktop: size_for(DESKTOP_WIDTH),
        aspect_ratio: format!("{ratio_w}/{ratio_h}"),
    })
}
