//! Bento grid rhythm for the blog index.
//!
//! Cards cycle through a fixed six-slot pattern on a five-column desktop grid.
//! Each pair of consecutive rows sums to five columns, so the grid never leaves
//! holes:
//!
//! ```text
//! | 3 ─ 16/9 | 2 ─ 4/3 |
//! | 5 ─ 21/9           |
//! | 2 ─ 3/2 | 3 ─ 3/4  |
//! | 5 ─ 2/1            |
//! ```

use serde::Serialize;

/// Layout descriptor for one card: Tailwind classes plus the raw ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpanResult {
    /// Column span class applied at the desktop breakpoint.
    pub desktop: &'static str,
    pub aspect_class: &'static str,
    /// `"<w>/<h>"`, suitable for [`calculate_image_dimensions`](super::calculate_image_dimensions).
    pub aspect_ratio: &'static str,
    pub height: &'static str,
}

const fn slot(
    desktop: &'static str,
    aspect_class: &'static str,
    aspect_ratio: &'static str,
    height: &'static str,
) -> GridSpanResult {
    GridSpanResult {
        desktop,
        aspect_class,
        aspect_ratio,
        height,
    }
}

pub const BENTO_PATTERN: [GridSpanResult; 6] = [
    slot("md:col-span-3", "aspect-[16/9]", "16/9", "h-64"),
    slot("md:col-span-2", "aspect-[4/3]", "4/3", "h-48"),
    slot("md:col-span-5", "aspect-[21/9]", "21/9", "h-56"),
    slot("md:col-span-2", "aspect-[3/2]", "3/2", "h-48"),
    slot("md:col-span-3", "aspect-[3/4]", "3/4", "h-64"),
    slot("md:col-span-5", "aspect-[2/1]", "2/1", "h-40"),
];

/// Layout descriptor for the card at `index` (0-based post position).
pub fn get_bento_grid_span(index: usize) -> GridSpanResult {
    BENTO_PATTERN[index % BENTO_PATTERN.len()]
}

/// Descriptors for the first `count` cards, in order.
pub fn bento_layout(count: usize) -> Vec<GridSpanResult> {
    (0..count).map(get_bento_grid_span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::calculate_image_dimensions;

    #[test]
    fn literal_pattern() {
        let expected = [
            ("md:col-span-3", "16/9", "h-64"),
            ("md:col-span-2", "4/3", "h-48"),
            ("md:col-span-5", "21/9", "h-56"),
            ("md:col-span-2", "3/2", "h-48"),
            ("md:col-span-3", "3/4", "h-64"),
            ("md:col-span-5", "2/1", "h-40"),
        ];
        for (n, (desktop, ratio, height)) in expected.iter().enumerate() {
            let span = get_bento_grid_span(n);
            assert_eq!(span.desktop, *desktop, "slot {n}");
            assert_eq!(span.aspect_ratio, *ratio, "slot {n}");
            assert_eq!(span.aspect_class, format!("aspect-[{ratio}]"), "slot {n}");
            assert_eq!(span.height, *height, "slot {n}");
        }
    }

    #[test]
    fn repeats_every_six() {
        for n in 0..60 {
            assert_eq!(get_bento_grid_span(n), get_bento_grid_span(n + 6));
        }
    }

    #[test]
    fn large_indices_wrap() {
        let n = 1usize << 31;
        assert_eq!(get_bento_grid_span(n), BENTO_PATTERN[n % 6]);
        assert_eq!(get_bento_grid_span(usize::MAX), BENTO_PATTERN[usize::MAX % 6]);
    }

    #[test]
    fn row_pairs_fill_five_columns() {
        let span = |s: &GridSpanResult| -> u32 {
            s.desktop.trim_start_matches("md:col-span-").parse().unwrap()
        };
        let total: u32 = BENTO_PATTERN.iter().map(span).sum();
        assert_eq!(total % 5, 0);
    }

    #[test]
    fn every_slot_ratio_is_a_valid_dimension_input() {
        for slot in &BENTO_PATTERN {
            assert!(calculate_image_dimensions(slot.aspect_ratio, 0).is_ok());
        }
    }

    #[test]
    fn layout_follows_pattern() {
        let layout = bento_layout(8);
        assert_eq!(layout.len(), 8);
        assert_eq!(layout[6], BENTO_PATTERN[0]);
        assert_eq!(layout[7], BENTO_PATTERN[1]);
        assert!(bento_layout(0).is_empty());
    }
}
