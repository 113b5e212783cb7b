//! Fixed-grid layout
//!
//! A count-keyed row/column table with every photo fit-and-centered in its
//! padded cell. It ignores aspect ratios when choosing the grid, which is
//! what makes it safe to use as the fallback: it cannot fail.

use crate::constants::GRID_PADDING_MM;
use crate::geometry::{fit_centered, grid_cell};
use crate::types::{ImageInfo, Placement, Rect};

/// Result of a fixed-grid pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridOutcome {
    pub placements: Vec<Placement>,
    /// Photos past the grid capacity that were left off the page
    pub dropped: usize,
}

/// Columns and rows used for `count` photos.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    match count {
        0..=1 => (1, 1),
        2 => (2, 1),
        3..=4 => (2, 2),
        5..=6 => (2, 3),
        7..=9 => (3, 3),
        _ => (3, 4),
    }
}

/// Lay out `images` row-major in input order on a fixed grid.
///
/// Photos beyond `cols * rows` are not placed; the number left off is
/// reported in [`GridOutcome::dropped`].
pub fn grid_layout(images: &[ImageInfo], area: Rect) -> GridOutcome {
    let (cols, rows) = grid_dimensions(images.len());
    let capacity = cols * rows;

    let placements = images
        .iter()
        .take(capacity)
        .enumerate()
        .map(|(index, image)| {
            let cell = grid_cell(area, cols, rows, index / cols, index % cols);
            let inner = cell.inset(GRID_PADDING_MM);
            Placement::new(image.id, fit_centered(image.aspect_ratio(), inner))
        })
        .collect();

    let dropped = images.len().saturating_sub(capacity);
    if dropped > 0 {
        log::warn!(
            "Grid layout holds {} photos; {} of {} left off the page",
            capacity,
            dropped,
            images.len()
        );
    }

    GridOutcome {
        placements,
        dropped,
    }
}
