//! Pagination driver
//!
//! Splits the ordered photo list into fixed-size pages and lays each page
//! out independently. A page whose primary layout fails is replaced
//! wholesale by the fixed grid; the other pages are unaffected.

use crate::engine::LayoutEngine;
use crate::grid::grid_layout;
use crate::types::{ImageInfo, LayoutError, LayoutMethod, PageBatch, PagePlan, Rect, Result};

/// Number of pages needed for `total` photos at `per_page` photos each.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Slice `images` into contiguous pages of at most `photos_per_page`.
pub fn paginate(images: &[ImageInfo], photos_per_page: usize) -> Result<Vec<PageBatch<'_>>> {
    if photos_per_page == 0 {
        return Err(LayoutError::InvalidPageCapacity);
    }

    Ok(images
        .chunks(photos_per_page)
        .enumerate()
        .map(|(index, images)| PageBatch { index, images })
        .collect())
}

/// Lay out every page with `primary`, falling back to the fixed grid per page.
///
/// # Arguments
/// * `images` - All photos in document order
/// * `photos_per_page` - Page capacity (at least 1)
/// * `area` - Usable page rectangle, identical for every page
/// * `primary` - Engine tried first on each page
pub fn plan_pages(
    images: &[ImageInfo],
    photos_per_page: usize,
    area: Rect,
    primary: &dyn LayoutEngine,
) -> Result<Vec<PagePlan>> {
    let pages = paginate(images, photos_per_page)?;

    Ok(pages
        .into_iter()
        .map(|batch| match primary.layout(batch.images, area) {
            Ok(placements) => {
                let dropped = batch.images.len().saturating_sub(placements.len());
                PagePlan {
                    index: batch.index,
                    placements,
                    method: LayoutMethod::Adaptive,
                    dropped,
                }
            }
            Err(err) => {
                log::warn!(
                    "Page {}: {} layout failed ({}), using grid layout",
                    batch.index + 1,
                    primary.name(),
                    err
                );
                grid_page(&batch, area, LayoutMethod::GridFallback)
            }
        })
        .collect())
}

/// Lay out every page with the fixed grid.
pub fn plan_pages_grid_only(
    images: &[ImageInfo],
    photos_per_page: usize,
    area: Rect,
) -> Result<Vec<PagePlan>> {
    let pages = paginate(images, photos_per_page)?;

    Ok(pages
        .iter()
        .map(|batch| grid_page(batch, area, LayoutMethod::Grid))
        .collect())
}

fn grid_page(batch: &PageBatch<'_>, area: Rect, method: LayoutMethod) -> PagePlan {
    let outcome = grid_layout(batch.images, area);
    PagePlan {
        index: batch.index,
        placements: outcome.placements,
        method,
        dropped: outcome.dropped,
    }
}
