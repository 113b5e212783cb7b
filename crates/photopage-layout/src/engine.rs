//! Pluggable page layout engines

use crate::adaptive::adaptive_layout;
use crate::grid::grid_layout;
use crate::types::{ImageInfo, Placement, Rect, Result};

/// Something that can lay out one page of photos.
///
/// The pagination driver treats any `Err` as a reason to fall back to the
/// fixed grid for that page.
pub trait LayoutEngine {
    fn layout(&self, images: &[ImageInfo], area: Rect) -> Result<Vec<Placement>>;

    /// Short name used in log messages
    fn name(&self) -> &'static str;
}

/// Count-keyed strategies from [`crate::adaptive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveLayout;

impl LayoutEngine for AdaptiveLayout {
    fn layout(&self, images: &[ImageInfo], area: Rect) -> Result<Vec<Placement>> {
        adaptive_layout(images, area)
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}

/// The fixed grid from [`crate::grid`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl LayoutEngine for GridLayout {
    fn layout(&self, images: &[ImageInfo], area: Rect) -> Result<Vec<Placement>> {
        Ok(grid_layout(images, area).placements)
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}
