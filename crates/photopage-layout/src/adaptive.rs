//! Adaptive layout engine
//!
//! Picks a strategy from the photo count and splits the page area
//! non-uniformly, using aspect ratios to decide between horizontal and
//! vertical splits:
//! - 1 photo: fit the whole area
//! - 2 photos: stacked, side by side, or a proportional split
//! - 3-4 photos: 2-column grid, landscape first, fitted into padded cells
//! - 5 photos: 2x2 grid plus one full-width photo underneath
//! - 6+ photos: uniform collage grid
//!
//! The pair, five-piece and collage strategies fill their cells exactly.

use std::cmp::Ordering;

use crate::constants::{
    COLLAGE_GAP_MM, CONTAINMENT_TOLERANCE_MM, GRID_PADDING_MM, LANDSCAPE_PAIR_RATIO, PAIR_GAP_MM,
    PORTRAIT_PAIR_RATIO,
};
use crate::geometry::{fit_centered, grid_cell};
use crate::types::{ImageInfo, LayoutError, Placement, Rect, Result};

// =============================================================================
// Strategy Selection
// =============================================================================

/// Layout strategy, chosen purely by photo count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One photo fit into the whole area
    Single,
    /// Two photos sharing the area
    Pair,
    /// Three or four photos on a 2-column grid
    SmallGrid,
    /// Five photos: 2x2 plus a full-width row
    FivePiece,
    /// Six or more photos on a uniform grid
    Collage,
}

impl Strategy {
    /// Strategy for `count` photos, or `None` when there is nothing to lay out
    pub fn for_count(count: usize) -> Option<Strategy> {
        match count {
            0 => None,
            1 => Some(Strategy::Single),
            2 => Some(Strategy::Pair),
            3..=4 => Some(Strategy::SmallGrid),
            5 => Some(Strategy::FivePiece),
            _ => Some(Strategy::Collage),
        }
    }

    /// Run this strategy. Expects the photo count it was selected for.
    pub fn apply(self, images: &[ImageInfo], area: Rect) -> Vec<Placement> {
        match self {
            Strategy::Single => layout_single(images, area),
            Strategy::Pair => layout_pair(images, area),
            Strategy::SmallGrid => layout_small_grid(images, area),
            Strategy::FivePiece => layout_five(images, area),
            Strategy::Collage => layout_collage(images, area),
        }
    }
}

/// Lay out one page of photos, choosing the strategy from the count.
///
/// The engine checks its own output: any placement with non-positive size
/// or outside `area` turns into [`LayoutError::DegenerateCell`] so the
/// caller can fall back to the fixed grid.
pub fn adaptive_layout(images: &[ImageInfo], area: Rect) -> Result<Vec<Placement>> {
    let strategy = Strategy::for_count(images.len()).ok_or(LayoutError::EmptyInput)?;
    log::debug!("Laying out {} photos with {:?}", images.len(), strategy);

    let placements = strategy.apply(images, area);
    validate_placements(&placements, area)?;
    Ok(placements)
}

fn validate_placements(placements: &[Placement], area: Rect) -> Result<()> {
    for placement in placements {
        if !placement.rect.has_positive_area()
            || !area.contains_rect(&placement.rect, CONTAINMENT_TOLERANCE_MM)
        {
            return Err(LayoutError::DegenerateCell {
                photo: placement.photo,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Ordering
// =============================================================================

/// Widest first. Stable, so equal ratios keep input order.
fn sorted_by_ratio_desc(images: &[ImageInfo]) -> Vec<ImageInfo> {
    let mut sorted = images.to_vec();
    sorted.sort_by(|a, b| b.aspect_ratio().total_cmp(&a.aspect_ratio()));
    sorted
}

/// Landscape photos first, each group widest first.
fn sorted_landscape_first(images: &[ImageInfo]) -> Vec<ImageInfo> {
    let mut sorted = images.to_vec();
    sorted.sort_by(|a, b| match (a.is_landscape(), b.is_landscape()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.aspect_ratio().total_cmp(&a.aspect_ratio()),
    });
    sorted
}

// =============================================================================
// Strategies
// =============================================================================

fn layout_single(images: &[ImageInfo], area: Rect) -> Vec<Placement> {
    images
        .iter()
        .take(1)
        .map(|image| Placement::new(image.id, fit_centered(image.aspect_ratio(), area)))
        .collect()
}

/// How a two-photo page is divided
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairSplit {
    /// Both landscape: stacked top and bottom
    Horizontal,
    /// Both portrait: side by side
    Vertical,
    /// Mixed: the longer page side is divided by the first photo's share
    Proportional { first_share: f32 },
}

/// Classify a pair already sorted widest first.
pub fn classify_pair(first: &ImageInfo, second: &ImageInfo) -> PairSplit {
    let (r1, r2) = (first.aspect_ratio(), second.aspect_ratio());

    if r1 < PORTRAIT_PAIR_RATIO && r2 < PORTRAIT_PAIR_RATIO {
        PairSplit::Vertical
    } else if r1 > LANDSCAPE_PAIR_RATIO && r2 > LANDSCAPE_PAIR_RATIO {
        PairSplit::Horizontal
    } else {
        PairSplit::Proportional {
            first_share: r1 / (r1 + r2),
        }
    }
}

fn layout_pair(images: &[ImageInfo], area: Rect) -> Vec<Placement> {
    let sorted = sorted_by_ratio_desc(images);
    let (first, second) = match sorted.as_slice() {
        [first, second, ..] => (*first, *second),
        _ => return layout_single(&sorted, area),
    };

    let half_gap = PAIR_GAP_MM / 2.0;

    let (rect1, rect2) = match classify_pair(&first, &second) {
        PairSplit::Vertical => split_columns(area, area.width / 2.0, half_gap),
        PairSplit::Horizontal => split_rows(area, area.height / 2.0, half_gap),
        PairSplit::Proportional { first_share } => {
            if area.width > area.height {
                split_columns(area, area.width * first_share, half_gap)
            } else {
                split_rows(area, area.height * first_share, half_gap)
            }
        }
    };

    vec![Placement::new(first.id, rect1), Placement::new(second.id, rect2)]
}

/// Left/right halves divided at `split` from the left edge
fn split_columns(area: Rect, split: f32, half_gap: f32) -> (Rect, Rect) {
    (
        Rect::new(area.x, area.y, split - half_gap, area.height),
        Rect::new(
            area.x + split + half_gap,
            area.y,
            area.width - split - half_gap,
            area.height,
        ),
    )
}

/// Top/bottom halves divided at `split` from the top edge
fn split_rows(area: Rect, split: f32, half_gap: f32) -> (Rect, Rect) {
    (
        Rect::new(area.x, area.y, area.width, split - half_gap),
        Rect::new(
            area.x,
            area.y + split + half_gap,
            area.width,
            area.height - split - half_gap,
        ),
    )
}

fn layout_small_grid(images: &[ImageInfo], area: Rect) -> Vec<Placement> {
    let cols = 2;
    let rows = images.len().div_ceil(cols);

    sorted_landscape_first(images)
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let cell = grid_cell(area, cols, rows, index / cols, index % cols);
            let inner = cell.inset(GRID_PADDING_MM);
            Placement::new(image.id, fit_centered(image.aspect_ratio(), inner))
        })
        .collect()
}

fn layout_five(images: &[ImageInfo], area: Rect) -> Vec<Placement> {
    let sorted = sorted_by_ratio_desc(images);
    let half_gap = COLLAGE_GAP_MM / 2.0;
    let (cols, rows) = (2, 3);

    let mut placements: Vec<Placement> = sorted
        .iter()
        .take(4)
        .enumerate()
        .map(|(index, image)| {
            let cell = grid_cell(area, cols, rows, index / cols, index % cols);
            Placement::new(image.id, cell.inset(half_gap))
        })
        .collect();

    if let Some(last) = sorted.get(4) {
        let cell_height = area.height / rows as f32;
        let bottom_row = Rect::new(
            area.x,
            area.y + 2.0 * cell_height,
            area.width,
            cell_height,
        );
        placements.push(Placement::new(last.id, bottom_row.inset(half_gap)));
    }

    placements
}

/// Columns used by the collage strategy
pub fn collage_columns(count: usize) -> usize {
    if count <= 6 { 2 } else { 3 }
}

fn layout_collage(images: &[ImageInfo], area: Rect) -> Vec<Placement> {
    let cols = collage_columns(images.len());
    let rows = images.len().div_ceil(cols);
    let half_gap = COLLAGE_GAP_MM / 2.0;

    sorted_by_ratio_desc(images)
        .iter()
        .take(cols * rows)
        .enumerate()
        .map(|(index, image)| {
            let cell = grid_cell(area, cols, rows, index / cols, index % cols);
            Placement::new(image.id, cell.inset(half_gap))
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
