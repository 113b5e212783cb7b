use crate::options::PhotoPageOptions;
use crate::types::*;
use photopage_layout::constants::MAX_GRID_CAPACITY;
use photopage_layout::{LayoutMethod, total_pages};

/// Calculate page statistics for `photo_count` photos before generating
pub fn calculate_statistics(
    photo_count: usize,
    options: &PhotoPageOptions,
) -> Result<GenerationStatistics> {
    options.validate()?;

    if photo_count == 0 {
        return Err(PhotoPageError::NoPhotos);
    }

    let per_page = options.photos_per_page;
    let pages = total_pages(photo_count, per_page);
    let photos_on_last_page = photo_count - (pages - 1) * per_page;

    Ok(GenerationStatistics {
        photos: photo_count,
        pages,
        photos_on_last_page,
        fallback_capacity: MAX_GRID_CAPACITY,
        fallback_may_drop: per_page > MAX_GRID_CAPACITY,
    })
}

/// Summarize what a plan placed, dropped and fell back on
pub fn summarize(plan: &DocumentPlan) -> PlanSummary {
    plan.pages
        .iter()
        .fold(PlanSummary::default(), |mut summary, page| {
            summary.pages += 1;
            summary.placed += page.placements.len();
            summary.dropped += page.dropped;
            if page.method == LayoutMethod::GridFallback {
                summary.fallback_pages += 1;
            }
            summary
        })
}
