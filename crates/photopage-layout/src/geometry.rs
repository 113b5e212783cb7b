//! Rectangle math shared by every layout

use crate::types::Rect;

/// Fit an image of `aspect_ratio` inside `cell` and center it.
///
/// Returns the largest rect with the given aspect ratio that fits entirely
/// inside the cell. Exactly one dimension saturates the cell; the leftover
/// space on the other axis is split evenly on both sides.
///
/// # Arguments
/// * `aspect_ratio` - Image width divided by height
/// * `cell` - The box to fit into (must have positive area)
pub fn fit_centered(aspect_ratio: f32, cell: Rect) -> Rect {
    let (width, height) = if aspect_ratio > cell.width / cell.height {
        // Wider than the cell: width-limited
        (cell.width, cell.width / aspect_ratio)
    } else {
        // Taller than the cell: height-limited
        (cell.height * aspect_ratio, cell.height)
    };

    Rect::new(
        cell.x + (cell.width - width) / 2.0,
        cell.y + (cell.height - height) / 2.0,
        width,
        height,
    )
}

/// Split `area` into a uniform grid and return the cell at (row, col).
pub fn grid_cell(area: Rect, cols: usize, rows: usize, row: usize, col: usize) -> Rect {
    let cell_width = area.width / cols as f32;
    let cell_height = area.height / rows as f32;

    Rect::new(
        area.x + col as f32 * cell_width,
        area.y + row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}
