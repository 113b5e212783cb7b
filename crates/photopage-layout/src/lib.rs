//! Layout geometry for placing photos on fixed-size pages
//!
//! Everything here is pure computation over aspect ratios and rectangles:
//! - Geometry helpers (fit-and-center, grid cells)
//! - Fixed-grid layout, the guaranteed-success fallback
//! - Adaptive layout with count-specific strategies
//! - Pagination with per-page fallback

pub mod adaptive;
pub mod constants;
mod engine;
pub mod geometry;
pub mod grid;
pub mod paginate;
mod types;

pub use adaptive::{Strategy, adaptive_layout};
pub use engine::{AdaptiveLayout, GridLayout, LayoutEngine};
pub use geometry::fit_centered;
pub use grid::{GridOutcome, grid_dimensions, grid_layout};
pub use paginate::{paginate, plan_pages, plan_pages_grid_only, total_pages};
pub use types::*;
