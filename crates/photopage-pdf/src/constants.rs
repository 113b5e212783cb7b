//! Shared constants for photo page generation

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Input Limits
// =============================================================================

/// Largest photo file accepted (10 MiB)
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_MARGIN_MM: f32 = 10.0;

pub const DEFAULT_PHOTOS_PER_PAGE: usize = 4;

pub const DEFAULT_TITLE: &str = "Photos";
