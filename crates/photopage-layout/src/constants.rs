//! Shared layout constants
//!
//! All lengths are in millimetres.

// =============================================================================
// Spacing
// =============================================================================

/// Inset applied to every side of a fixed-grid or small-grid cell
pub const GRID_PADDING_MM: f32 = 3.0;

/// Space between the two photos of a two-photo page
pub const PAIR_GAP_MM: f32 = 5.0;

/// Space between neighbouring collage cells (half on each side of a cell)
pub const COLLAGE_GAP_MM: f32 = 4.0;

// =============================================================================
// Pair Classification
// =============================================================================

/// Both photos wider than this stack top and bottom
pub const LANDSCAPE_PAIR_RATIO: f32 = 1.2;

/// Both photos narrower than this sit side by side
pub const PORTRAIT_PAIR_RATIO: f32 = 0.8;

// =============================================================================
// Validation
// =============================================================================

/// Float slop allowed when checking that a placement stays inside its area
pub const CONTAINMENT_TOLERANCE_MM: f32 = 1e-3;

/// Largest grid the fixed-grid layout ever uses (3 columns x 4 rows)
pub const MAX_GRID_CAPACITY: usize = 12;
