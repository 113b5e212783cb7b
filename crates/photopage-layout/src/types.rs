//! Layout data types
//!
//! Coordinates are in millimetres with the origin at the top-left corner of
//! the page and y growing downward. The PDF renderer flips to PDF space.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("No images to lay out")]
    EmptyInput,
    #[error("Photos per page must be at least 1")]
    InvalidPageCapacity,
    #[error("Layout produced a degenerate cell for photo {photo}")]
    DegenerateCell { photo: PhotoId },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Handle to a photo known to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoId(pub u64);

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The geometric view of a photo: the only thing layout looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageInfo {
    pub id: PhotoId,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

impl ImageInfo {
    pub fn new(id: PhotoId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Landscape includes square images
    pub fn is_landscape(&self) -> bool {
        self.aspect_ratio() >= 1.0
    }
}

/// A rectangular area in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point (x, y)
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Shrink by `amount` on every side.
    ///
    /// The inset is capped at a quarter of the shorter side, so a rect with
    /// positive area always keeps at least half of each dimension.
    pub fn inset(&self, amount: f32) -> Rect {
        let amount = amount.min(self.width.min(self.height) / 4.0);
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    pub fn has_positive_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Whether `other` lies inside this rect, allowing `tolerance` of float slop
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Final position of one photo on a page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub photo: PhotoId,
    /// Where the photo is drawn, in page coordinates
    pub rect: Rect,
    /// Clockwise rotation about the rect center. Layout strategies emit 0.
    pub rotation_degrees: f32,
}

impl Placement {
    pub fn new(photo: PhotoId, rect: Rect) -> Self {
        Self {
            photo,
            rect,
            rotation_degrees: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees != 0.0
    }
}

/// Which layout produced a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMethod {
    /// The primary engine succeeded
    Adaptive,
    /// The primary engine failed and the fixed grid replaced it
    GridFallback,
    /// Fixed grid was requested for every page
    Grid,
}

/// A contiguous run of photos destined for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageBatch<'a> {
    /// Zero-based page number
    pub index: usize,
    pub images: &'a [ImageInfo],
}

/// Layout result for one page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagePlan {
    /// Zero-based page number
    pub index: usize,
    pub placements: Vec<Placement>,
    pub method: LayoutMethod,
    /// Photos on this page that did not fit the grid
    pub dropped: usize,
}
