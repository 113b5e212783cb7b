use photopage_layout::{ImageInfo, LayoutError, PagePlan, PhotoId, Rect};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoPageError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No photos to place")]
    NoPhotos,
    #[error("{name} is {size} bytes, over the {limit} byte limit")]
    PhotoTooLarge { name: String, size: u64, limit: u64 },
    #[error("{0} is not a supported image")]
    UnsupportedFormat(String),
    #[error("Photo {0} is not in the photo set")]
    MissingPhoto(PhotoId),
}

pub type Result<T> = std::result::Result<T, PhotoPageError>;

/// An encoded image with its probed size, not yet added to a library
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// File name shown in logs
    pub name: String,
    pub format: image::ImageFormat,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Encoded file contents, shared between snapshots
    pub bytes: Arc<[u8]>,
}

/// A photo with a stable identity
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub data: ImageData,
}

impl Photo {
    pub fn new(id: PhotoId, data: ImageData) -> Self {
        Self { id, data }
    }

    /// The geometry layout works with
    pub fn info(&self) -> ImageInfo {
        ImageInfo::new(self.id, self.data.width, self.data.height)
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}

/// Layout for a whole document, ready for assembly
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentPlan {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Usable area shared by every page
    pub content_area: Rect,
    pub pages: Vec<PagePlan>,
}

/// What happened while drawing photos into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyReport {
    pub pages: usize,
    pub placed_images: usize,
    /// Photos that failed to embed and were left out
    pub skipped_images: usize,
}

/// Statistics computed before generating
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStatistics {
    pub photos: usize,
    pub pages: usize,
    pub photos_on_last_page: usize,
    /// Most photos the fallback grid can hold on one page
    pub fallback_capacity: usize,
    /// Photos per page exceeds what the fallback grid can hold
    pub fallback_may_drop: bool,
}

/// Summary of a finished plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    pub pages: usize,
    pub placed: usize,
    pub dropped: usize,
    /// Pages where the adaptive layout failed and the grid was used
    pub fallback_pages: usize,
}
