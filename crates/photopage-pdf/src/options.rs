use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_PHOTOS_PER_PAGE, DEFAULT_TITLE};
use crate::types::*;
use photopage_layout::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (portrait for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Photo page configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhotoPageOptions {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Uniform margin on every side of the page
    pub margin_mm: f32,
    pub photos_per_page: usize,
    /// Document title written to the PDF info dictionary
    pub title: String,
}

impl Default for PhotoPageOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            photos_per_page: DEFAULT_PHOTOS_PER_PAGE,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl PhotoPageOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PhotoPageError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PhotoPageError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size in millimetres, orientation applied
    pub fn page_size_mm(&self) -> (f32, f32) {
        self.paper_size
            .dimensions_with_orientation(self.orientation)
    }

    /// The printable rectangle inside the margins
    pub fn content_area(&self) -> Rect {
        let (width, height) = self.page_size_mm();
        Rect::new(
            self.margin_mm,
            self.margin_mm,
            width - 2.0 * self.margin_mm,
            height - 2.0 * self.margin_mm,
        )
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.photos_per_page == 0 {
            return Err(PhotoPageError::Config(
                "Photos per page must be at least 1".to_string(),
            ));
        }

        let (width, height) = self.page_size_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(PhotoPageError::Config(format!(
                "Page size must be positive, got {} x {} mm",
                width, height
            )));
        }

        if !(self.margin_mm >= 0.0) {
            return Err(PhotoPageError::Config(
                "Margin must not be negative".to_string(),
            ));
        }

        if !self.content_area().has_positive_area() {
            return Err(PhotoPageError::Config(format!(
                "A {} mm margin leaves no room on a {} x {} mm page",
                self.margin_mm, width, height
            )));
        }

        Ok(())
    }
}
