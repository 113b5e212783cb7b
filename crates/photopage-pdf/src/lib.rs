pub mod constants;
mod generate;
mod library;
mod options;
mod photo;
pub mod render;
mod stats;
mod types;

pub use generate::{
    Generated, generate, generate_with, plan_document, plan_document_grid_only, save_pdf,
};
pub use library::PhotoLibrary;
pub use options::*;
pub use photo::{LoadOutcome, load_photo, load_photos, probe_image};
pub use render::{Assembled, DocumentAssembler, PdfAssembler, assemble_pdf};
pub use stats::{calculate_statistics, summarize};
pub use types::*;

pub use photopage_layout::{
    AdaptiveLayout, GridLayout, ImageInfo, LayoutEngine, LayoutError, LayoutMethod, PagePlan,
    PhotoId, Placement, Rect,
};
