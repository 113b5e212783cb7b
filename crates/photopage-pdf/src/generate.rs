//! Document generation with layered fallback
//!
//! 1. Plan every page with the adaptive engine (per-page grid fallback)
//! 2. Assemble the PDF, skipping photos that fail to embed
//! 3. If anything above fails, plan every page on the grid and assemble once more

use crate::options::PhotoPageOptions;
use crate::render::{Assembled, DocumentAssembler, PdfAssembler};
use crate::types::*;
use lopdf::Document;
use photopage_layout::{AdaptiveLayout, ImageInfo, LayoutEngine, plan_pages, plan_pages_grid_only};
use std::path::Path;

/// A finished document and how it was made
#[derive(Debug)]
pub struct Generated {
    pub document: Document,
    pub plan: DocumentPlan,
    pub report: AssemblyReport,
    /// The first attempt failed and every page was redone on the grid
    pub used_document_fallback: bool,
}

/// Generate a photo PDF with the adaptive layout and `lopdf` assembly.
pub async fn generate(photos: &[Photo], options: &PhotoPageOptions) -> Result<Generated> {
    options.validate()?;

    let photos = photos.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let assembler = PdfAssembler::new(options.title.clone());
        generate_with(&photos, &options, &AdaptiveLayout, &assembler)
    })
    .await?
}

/// Generate with an explicit primary layout engine and assembler.
pub fn generate_with(
    photos: &[Photo],
    options: &PhotoPageOptions,
    primary: &dyn LayoutEngine,
    assembler: &dyn DocumentAssembler,
) -> Result<Generated> {
    options.validate()?;
    if photos.is_empty() {
        return Err(PhotoPageError::NoPhotos);
    }

    let infos: Vec<ImageInfo> = photos.iter().map(Photo::info).collect();

    let first_attempt = plan_document(&infos, options, primary)
        .and_then(|plan| assemble(assembler, plan, photos, false));

    match first_attempt {
        Ok(generated) => Ok(generated),
        Err(err) => {
            log::error!("Document generation failed ({}), retrying with grid layout", err);
            let plan = plan_document_grid_only(&infos, options)?;
            let generated = assemble(assembler, plan, photos, true)?;
            log::info!("Generated document with grid layout after failure");
            Ok(generated)
        }
    }
}

fn assemble(
    assembler: &dyn DocumentAssembler,
    plan: DocumentPlan,
    photos: &[Photo],
    used_document_fallback: bool,
) -> Result<Generated> {
    let Assembled { document, report } = assembler.assemble(&plan, photos)?;
    Ok(Generated {
        document,
        plan,
        report,
        used_document_fallback,
    })
}

/// Lay out every page, falling back to the grid on pages where `primary` fails.
pub fn plan_document(
    images: &[ImageInfo],
    options: &PhotoPageOptions,
    primary: &dyn LayoutEngine,
) -> Result<DocumentPlan> {
    let content_area = options.content_area();
    let pages = plan_pages(images, options.photos_per_page, content_area, primary)?;
    Ok(document_plan(options, pages))
}

/// Lay out every page on the fixed grid.
pub fn plan_document_grid_only(
    images: &[ImageInfo],
    options: &PhotoPageOptions,
) -> Result<DocumentPlan> {
    let content_area = options.content_area();
    let pages = plan_pages_grid_only(images, options.photos_per_page, content_area)?;
    Ok(document_plan(options, pages))
}

fn document_plan(options: &PhotoPageOptions, pages: Vec<photopage_layout::PagePlan>) -> DocumentPlan {
    let (page_width_mm, page_height_mm) = options.page_size_mm();
    DocumentPlan {
        page_width_mm,
        page_height_mm,
        content_area: options.content_area(),
        pages,
    }
}

/// Save the generated document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PhotoPageError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
