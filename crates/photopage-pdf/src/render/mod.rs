//! PDF assembly
//!
//! Turns a [`DocumentPlan`] into an `lopdf` document:
//! - Embedding photos as Image XObjects (once per document)
//! - Drawing each placement, rotated ones about their own center
//! - Skipping photos that fail to embed without aborting the page

mod page;
mod xobject;

pub use xobject::create_image_xobject;

use crate::constants::mm_to_pt;
use crate::types::*;
use lopdf::{Dictionary, Document, Object};
use page::{PageSize, RenderContext, render_page};

/// A document produced from a plan
#[derive(Debug)]
pub struct Assembled {
    pub document: Document,
    pub report: AssemblyReport,
}

/// Something that turns a plan into an output document.
///
/// Any `Err` here makes the generator retry the whole document with the
/// fixed grid.
pub trait DocumentAssembler {
    fn assemble(&self, plan: &DocumentPlan, photos: &[Photo]) -> Result<Assembled>;
}

/// Assembles PDF documents with `lopdf`
#[derive(Debug, Clone, Default)]
pub struct PdfAssembler {
    /// Written to the document info dictionary when not empty
    pub title: String,
}

impl PdfAssembler {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl DocumentAssembler for PdfAssembler {
    fn assemble(&self, plan: &DocumentPlan, photos: &[Photo]) -> Result<Assembled> {
        assemble_pdf(plan, photos, &self.title)
    }
}

/// Build a PDF with one page per planned page.
pub fn assemble_pdf(plan: &DocumentPlan, photos: &[Photo], title: &str) -> Result<Assembled> {
    let size = PageSize {
        width_pt: mm_to_pt(plan.page_width_mm),
        height_pt: mm_to_pt(plan.page_height_mm),
    };

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut ctx = RenderContext::new(photos);
    let mut page_refs = Vec::new();

    for page in &plan.pages {
        let page_id = render_page(&mut output, &mut ctx, page, size, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    if !title.is_empty() {
        let info_id = output.add_object(Dictionary::from_iter(vec![(
            "Title",
            Object::string_literal(title),
        )]));
        output.trailer.set("Info", info_id);
    }

    output.compress();

    log::info!(
        "Assembled {} pages: {} photos placed, {} skipped",
        ctx.report.pages,
        ctx.report.placed_images,
        ctx.report.skipped_images
    );

    Ok(Assembled {
        document: output,
        report: ctx.report,
    })
}
