//! Output page rendering
//!
//! Layout works in millimetres from the top-left corner; PDF content
//! streams work in points from the bottom-left. The flip happens here.

use crate::constants::mm_to_pt;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use photopage_layout::{PagePlan, PhotoId, Placement};
use std::collections::HashMap;

use super::xobject::create_image_xobject;

/// Page dimensions in points
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Per-document state shared by every page
pub(crate) struct RenderContext<'a> {
    pub photos: HashMap<PhotoId, &'a Photo>,
    /// Image XObjects already embedded, by photo
    pub image_cache: HashMap<PhotoId, ObjectId>,
    pub report: AssemblyReport,
}

impl<'a> RenderContext<'a> {
    pub fn new(photos: &'a [Photo]) -> Self {
        Self {
            photos: photos.iter().map(|photo| (photo.id, photo)).collect(),
            image_cache: HashMap::new(),
            report: AssemblyReport::default(),
        }
    }
}

/// Render one planned page into `output` and return the page object id.
///
/// A photo that cannot be embedded is logged and left out; the rest of the
/// page still renders.
pub(crate) fn render_page(
    output: &mut Document,
    ctx: &mut RenderContext<'_>,
    page: &PagePlan,
    size: PageSize,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(size.width_pt),
            Object::Real(size.height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, placement) in page.placements.iter().enumerate() {
        if !placement.rect.has_positive_area() {
            log::warn!(
                "Page {}: skipping photo {} with empty placement {:?}",
                page.index + 1,
                placement.photo,
                placement.rect
            );
            ctx.report.skipped_images += 1;
            continue;
        }

        match embed_photo(output, ctx, placement.photo) {
            Ok(xobject_id) => {
                let xobject_name = format!("Im{}", idx);
                xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
                content_ops.push(placement_command(&xobject_name, placement, size.height_pt));
                ctx.report.placed_images += 1;
            }
            Err(err) => {
                log::warn!(
                    "Page {}: skipping photo {}: {}",
                    page.index + 1,
                    placement.photo,
                    err
                );
                ctx.report.skipped_images += 1;
            }
        }
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    ctx.report.pages += 1;
    Ok(output.add_object(page_dict))
}

/// Embed a photo once per document and return its XObject id
fn embed_photo(
    output: &mut Document,
    ctx: &mut RenderContext<'_>,
    photo_id: PhotoId,
) -> Result<ObjectId> {
    if let Some(&id) = ctx.image_cache.get(&photo_id) {
        return Ok(id);
    }

    let photo = ctx
        .photos
        .get(&photo_id)
        .ok_or(PhotoPageError::MissingPhoto(photo_id))?;
    let stream = create_image_xobject(&photo.data)?;

    let id = output.add_object(stream);
    ctx.image_cache.insert(photo_id, id);
    Ok(id)
}

/// Content stream operators that draw an image XObject into a placement.
///
/// Rotated placements pivot about their own center: translate to the
/// center, rotate the frame, then draw offset by half the size.
pub(crate) fn placement_command(
    xobject_name: &str,
    placement: &Placement,
    page_height_pt: f32,
) -> String {
    let rect = &placement.rect;
    let width = mm_to_pt(rect.width);
    let height = mm_to_pt(rect.height);
    let x = mm_to_pt(rect.x);
    let y = page_height_pt - mm_to_pt(rect.bottom());

    if placement.is_rotated() {
        let (center_x_mm, center_y_mm) = rect.center();
        let center_x = mm_to_pt(center_x_mm);
        let center_y = page_height_pt - mm_to_pt(center_y_mm);
        // Clockwise as seen on the page; PDF angles run counter-clockwise
        let (sin, cos) = (-placement.rotation_degrees.to_radians()).sin_cos();
        format!(
            "q 1 0 0 1 {} {} cm {} {} {} {} 0 0 cm {} 0 0 {} {} {} cm /{} Do Q\n",
            center_x,
            center_y,
            cos,
            sin,
            -sin,
            cos,
            width,
            height,
            -width / 2.0,
            -height / 2.0,
            xobject_name
        )
    } else {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            width, height, x, y, xobject_name
        )
    }
}
