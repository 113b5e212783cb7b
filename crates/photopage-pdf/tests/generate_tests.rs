use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use lopdf::Document;
use photopage_pdf::*;
use std::cell::Cell;
use std::io::Cursor;

fn encoded_photo(width: u32, height: u32, format: ImageFormat) -> ImageData {
    let img = ImageBuffer::from_pixel(width, height, Rgb([90u8, 140, 200]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    probe_image(format!("{}x{}", width, height), bytes).unwrap()
}

fn library_with(count: usize) -> PhotoLibrary {
    let sizes = [(40, 30), (30, 40), (32, 18), (20, 20)];
    let mut library = PhotoLibrary::new();
    for i in 0..count {
        let (w, h) = sizes[i % sizes.len()];
        let format = if i % 2 == 0 {
            ImageFormat::Jpeg
        } else {
            ImageFormat::Png
        };
        library.add(encoded_photo(w, h, format));
    }
    library
}

fn xobject_count(doc: &Document, page_id: lopdf::ObjectId) -> usize {
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    resources.get(b"XObject").unwrap().as_dict().unwrap().len()
}

/// Assembler that fails a set number of times before delegating
struct FlakyAssembler {
    failures_left: Cell<usize>,
    calls: Cell<usize>,
}

impl FlakyAssembler {
    fn new(failures: usize) -> Self {
        Self {
            failures_left: Cell::new(failures),
            calls: Cell::new(0),
        }
    }
}

impl DocumentAssembler for FlakyAssembler {
    fn assemble(&self, plan: &DocumentPlan, photos: &[Photo]) -> Result<Assembled> {
        self.calls.set(self.calls.get() + 1);
        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            return Err(PhotoPageError::Config("simulated failure".to_string()));
        }
        assemble_pdf(plan, photos, "flaky")
    }
}

#[test]
fn test_generate_paginates_ten_photos() {
    let library = library_with(10);
    let options = PhotoPageOptions::default();

    let generated = generate_with(
        &library.snapshot(),
        &options,
        &AdaptiveLayout,
        &PdfAssembler::default(),
    )
    .unwrap();

    assert!(!generated.used_document_fallback);
    assert_eq!(generated.plan.pages.len(), 3);
    assert_eq!(generated.report.pages, 3);
    assert_eq!(generated.report.placed_images, 10);
    assert_eq!(generated.report.skipped_images, 0);

    let pages = generated.document.get_pages();
    assert_eq!(pages.len(), 3);
    let counts: Vec<_> = pages
        .values()
        .map(|&id| xobject_count(&generated.document, id))
        .collect();
    assert_eq!(counts, vec![4, 4, 2]);
}

#[test]
fn test_generated_pdf_round_trips() {
    let library = library_with(5);
    let mut generated = generate_with(
        &library.snapshot(),
        &PhotoPageOptions::default(),
        &AdaptiveLayout,
        &PdfAssembler::new("Holiday"),
    )
    .unwrap();

    let mut bytes = Vec::new();
    generated.document.save_to(&mut bytes).unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}

#[test]
fn test_missing_photo_is_skipped_not_fatal() {
    let library = library_with(3);
    let photos = library.snapshot();
    let options = PhotoPageOptions::default();

    let infos: Vec<ImageInfo> = photos.iter().map(Photo::info).collect();
    let plan = plan_document(&infos, &options, &AdaptiveLayout).unwrap();

    // Hand the assembler only two of the three planned photos
    let assembled = assemble_pdf(&plan, &photos[..2], "").unwrap();
    assert_eq!(assembled.report.placed_images, 2);
    assert_eq!(assembled.report.skipped_images, 1);
    assert_eq!(assembled.document.get_pages().len(), 1);
}

#[test]
fn test_corrupt_photo_is_skipped() {
    let mut library = library_with(2);
    library.add(ImageData {
        name: "broken.png".to_string(),
        format: ImageFormat::Png,
        width: 10,
        height: 10,
        bytes: b"\x89PNG\r\n\x1a\ngarbage".to_vec().into(),
    });

    let generated = generate_with(
        &library.snapshot(),
        &PhotoPageOptions::default(),
        &AdaptiveLayout,
        &PdfAssembler::default(),
    )
    .unwrap();

    assert_eq!(generated.report.placed_images, 2);
    assert_eq!(generated.report.skipped_images, 1);
}

#[test]
fn test_assembly_failure_retries_with_grid() {
    let library = library_with(6);
    let assembler = FlakyAssembler::new(1);

    let generated = generate_with(
        &library.snapshot(),
        &PhotoPageOptions::default(),
        &AdaptiveLayout,
        &assembler,
    )
    .unwrap();

    assert_eq!(assembler.calls.get(), 2);
    assert!(generated.used_document_fallback);
    assert!(
        generated
            .plan
            .pages
            .iter()
            .all(|page| page.method == LayoutMethod::Grid)
    );
}

#[test]
fn test_second_assembly_failure_is_terminal() {
    let library = library_with(2);
    let assembler = FlakyAssembler::new(2);

    let result = generate_with(
        &library.snapshot(),
        &PhotoPageOptions::default(),
        &AdaptiveLayout,
        &assembler,
    );

    assert!(matches!(result, Err(PhotoPageError::Config(_))));
    assert_eq!(assembler.calls.get(), 2);
}

#[test]
fn test_generate_requires_photos() {
    let result = generate_with(
        &[],
        &PhotoPageOptions::default(),
        &AdaptiveLayout,
        &PdfAssembler::default(),
    );
    assert!(matches!(result, Err(PhotoPageError::NoPhotos)));
}

#[test]
fn test_summary_counts_fallback_pages() {
    let library = library_with(14);
    let photos = library.snapshot();
    let infos: Vec<ImageInfo> = photos.iter().map(Photo::info).collect();
    let options = PhotoPageOptions {
        photos_per_page: 14,
        ..Default::default()
    };

    let plan = plan_document_grid_only(&infos, &options).unwrap();
    let summary = summarize(&plan);
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.placed, 12);
    assert_eq!(summary.dropped, 2);
    assert_eq!(summary.fallback_pages, 0);
}

#[tokio::test]
async fn test_generate_and_save() {
    use tempfile::NamedTempFile;

    let library = library_with(4);
    let generated = generate(&library.snapshot(), &PhotoPageOptions::default())
        .await
        .unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_pdf(generated.document, temp.path()).await.unwrap();

    let loaded = Document::load(temp.path()).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
}

#[test]
fn test_empty_placement_is_skipped_and_counted() {
    let library = library_with(2);
    let photos = library.snapshot();
    let plan = DocumentPlan {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        content_area: Rect::new(10.0, 10.0, 190.0, 277.0),
        pages: vec![PagePlan {
            index: 0,
            placements: vec![
                Placement::new(photos[0].id, Rect::new(10.0, 10.0, 90.0, 60.0)),
                Placement::new(photos[1].id, Rect::new(108.0, 124.6, -1.0, -0.75)),
            ],
            method: LayoutMethod::GridFallback,
            dropped: 0,
        }],
    };

    let assembled = assemble_pdf(&plan, &photos, "").unwrap();
    assert_eq!(assembled.report.placed_images, 1);
    assert_eq!(assembled.report.skipped_images, 1);

    let pages = assembled.document.get_pages();
    let page_id = *pages.values().next().unwrap();
    assert_eq!(xobject_count(&assembled.document, page_id), 1);
}

#[test]
fn test_wide_margins_still_place_every_photo() {
    // 100mm margins on A4 leave a 10 x 97mm strip
    let library = library_with(3);
    let options = PhotoPageOptions {
        margin_mm: 100.0,
        ..Default::default()
    };

    let generated = generate_with(
        &library.snapshot(),
        &options,
        &AdaptiveLayout,
        &PdfAssembler::default(),
    )
    .unwrap();

    for page in &generated.plan.pages {
        for placement in &page.placements {
            assert!(placement.rect.has_positive_area(), "{:?}", placement.rect);
            assert!(
                generated
                    .plan
                    .content_area
                    .contains_rect(&placement.rect, 1e-3)
            );
        }
    }
    assert_eq!(generated.report.placed_images, 3);
    assert_eq!(generated.report.skipped_images, 0);
}
