use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use photopage_pdf::*;
use std::io::Cursor;
use tempfile::NamedTempFile;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgb([10u8, 20, 30]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_probe_reads_dimensions() {
    let data = probe_image("wide.png", png_bytes(64, 36)).unwrap();
    assert_eq!(data.format, ImageFormat::Png);
    assert_eq!((data.width, data.height), (64, 36));
    assert_eq!(data.name, "wide.png");
}

#[test]
fn test_probe_rejects_non_image() {
    let result = probe_image("notes.txt", b"just some text".to_vec());
    assert!(matches!(result, Err(PhotoPageError::UnsupportedFormat(name)) if name == "notes.txt"));
}

#[test]
fn test_probe_rejects_oversized_buffer() {
    let bytes = vec![0u8; constants::MAX_PHOTO_BYTES as usize + 1];
    let result = probe_image("huge.jpg", bytes);
    assert!(matches!(result, Err(PhotoPageError::PhotoTooLarge { .. })));
}

#[tokio::test]
async fn test_load_photo_from_file() {
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), png_bytes(30, 40)).unwrap();

    let data = load_photo(temp.path()).await.unwrap();
    assert_eq!((data.width, data.height), (30, 40));
}

#[tokio::test]
async fn test_load_photo_too_large() {
    let temp = NamedTempFile::new().unwrap();
    let file = std::fs::File::create(temp.path()).unwrap();
    file.set_len(constants::MAX_PHOTO_BYTES + 1).unwrap();

    let result = load_photo(temp.path()).await;
    match result {
        Err(PhotoPageError::PhotoTooLarge { size, limit, .. }) => {
            assert_eq!(size, constants::MAX_PHOTO_BYTES + 1);
            assert_eq!(limit, constants::MAX_PHOTO_BYTES);
        }
        other => panic!("Expected PhotoTooLarge, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_photos_skips_failures() {
    let good = NamedTempFile::new().unwrap();
    std::fs::write(good.path(), png_bytes(10, 10)).unwrap();
    let bad = NamedTempFile::new().unwrap();
    std::fs::write(bad.path(), b"not an image").unwrap();

    let paths = vec![good.path(), bad.path()];
    let outcome = load_photos(&paths).await;

    assert_eq!(outcome.images.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].0, bad.path());
}

#[tokio::test]
async fn test_load_missing_file() {
    let result = load_photo("/definitely/not/here.jpg").await;
    assert!(matches!(result, Err(PhotoPageError::Io(_))));
}
