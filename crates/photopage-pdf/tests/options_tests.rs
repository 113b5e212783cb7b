use photopage_pdf::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 150.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 150.0));
}

#[test]
fn test_defaults() {
    let options = PhotoPageOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margin_mm, 10.0);
    assert_eq!(options.photos_per_page, 4);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_zero_photos_per_page() {
    let options = PhotoPageOptions {
        photos_per_page: 0,
        ..Default::default()
    };
    match options.validate() {
        Err(PhotoPageError::Config(msg)) => assert!(msg.contains("Photos per page")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_large_photos_per_page_is_accepted() {
    let options = PhotoPageOptions {
        photos_per_page: 40,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_statistics() {
    let options = PhotoPageOptions::default();
    let stats = calculate_statistics(10, &options).unwrap();
    assert_eq!(stats.photos, 10);
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.photos_on_last_page, 2);
    assert!(!stats.fallback_may_drop);

    let options = PhotoPageOptions {
        photos_per_page: 16,
        ..Default::default()
    };
    let stats = calculate_statistics(16, &options).unwrap();
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.photos_on_last_page, 16);
    assert!(stats.fallback_may_drop);

    assert!(matches!(
        calculate_statistics(0, &options),
        Err(PhotoPageError::NoPhotos)
    ));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = PhotoPageOptions {
        paper_size: PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0,
        },
        orientation: Orientation::Landscape,
        margin_mm: 6.5,
        photos_per_page: 9,
        title: "Trip".to_string(),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = PhotoPageOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "photos_per_page": 6 }"#).unwrap();

    let loaded = PhotoPageOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.photos_per_page, 6);
    assert_eq!(loaded.paper_size, PaperSize::A4);
    assert_eq!(loaded.margin_mm, 10.0);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_invalid_config_is_config_error() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    let result = PhotoPageOptions::load(temp_file.path()).await;
    assert!(matches!(result, Err(PhotoPageError::Config(_))));
}
