//! Photo acquisition: reading files and probing their size

use crate::constants::MAX_PHOTO_BYTES;
use crate::types::*;
use image::ImageReader;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Photos read from disk, plus the files that were rejected
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub images: Vec<ImageData>,
    pub skipped: Vec<(PathBuf, PhotoPageError)>,
}

/// Load a single photo and probe its dimensions.
///
/// Files over [`MAX_PHOTO_BYTES`] are rejected before being read.
pub async fn load_photo(path: impl AsRef<Path>) -> Result<ImageData> {
    let path = path.as_ref().to_owned();
    let name = display_name(&path);

    let size = tokio::fs::metadata(&path).await?.len();
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoPageError::PhotoTooLarge {
            name,
            size,
            limit: MAX_PHOTO_BYTES,
        });
    }

    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || probe_image(name, bytes)).await?
}

/// Load several photos, skipping (and logging) the ones that fail.
pub async fn load_photos(paths: &[impl AsRef<Path>]) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();
    for path in paths {
        let path = path.as_ref();
        match load_photo(path).await {
            Ok(image) => outcome.images.push(image),
            Err(err) => {
                log::warn!("Skipping {}: {}", path.display(), err);
                outcome.skipped.push((path.to_owned(), err));
            }
        }
    }
    outcome
}

/// Sniff the format from the content and read the intrinsic size.
///
/// Only the header is decoded; pixel data stays encoded until assembly.
pub fn probe_image(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Result<ImageData> {
    let name = name.into();
    let bytes: Arc<[u8]> = bytes.into();

    let size = bytes.len() as u64;
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoPageError::PhotoTooLarge {
            name,
            size,
            limit: MAX_PHOTO_BYTES,
        });
    }

    let reader = ImageReader::new(Cursor::new(&bytes[..])).with_guessed_format()?;
    let Some(format) = reader.format() else {
        return Err(PhotoPageError::UnsupportedFormat(name));
    };
    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(PhotoPageError::UnsupportedFormat(name));
    }

    log::debug!("Probed {} ({:?}, {}x{})", name, format, width, height);

    Ok(ImageData {
        name,
        format,
        width,
        height,
        bytes,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
