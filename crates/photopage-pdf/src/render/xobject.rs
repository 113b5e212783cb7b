//! Image XObject creation
//!
//! Baseline JPEGs in RGB or grayscale are embedded untouched with
//! `DCTDecode`. Everything else is decoded, flattened onto white and stored
//! as 8-bit RGB, compressed when the document is finalized.

use crate::types::{ImageData, Result};
use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat};
use lopdf::{Dictionary, Object, Stream};
use std::io::Cursor;

/// Build an Image XObject stream for an encoded photo.
pub fn create_image_xobject(image: &ImageData) -> Result<Stream> {
    if image.format == ImageFormat::Jpeg {
        if let Some(color_space) = jpeg_passthrough_color_space(&image.bytes) {
            let dict = image_dict(image.width, image.height, color_space, Some("DCTDecode"));
            return Ok(Stream::new(dict, image.bytes.to_vec()).with_compression(false));
        }
    }

    let decoded = image::load_from_memory_with_format(&image.bytes, image.format)?;
    let (width, height) = (decoded.width(), decoded.height());
    let rgb = flatten_to_rgb(decoded);

    let dict = image_dict(width, height, "DeviceRGB", None);
    Ok(Stream::new(dict, rgb))
}

/// Color space for a JPEG that can be copied byte for byte, if any
fn jpeg_passthrough_color_space(bytes: &[u8]) -> Option<&'static str> {
    let decoder = JpegDecoder::new(Cursor::new(bytes)).ok()?;
    match decoder.original_color_type() {
        ExtendedColorType::L8 => Some("DeviceGray"),
        ExtendedColorType::Rgb8 => Some("DeviceRGB"),
        // CMYK and friends need conversion
        _ => None,
    }
}

fn image_dict(width: u32, height: u32, color_space: &str, filter: Option<&str>) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    if let Some(filter) = filter {
        dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    }
    dict
}

/// RGB bytes with any alpha blended onto a white background
fn flatten_to_rgb(image: DynamicImage) -> Vec<u8> {
    if !image.color().has_alpha() {
        return image.to_rgb8().into_raw();
    }

    let rgba = image.to_rgba8();
    let mut rgb = Vec::with_capacity(rgba.width() as usize * rgba.height() as usize * 3);
    for pixel in rgba.pixels() {
        let alpha = pixel[3] as f32 / 255.0;
        for channel in &pixel.0[..3] {
            rgb.push((*channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8);
        }
    }
    rgb
}
