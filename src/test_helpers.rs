//! Shared test utilities for the favipress test suite.
//!
//! Synthetic in-memory images: tests never ship binary fixtures, they encode
//! small gradients on the fly.

use image::{DynamicImage, ImageEncoder, ImageFormat, RgbImage};
use std::io::Cursor;

/// Encode a gradient JPEG in memory with the given dimensions.
pub fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut out)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    out
}

/// Encode a flat RGBA PNG in memory with the given dimensions.
pub fn test_png_rgba(width: u32, height: u32) -> Vec<u8> {
    let rgba = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 200]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// Decode any encoded image and return its pixel dimensions.
pub fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory(bytes).unwrap();
    (img.width(), img.height())
}
