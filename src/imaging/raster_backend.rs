//! Image-crate backend — pure Rust, statically linked.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, WebP, BMP, TIFF) | `image::load_from_memory` |
//! | Identify | `ImageReader::with_guessed_format` + `into_dimensions` |
//! | Resize | `image::imageops::resize` via `resize_exact`, `Triangle` filter |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode | `DynamicImage::write_to` with the target `ImageFormat` |
//!
//! Resize stretches to the exact target dimensions — no aspect-ratio
//! preservation, matching a plain `drawImage(src, 0, 0, w, h)`. The `Triangle`
//! (bilinear) filter is the closest match to a canvas's default interpolation;
//! output quality is whatever that gives, there is no quality contract.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{EncodeFormat, SourceRegion};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// Production backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RasterBackend;

impl RasterBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(image: &[u8]) -> Result<DynamicImage, BackendError> {
    image::load_from_memory(image).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Encode as PNG, normalized to RGBA8 so output pixel layout is deterministic
/// regardless of the source color type.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, BackendError> {
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let mut out = Cursor::new(Vec::new());
    rgba.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| BackendError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

fn image_format(format: EncodeFormat) -> ImageFormat {
    match format {
        EncodeFormat::Png => ImageFormat::Png,
        EncodeFormat::WebP => ImageFormat::WebP,
        EncodeFormat::Jpeg => ImageFormat::Jpeg,
        EncodeFormat::Gif => ImageFormat::Gif,
        EncodeFormat::Bmp => ImageFormat::Bmp,
        EncodeFormat::Tiff => ImageFormat::Tiff,
    }
}

impl ImageBackend for RasterBackend {
    fn identify(&self, image: &[u8]) -> Result<Dimensions, BackendError> {
        let reader = ImageReader::new(Cursor::new(image))
            .with_guessed_format()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, image: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BackendError> {
        if width == 0 || height == 0 {
            return Err(BackendError::Encode(format!(
                "target dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let img = decode(image)?;
        let resized = img.resize_exact(width, height, FilterType::Triangle);
        encode_png(&resized)
    }

    fn crop(&self, image: &[u8], region: SourceRegion) -> Result<Vec<u8>, BackendError> {
        if region.is_empty() {
            return Err(BackendError::InvalidRegion("zero-area region".to_string()));
        }
        let img = decode(image)?;
        if region.x + region.width > img.width() || region.y + region.height > img.height() {
            return Err(BackendError::InvalidRegion(format!(
                "{}x{}+{}+{} exceeds source bounds {}x{}",
                region.width,
                region.height,
                region.x,
                region.y,
                img.width(),
                img.height()
            )));
        }
        let cropped = img.crop_imm(region.x, region.y, region.width, region.height);
        encode_png(&cropped)
    }

    fn convert(&self, image: &[u8], format: EncodeFormat) -> Result<Vec<u8>, BackendError> {
        let img = decode(image)?;
        // JPEG has no alpha channel; flatten instead of letting the encoder reject it.
        let img = match format {
            EncodeFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
            _ => img,
        };
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image_format(format))
            .map_err(|e| BackendError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }
}
