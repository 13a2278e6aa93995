//! Favicon packaging.
//!
//! Drives the imaging backend across a fixed list of square sizes and bundles
//! the results into a downloadable artifact:
//!
//! - [`package_favicons`] — one PNG per size, zipped, members named
//!   `favicon-<W>x<H>.png`.
//! - [`package_ico`] — the sizes packed as frames of a single `.ico`
//!   container recognized by OS icon loaders.
//!
//! Per-size resizes are independent pure functions of the same input, so they
//! run in parallel on the [rayon](https://docs.rs/rayon) pool. Assembly waits
//! for all of them and preserves the declared size order — icon consumers
//! expect a deterministic frame order. If any single resize fails the whole
//! packaging fails; there is no partial archive.

use crate::imaging::{BackendError, ImageBackend};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use rayon::prelude::*;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Square pixel sizes for the zip archive path.
pub const FAVICON_SIZES: &[u32] = &[16, 32, 64, 80, 96, 192];

/// Square pixel sizes for the `.ico` container path. ICO directory entries
/// cap at 256 pixels, so this ladder tops out there.
pub const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

#[derive(Error, Debug)]
pub enum FaviconError {
    #[error("image processing failed: {0}")]
    Backend(#[from] BackendError),
    #[error("archive assembly failed: {0}")]
    Archive(#[from] ZipError),
    #[error("icon container assembly failed: {0}")]
    Container(String),
}

/// Name of a zip member holding the `size`-pixel favicon.
pub fn member_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

/// Resize the input to every size in `sizes`, in parallel, returning the
/// PNG-encoded results in declared order.
fn resize_all(
    backend: &impl ImageBackend,
    image: &[u8],
    sizes: &[u32],
) -> Result<Vec<Vec<u8>>, FaviconError> {
    let pngs = sizes
        .par_iter()
        .map(|&size| backend.resize(image, size, size))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pngs)
}

/// Resize the input to each size in `sizes` and bundle the PNGs into a zip
/// archive, returning the serialized archive bytes.
pub fn package_favicons(
    backend: &impl ImageBackend,
    image: &[u8],
    sizes: &[u32],
) -> Result<Vec<u8>, FaviconError> {
    let pngs = resize_all(backend, image, sizes)?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (&size, png) in sizes.iter().zip(&pngs) {
        writer.start_file(member_name(size), options)?;
        writer.write_all(png).map_err(ZipError::from)?;
    }
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Resize the input to each size in `sizes` and pack the PNGs as frames of a
/// single multi-resolution `.ico` container.
///
/// Frames are stored PNG-encoded (the modern ICO variant, what `png-to-ico`
/// style tools emit). Backend resize output is RGBA8 PNG by contract.
pub fn package_ico(
    backend: &impl ImageBackend,
    image: &[u8],
    sizes: &[u32],
) -> Result<Vec<u8>, FaviconError> {
    let pngs = resize_all(backend, image, sizes)?;

    let frames = sizes
        .iter()
        .zip(&pngs)
        .map(|(&size, png)| {
            IcoFrame::with_encoded(png.as_slice(), size, size, image::ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FaviconError::Container(e.to_string()))?;

    let mut out = Vec::new();
    IcoEncoder::new(Cursor::new(&mut out))
        .encode_images(&frames)
        .map_err(|e| FaviconError::Container(e.to_string()))?;
    Ok(out)
}
