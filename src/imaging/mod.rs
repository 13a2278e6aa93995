//! Image transforms — pure Rust, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Resize (stretch)** | `resize_exact` + Triangle filter → PNG |
//! | **Crop** | display→source translation + `crop_imm` → PNG |
//! | **Convert** | `DynamicImage::write_to` (WebP, PNG, JPEG, GIF, BMP, TIFF) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop coordinate math (unit testable)
//! - **Parameters**: Value types describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RasterBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod raster_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::to_source_region;
pub use operations::{CroppedImage, crop_to_selection, get_dimensions};
pub use params::{CropRect, EncodeFormat, SourceRegion};
pub use raster_backend::RasterBackend;
