//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a display-space selection or a target description, compute
//! source-space parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::to_source_region;
use super::params::CropRect;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, image: &[u8]) -> Result<(u32, u32)> {
    let dims = backend.identify(image)?;
    Ok((dims.width, dims.height))
}

/// A cropped image together with its source-space dimensions.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub bytes: Vec<u8>,
    pub dimensions: Dimensions,
}

/// Crop an image from a display-space selection.
///
/// Identifies the natural dimensions, translates the selection through the
/// per-axis `natural / displayed` scale, and extracts the region as PNG.
///
/// Returns `Ok(None)` for a zero-area selection — the caller treats this as
/// a no-op, not an error.
pub fn crop_to_selection(
    backend: &impl ImageBackend,
    image: &[u8],
    rect: CropRect,
    displayed: (u32, u32),
) -> Result<Option<CroppedImage>> {
    let natural = backend.identify(image)?;
    let Some(region) = to_source_region(rect, displayed, (natural.width, natural.height)) else {
        return Ok(None);
    };
    let bytes = backend.crop(image, region)?;
    Ok(Some(CroppedImage {
        bytes,
        dimensions: Dimensions {
            width: region.width,
            height: region.height,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::params::SourceRegion;

    #[test]
    fn get_dimensions_calls_backend() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1920,
            height: 1080,
        }]);

        let dims = get_dimensions(&backend, b"bytes").unwrap();
        assert_eq!(dims, (1920, 1080));
    }

    #[test]
    fn crop_translates_display_selection() {
        // Natural 800x400 shown at 400x200: selection coordinates double.
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 400,
        }]);

        let cropped = crop_to_selection(
            &backend,
            b"bytes",
            CropRect::new(10.0, 20.0, 100.0, 50.0),
            (400, 200),
        )
        .unwrap()
        .unwrap();

        assert_eq!(cropped.dimensions.width, 200);
        assert_eq!(cropped.dimensions.height, 100);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[1],
            RecordedOp::Crop(SourceRegion {
                x: 20,
                y: 40,
                width: 200,
                height: 100,
            })
        );
    }

    #[test]
    fn crop_zero_area_is_noop() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 400,
        }]);

        let cropped = crop_to_selection(
            &backend,
            b"bytes",
            CropRect::new(10.0, 20.0, 0.0, 50.0),
            (400, 200),
        )
        .unwrap();
        assert!(cropped.is_none());

        // Only the identify ran; no crop was issued.
        assert_eq!(backend.get_operations(), vec![RecordedOp::Identify]);
    }

    #[test]
    fn crop_propagates_decode_failure() {
        let backend = MockBackend::new();
        let result = crop_to_selection(
            &backend,
            b"bytes",
            CropRect::new(0.0, 0.0, 10.0, 10.0),
            (100, 100),
        );
        assert!(result.is_err());
    }
}
