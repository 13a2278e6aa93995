//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the transform capability set every
//! backend must support: identify, resize, crop, and convert. All operations
//! work on in-memory encoded byte buffers, so the rest of the codebase never
//! touches pixel data or a specific image library.
//!
//! The production implementation is
//! [`RasterBackend`](super::raster_backend::RasterBackend), built on the
//! `image` crate. The trait exists so the same pipeline logic could run
//! against a different provider (e.g. a rendering-surface-backed one) and so
//! tests can record operations with a mock.

use super::params::{EncodeFormat, SourceRegion};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid crop region: {0}")]
    InvalidRegion(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement all four operations — identify, resize, crop,
/// and convert — so the rest of the codebase is backend-agnostic. Inputs and
/// outputs are encoded bytes; resize and crop always produce PNG.
///
/// `Sync` is required so a backend can be shared across rayon workers during
/// favicon generation.
pub trait ImageBackend: Sync {
    /// Decode enough of the image to report its pixel dimensions.
    fn identify(&self, image: &[u8]) -> Result<Dimensions, BackendError>;

    /// Stretch the image to exactly `width × height` pixels (no aspect-ratio
    /// preservation) and return it PNG-encoded.
    fn resize(&self, image: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BackendError>;

    /// Extract `region` from the image and return it PNG-encoded.
    fn crop(&self, image: &[u8], region: SourceRegion) -> Result<Vec<u8>, BackendError>;

    /// Re-encode the image into `format` without changing its dimensions.
    fn convert(&self, image: &[u8], format: EncodeFormat) -> Result<Vec<u8>, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without touching pixels.
    /// Uses Mutex (not RefCell) so it is Sync and works with rayon's par_iter.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_resize: bool,
        pub fail_convert: bool,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecordedOp {
        Identify,
        Resize { width: u32, height: u32 },
        Crop(SourceRegion),
        Convert(EncodeFormat),
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, _image: &[u8]) -> Result<Dimensions, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Identify);
            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::Decode("no mock dimensions".to_string()))
        }

        fn resize(&self, _image: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Resize { width, height });
            if self.fail_resize {
                return Err(BackendError::Encode("mock resize failure".to_string()));
            }
            Ok(format!("png-{width}x{height}").into_bytes())
        }

        fn crop(&self, _image: &[u8], region: SourceRegion) -> Result<Vec<u8>, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Crop(region));
            Ok(format!("crop-{}x{}", region.width, region.height).into_bytes())
        }

        fn convert(&self, image: &[u8], format: EncodeFormat) -> Result<Vec<u8>, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Convert(format));
            if self.fail_convert {
                return Err(BackendError::Encode("mock convert failure".to_string()));
            }
            let mut out = image.to_vec();
            out.extend_from_slice(format.extension().as_bytes());
            Ok(out)
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let dims = backend.identify(b"bytes").unwrap();
        assert_eq!(dims.width, 800);
        assert_eq!(dims.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops, vec![RecordedOp::Identify]);
    }

    #[test]
    fn mock_identify_errors_when_exhausted() {
        let backend = MockBackend::new();
        assert!(matches!(
            backend.identify(b"bytes"),
            Err(BackendError::Decode(_))
        ));
    }

    #[test]
    fn mock_records_resize_and_crop() {
        let backend = MockBackend::new();

        backend.resize(b"bytes", 32, 32).unwrap();
        backend
            .crop(
                b"bytes",
                SourceRegion {
                    x: 1,
                    y: 2,
                    width: 3,
                    height: 4,
                },
            )
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[0],
            RecordedOp::Resize {
                width: 32,
                height: 32
            }
        );
        assert!(matches!(ops[1], RecordedOp::Crop(r) if r.width == 3 && r.height == 4));
    }

    #[test]
    fn mock_failure_flags() {
        let backend = MockBackend {
            fail_resize: true,
            fail_convert: true,
            ..MockBackend::default()
        };
        assert!(backend.resize(b"bytes", 16, 16).is_err());
        assert!(backend.convert(b"bytes", EncodeFormat::WebP).is_err());
    }
}
