//! Parameter and value types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! and the [`backend`](super::backend) (which does the actual pixel work).
//! This separation allows swapping backends (e.g. for testing with a mock)
//! without changing operation logic.
//!
//! ## Types
//!
//! - [`EncodeFormat`] — Target container/encoding for a convert operation.
//! - [`SourceRegion`] — A crop rectangle in source-pixel coordinates.
//! - [`CropRect`] — A crop rectangle in display-space coordinates, as produced
//!   by a crop widget over a scaled preview.

/// Target encoding for a convert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    Png,
    WebP,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl EncodeFormat {
    /// Parse a user-supplied format name (case-insensitive, `jpg` accepted).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// Canonical file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }
}

/// A rectangle in source-pixel coordinates, ready for a crop operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRegion {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle in display-space coordinates.
///
/// Crop widgets report fractional pixel positions over the *displayed*
/// (possibly scaled) image, so all fields are `f64`. Translate to a
/// [`SourceRegion`] with
/// [`to_source_region`](super::calculations::to_source_region) before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_name_is_case_insensitive() {
        assert_eq!(EncodeFormat::from_name("WebP"), Some(EncodeFormat::WebP));
        assert_eq!(EncodeFormat::from_name("PNG"), Some(EncodeFormat::Png));
    }

    #[test]
    fn format_from_name_accepts_jpg_alias() {
        assert_eq!(EncodeFormat::from_name("jpg"), Some(EncodeFormat::Jpeg));
        assert_eq!(EncodeFormat::from_name("jpeg"), Some(EncodeFormat::Jpeg));
    }

    #[test]
    fn format_from_name_rejects_unknown() {
        assert_eq!(EncodeFormat::from_name("avif"), None);
        assert_eq!(EncodeFormat::from_name(""), None);
    }

    #[test]
    fn source_region_empty_detection() {
        let full = SourceRegion {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        assert!(!full.is_empty());

        let flat = SourceRegion {
            x: 5,
            y: 5,
            width: 10,
            height: 0,
        };
        assert!(flat.is_empty());
    }
}
