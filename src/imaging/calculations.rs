//! Pure calculation functions for crop coordinates.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! Crop widgets operate on a *displayed* image that is usually scaled down
//! from the source. The selection they report is therefore in display-space
//! pixels and must be mapped back to source pixels before cropping. The scale
//! factor is computed independently per axis as `natural / displayed`, so a
//! display box whose aspect ratio differs from the source is still mapped
//! correctly.

use super::params::{CropRect, SourceRegion};

/// Translate a display-space crop rectangle into source-pixel coordinates.
///
/// Returns `None` when the selection has zero area (nothing to crop) or when
/// the displayed dimensions are zero (no scale factor exists).
///
/// The resulting region is clamped to the natural image bounds; a selection
/// that ends up entirely outside the image also yields `None`.
///
/// # Examples
/// ```
/// # use favipress::imaging::{CropRect, SourceRegion, to_source_region};
/// // 800x400 natural image displayed at 400x200: scale is 2.0 per axis.
/// let region = to_source_region(
///     CropRect::new(10.0, 20.0, 100.0, 50.0),
///     (400, 200),
///     (800, 400),
/// );
/// assert_eq!(
///     region,
///     Some(SourceRegion { x: 20, y: 40, width: 200, height: 100 })
/// );
/// ```
pub fn to_source_region(
    rect: CropRect,
    displayed: (u32, u32),
    natural: (u32, u32),
) -> Option<SourceRegion> {
    let (dw, dh) = displayed;
    let (nw, nh) = natural;
    if dw == 0 || dh == 0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }

    let scale_x = nw as f64 / dw as f64;
    let scale_y = nh as f64 / dh as f64;

    let x = (rect.x.max(0.0) * scale_x).round() as u32;
    let y = (rect.y.max(0.0) * scale_y).round() as u32;
    if x >= nw || y >= nh {
        return None;
    }

    let width = ((rect.width * scale_x).round() as u32).min(nw - x);
    let height = ((rect.height * scale_y).round() as u32).min(nh - y);

    let region = SourceRegion {
        x,
        y,
        width,
        height,
    };
    if region.is_empty() { None } else { Some(region) }
}
