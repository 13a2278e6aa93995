//! # Favipress
//!
//! Crop an image, convert it to WebP (or another container), or press a set
//! of resized favicon assets packaged as a zip archive or a multi-resolution
//! `.ico` file.
//!
//! # Architecture: One Pipeline, Swappable Provider
//!
//! All pixel work goes through the [`imaging::ImageBackend`] trait: the
//! capability set {identify, resize, crop, convert} over in-memory encoded
//! bytes. The shipped provider is [`imaging::RasterBackend`] (the `image`
//! crate). Everything above the trait is provider-agnostic, so tests drive
//! the same logic through a recording mock, and a different execution
//! environment could supply its own provider.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Backend trait, the `image`-crate provider, crop coordinate math |
//! | [`favicon`] | Resizes across the fixed size sets and assembles zip / `.ico` artifacts |
//! | [`session`] | Editing session controller: `Empty → Loaded → Cropped`, apply-crop and busy flags, exports |
//! | [`service`] | Form-style processing entry point with a base64 JSON response |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Stretch Resize, Library-Default Filter
//!
//! `resize` maps the source onto exactly `width × height` pixels with no
//! aspect-ratio preservation, the way a plain canvas `drawImage` call does.
//! Interpolation is the bilinear `Triangle` filter; there is no quality
//! contract, only the dimension guarantee.
//!
//! ## Per-Axis Crop Translation
//!
//! Crop selections arrive in the coordinate space of a scaled preview. They
//! are mapped to source pixels with independent `natural / displayed` scale
//! factors per axis, so a distorted preview box still crops the right region.
//!
//! ## Order-Preserving Parallel Favicon Resizes
//!
//! The per-size resizes are independent, so they run on the rayon pool; the
//! archive is then assembled strictly in declared size order. Any single
//! failure aborts the whole packaging — consumers never see a partial set.
//!
//! ## One Mutable Session, No Races
//!
//! [`session::EditingSession`] exclusively owns the canonical and cropped
//! images. Overlapping exports are rejected via a busy flag on the session
//! (not global state), and loading during an in-flight export is an error
//! rather than a last-write-wins race.

pub mod favicon;
pub mod imaging;
pub mod output;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;
