//! Editing session controller.
//!
//! Holds the canonical (as-uploaded) image and an optional cropped derivative,
//! sequences user actions (load → crop → export), and produces named download
//! artifacts. State machine:
//!
//! ```text
//! Empty → Loaded            (successful load/decode)
//! Loaded → Cropped          (crop confirmed; the canonical image is kept)
//! Cropped → Cropped         (re-confirming replaces the prior crop)
//! any → Empty               (explicit reset)
//! ```
//!
//! Exports read the apply-crop flag to pick their input (canonical vs
//! cropped). A busy flag forbids overlapping exports; it is a session field,
//! not global state, and it clears on failure as well as success. Loading a
//! new image while an export is in flight is rejected so the canonical image
//! reference has exactly one writer.

use crate::favicon::{self, FAVICON_SIZES, FaviconError, ICO_SIZES};
use crate::imaging::{
    BackendError, CropRect, Dimensions, EncodeFormat, ImageBackend, crop_to_selection,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no image loaded")]
    NoImage,
    #[error("apply-crop is set but no crop has been confirmed")]
    NoCrop,
    #[error("an export is already in flight")]
    ExportInFlight,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Favicon(#[from] FaviconError),
}

/// Where the session is in the `Empty → Loaded → Cropped` machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
    Cropped,
}

/// A downloadable export: final filename plus the encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// An image the session owns: encoded bytes plus decode-time dimensions.
#[derive(Debug, Clone)]
struct HeldImage {
    bytes: Vec<u8>,
    dimensions: Dimensions,
}

/// One editing session: owns the canonical and cropped images exclusively.
pub struct EditingSession<B: ImageBackend> {
    backend: B,
    canonical: Option<HeldImage>,
    cropped: Option<HeldImage>,
    apply_crop: bool,
    busy: bool,
}

impl<B: ImageBackend> EditingSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            canonical: None,
            cropped: None,
            apply_crop: true,
            busy: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.canonical, &self.cropped) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Cropped,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn apply_crop(&self) -> bool {
        self.apply_crop
    }

    pub fn set_apply_crop(&mut self, apply: bool) {
        self.apply_crop = apply;
    }

    pub fn canonical_dimensions(&self) -> Option<Dimensions> {
        self.canonical.as_ref().map(|img| img.dimensions)
    }

    pub fn cropped_dimensions(&self) -> Option<Dimensions> {
        self.cropped.as_ref().map(|img| img.dimensions)
    }

    /// The cropped image bytes, if a crop has been confirmed.
    pub fn cropped_image(&self) -> Option<&[u8]> {
        self.cropped.as_ref().map(|img| img.bytes.as_slice())
    }

    /// Load a new canonical image, validating that it decodes.
    ///
    /// Replaces any prior canonical image and discards any prior crop.
    /// Rejected while an export is in flight.
    pub fn load(&mut self, bytes: Vec<u8>) -> Result<Dimensions, SessionError> {
        if self.busy {
            return Err(SessionError::ExportInFlight);
        }
        let dimensions = self.backend.identify(&bytes)?;
        self.canonical = Some(HeldImage { bytes, dimensions });
        self.cropped = None;
        Ok(dimensions)
    }

    /// Confirm a crop selection made over the displayed image.
    ///
    /// `displayed` is the size of the preview box the selection was drawn on;
    /// coordinates are translated per axis into source pixels. A zero-area
    /// selection is a no-op and returns `Ok(false)`. Re-confirming replaces
    /// the previous crop; the canonical image is always retained.
    pub fn confirm_crop(
        &mut self,
        rect: CropRect,
        displayed: (u32, u32),
    ) -> Result<bool, SessionError> {
        let canonical = self.canonical.as_ref().ok_or(SessionError::NoImage)?;
        match crop_to_selection(&self.backend, &canonical.bytes, rect, displayed)? {
            Some(cropped) => {
                self.cropped = Some(HeldImage {
                    bytes: cropped.bytes,
                    dimensions: cropped.dimensions,
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether an export action would currently be accepted.
    pub fn can_export(&self) -> bool {
        !self.busy && self.export_input().is_ok()
    }

    /// Convert the export input to WebP.
    pub fn export_webp(&mut self) -> Result<Artifact, SessionError> {
        self.export_converted(EncodeFormat::WebP)
    }

    /// Convert the export input to an arbitrary target format.
    pub fn export_converted(&mut self, format: EncodeFormat) -> Result<Artifact, SessionError> {
        self.run_export(|backend, input| {
            let bytes = backend.convert(input, format)?;
            Ok(Artifact {
                filename: format!("edited-image.{}", format.extension()),
                bytes,
            })
        })
    }

    /// Package the export input as a zip of favicon PNGs.
    pub fn export_favicons(&mut self) -> Result<Artifact, SessionError> {
        self.run_export(|backend, input| {
            let bytes = favicon::package_favicons(backend, input, FAVICON_SIZES)?;
            Ok(Artifact {
                filename: "favicons.zip".to_string(),
                bytes,
            })
        })
    }

    /// Package the export input as a multi-resolution `.ico` container.
    pub fn export_ico(&mut self) -> Result<Artifact, SessionError> {
        self.run_export(|backend, input| {
            let bytes = favicon::package_ico(backend, input, ICO_SIZES)?;
            Ok(Artifact {
                filename: "favicon.ico".to_string(),
                bytes,
            })
        })
    }

    /// Discard all session state, returning to the initial configuration.
    pub fn reset(&mut self) {
        self.canonical = None;
        self.cropped = None;
        self.apply_crop = true;
        self.busy = false;
    }

    /// The image an export would consume, per the apply-crop flag.
    fn export_input(&self) -> Result<&HeldImage, SessionError> {
        if self.canonical.is_none() {
            return Err(SessionError::NoImage);
        }
        if self.apply_crop {
            self.cropped.as_ref().ok_or(SessionError::NoCrop)
        } else {
            self.canonical.as_ref().ok_or(SessionError::NoImage)
        }
    }

    /// Run one export under the busy flag: reject overlap, clear the flag on
    /// success and failure alike.
    fn run_export<F>(&mut self, export: F) -> Result<Artifact, SessionError>
    where
        F: FnOnce(&B, &[u8]) -> Result<Artifact, SessionError>,
    {
        if self.busy {
            return Err(SessionError::ExportInFlight);
        }
        self.export_input()?;
        self.busy = true;
        let result = match self.export_input() {
            Ok(input) => export(&self.backend, &input.bytes),
            Err(e) => Err(e),
        };
        self.busy = false;
        result
    }
}
