//! Server-style processing entry point.
//!
//! Models the upload-form contract: an optional image payload, a target
//! format name, and a generate-favicon flag go in; a serializable response
//! with a base64 payload comes out. The response distinguishes exactly two
//! failures ("no file provided" and a generic processing error), matching
//! what the form consumer expects; the specific error is written to stderr
//! for diagnostics.
//!
//! [`process_image`] never returns `Err` and never panics: every failure is
//! encoded in the response body.

use crate::favicon::{self, ICO_SIZES};
use crate::imaging::{EncodeFormat, ImageBackend};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

pub const ERROR_NO_IMAGE: &str = "No image file provided";
pub const ERROR_PROCESSING: &str = "Error processing image";

/// Decoded form fields of one processing request.
#[derive(Debug, Default, Clone)]
pub struct ProcessRequest {
    /// Raw bytes of the uploaded image, if any.
    pub image: Option<Vec<u8>>,
    /// Target format name (e.g. `"webp"`). Ignored when `generate_favicon`
    /// is set; defaults to WebP when absent.
    pub format: Option<String>,
    /// When set, the response carries a `.ico` container instead of a
    /// re-encoded image. On the wire this is the string `"true"`.
    pub generate_favicon: bool,
}

/// Response payload, serialized with the form consumer's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub success: bool,
    /// Base64 of the re-encoded image or `.ico` container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResponse {
    fn ok(payload: String) -> Self {
        Self {
            success: true,
            processed_image: Some(payload),
            error: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            success: false,
            processed_image: None,
            error: Some(message.to_string()),
        }
    }
}

/// Process one request: favicon container or format conversion.
pub fn process_image(backend: &impl ImageBackend, request: &ProcessRequest) -> ProcessResponse {
    let Some(image) = request.image.as_deref() else {
        return ProcessResponse::fail(ERROR_NO_IMAGE);
    };

    let result = if request.generate_favicon {
        favicon::package_ico(backend, image, ICO_SIZES).map_err(|e| e.to_string())
    } else {
        convert(backend, image, request.format.as_deref())
    };

    match result {
        Ok(bytes) => ProcessResponse::ok(STANDARD.encode(bytes)),
        Err(e) => {
            eprintln!("{ERROR_PROCESSING}: {e}");
            ProcessResponse::fail(ERROR_PROCESSING)
        }
    }
}

fn convert(
    backend: &impl ImageBackend,
    image: &[u8],
    format: Option<&str>,
) -> Result<Vec<u8>, String> {
    let format = match format {
        Some(name) => EncodeFormat::from_name(name)
            .ok_or_else(|| format!("unknown target format {name:?}"))?,
        None => EncodeFormat::WebP,
    };
    backend.convert(image, format).map_err(|e| e.to_string())
}
