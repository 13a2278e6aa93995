//! CLI output formatting.
//!
//! Each summary has a `format_*` function (returns a `String`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::imaging::Dimensions;
use crate::session::Artifact;
use std::path::Path;

/// Render a byte count as a short human-readable size.
///
/// ```text
/// 340 B   12.4 KB   2.0 MB
/// ```
pub fn human_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Format an identify result: `photo.jpg: 800x400`.
pub fn format_dimensions(path: &Path, dims: Dimensions) -> String {
    format!("{}: {}x{}", path.display(), dims.width, dims.height)
}

/// Format a written artifact: `favicons.zip (12.4 KB) → out/favicons.zip`.
pub fn format_artifact(artifact: &Artifact, written_to: &Path) -> String {
    format!(
        "{} ({}) → {}",
        artifact.filename,
        human_size(artifact.bytes.len()),
        written_to.display()
    )
}

pub fn print_artifact(artifact: &Artifact, written_to: &Path) {
    println!("{}", format_artifact(artifact, written_to));
}

pub fn print_dimensions(path: &Path, dims: Dimensions) {
    println!("{}", format_dimensions(path, dims));
}
