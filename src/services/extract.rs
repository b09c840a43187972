use std::path::Path;

use palette_engine::{extract_into, ColorSet, ExtractSummary};

use crate::codec;
use crate::error::WorkflowError;

/// Outcome of extracting one palette from several images.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Distinct colors of all decoded images, in encounter order
    pub palette: ColorSet,
    /// Images that contributed to the palette
    pub images: usize,
    /// Files that were skipped, with the reason
    pub skipped: Vec<WorkflowError>,
}

/// Decode one image file and add its colors to `set`.
///
/// Images needing more than `max_decode_bytes` to decode fail with
/// [`DecodeError::OutOfMemory`](crate::error::DecodeError::OutOfMemory).
pub fn extract_image(
    path: &Path,
    set: &mut ColorSet,
    max_decode_bytes: usize,
) -> Result<ExtractSummary, WorkflowError> {
    let bytes = std::fs::read(path).map_err(|source| WorkflowError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = codec::decode_with_limit(&bytes, max_decode_bytes).map_err(|source| WorkflowError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = extract_into(&grid, set).map_err(|source| WorkflowError::Palette {
        name: path.display().to_string(),
        source,
    })?;

    tracing::info!(
        file = %path.display(),
        width = grid.width(),
        height = grid.height(),
        new_colors = summary.inserted,
        total_colors = set.len(),
        "Extracted colors"
    );
    Ok(summary)
}

/// Extract one combined palette from `paths`, in order.
///
/// Files that cannot be read or decoded are logged and skipped. A fatal
/// error (see [`WorkflowError::is_fatal`]) ends the run.
pub fn extract_images<P: AsRef<Path>>(
    paths: &[P],
    max_decode_bytes: usize,
) -> Result<ExtractReport, WorkflowError> {
    let mut report = ExtractReport::default();
    for path in paths {
        match extract_image(path.as_ref(), &mut report.palette, max_decode_bytes) {
            Ok(_) => report.images += 1,
            Err(e) if !e.is_fatal() => {
                tracing::warn!(%e, "Skipping file");
                report.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
