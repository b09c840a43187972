use std::io::Read;
use std::path::{Path, PathBuf};

use palette_engine::{scan_into, ColorSet};

use crate::error::WorkflowError;

/// Outcome of scanning text sources for hex color tokens.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Distinct colors found, in order of first appearance
    pub palette: ColorSet,
    /// Sources that were scanned
    pub sources: usize,
    /// Sources that could not be read
    pub skipped: Vec<WorkflowError>,
}

/// Scan one text stream for `#RRGGBB` / `#RRGGBBAA` tokens.
///
/// Returns the number of colors that were new to `set`. Invalid UTF-8 is
/// replaced, never fatal.
pub fn scan_reader<R: Read>(
    mut reader: R,
    name: &str,
    set: &mut ColorSet,
) -> Result<usize, WorkflowError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| WorkflowError::Read {
            path: PathBuf::from(name),
            source,
        })?;
    let text = String::from_utf8_lossy(&bytes);
    let inserted = scan_into(&text, set).map_err(|source| WorkflowError::Palette {
        name: name.to_string(),
        source,
    })?;
    tracing::info!(source = name, new_colors = inserted, total_colors = set.len(), "Scanned");
    Ok(inserted)
}

/// Scan several text files into one palette, in order.
///
/// Unreadable files are logged and skipped.
pub fn scan_files<P: AsRef<Path>>(paths: &[P]) -> Result<ScanReport, WorkflowError> {
    let mut report = ScanReport::default();
    for path in paths {
        let path = path.as_ref();
        let result = std::fs::File::open(path)
            .map_err(|source| WorkflowError::Read {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|file| scan_reader(file, &path.display().to_string(), &mut report.palette));
        match result {
            Ok(_) => report.sources += 1,
            Err(e) if !e.is_fatal() => {
                tracing::warn!(%e, "Skipping file");
                report.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Scan standard input.
pub fn scan_stdin() -> Result<ScanReport, WorkflowError> {
    let mut report = ScanReport::default();
    scan_reader(std::io::stdin().lock(), "<stdin>", &mut report.palette)?;
    report.sources = 1;
    Ok(report)
}
