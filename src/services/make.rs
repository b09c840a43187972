use std::io::Read;
use std::path::{Path, PathBuf};

use palette_engine::{from_text_lines, to_grid, ColorSet};

use crate::codec::{self, EncodeOptions};
use crate::error::WorkflowError;

/// Where a text palette list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Stdin,
    File(PathBuf),
}

impl ListSource {
    /// Name used in log lines and error messages.
    pub fn name(&self) -> String {
        match self {
            ListSource::Stdin => "<stdin>".to_string(),
            ListSource::File(path) => path.display().to_string(),
        }
    }
}

/// Result of a successful `make` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeReport {
    pub colors: usize,
    pub bytes: usize,
    pub output: PathBuf,
}

/// Read a text palette list: one hex color per line, blank lines ignored.
///
/// The whole list is rejected at its first malformed line. Bytes that are
/// not UTF-8 make their line malformed.
pub fn read_palette_list<R: Read>(mut reader: R, name: &str) -> Result<ColorSet, WorkflowError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| WorkflowError::Read {
            path: PathBuf::from(name),
            source,
        })?;

    let lines = bytes
        .split_inclusive(|&b| b == b'\n')
        .map(String::from_utf8_lossy);
    from_text_lines(lines).map_err(|source| WorkflowError::Palette {
        name: name.to_string(),
        source,
    })
}

/// Encode a palette as a single-row RGBA PNG.
pub fn encode_palette(
    set: &ColorSet,
    name: &str,
    options: &EncodeOptions,
) -> Result<Vec<u8>, WorkflowError> {
    let grid = to_grid(set).map_err(|source| WorkflowError::Palette {
        name: name.to_string(),
        source,
    })?;
    Ok(codec::encode(&grid, options)?)
}

/// Read a palette list and write it out as a palette PNG.
///
/// Nothing is written unless the list is valid and encoding succeeded.
pub fn make_palette(
    source: &ListSource,
    output: &Path,
    options: &EncodeOptions,
) -> Result<MakeReport, WorkflowError> {
    let name = source.name();
    let set = match source {
        ListSource::Stdin => read_palette_list(std::io::stdin().lock(), &name)?,
        ListSource::File(path) => {
            let file = std::fs::File::open(path).map_err(|source| WorkflowError::Read {
                path: path.clone(),
                source,
            })?;
            read_palette_list(file, &name)?
        }
    };
    tracing::info!(source = %name, colors = set.len(), "Read palette list");

    let png_bytes = encode_palette(&set, &name, options)?;
    std::fs::write(output, &png_bytes).map_err(|source| WorkflowError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(MakeReport {
        colors: set.len(),
        bytes: png_bytes.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_source_names() {
        assert_eq!(ListSource::Stdin.name(), "<stdin>");
        assert_eq!(
            ListSource::File(PathBuf::from("lists/a.txt")).name(),
            "lists/a.txt"
        );
    }

    #[test]
    fn test_read_palette_list() {
        let text = "#ff0000\n\nFF0000FF\n00ff0080\n";
        let set = read_palette_list(text.as_bytes(), "t").unwrap();
        assert_eq!(set.to_string(), "FF0000FF\n00FF0080\n");
    }

    #[test]
    fn test_read_palette_list_reports_line() {
        let err = read_palette_list("000000\n111111\nGG0000\n".as_bytes(), "list.txt").unwrap_err();
        match err {
            WorkflowError::Palette { name, source } => {
                assert_eq!(name, "list.txt");
                assert_eq!(source.line(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_palette_list_non_utf8_line() {
        let bytes: &[u8] = b"000000\n\xff\xfe0000\n";
        let err = read_palette_list(bytes, "bin").unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Palette { ref source, .. } if source.line() == Some(2)
        ));
    }

    #[test]
    fn test_encode_palette_empty_fails() {
        let err = encode_palette(&ColorSet::new(), "empty", &EncodeOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "empty: palette is empty");
    }
}
