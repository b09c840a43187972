use std::path::PathBuf;

use palette_engine::PaletteError;
use thiserror::Error;

/// Failure to turn bytes into a pixel grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Not a PNG file")]
    NotAnImage,

    #[error("Corrupted PNG file: {0}")]
    Corrupted(String),

    #[error("Out of memory while decoding")]
    OutOfMemory,
}

/// Failure to turn a pixel grid into bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Out of memory while encoding")]
    OutOfMemory,

    #[error("PNG encode error: {0}")]
    CodecFailure(String),
}

/// Errors surfaced by the palette workflows, with the file they concern.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Can't read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("{name}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl WorkflowError {
    /// Whether a multi-file run must stop, as opposed to skipping the file.
    ///
    /// Unreadable files and images that do not decode are skipped. Memory
    /// exhaustion and decoder contract violations end the run.
    pub fn is_fatal(&self) -> bool {
        match self {
            WorkflowError::Read { .. } => false,
            WorkflowError::Decode { source, .. } => matches!(source, DecodeError::OutOfMemory),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(DecodeError::NotAnImage.to_string(), "Not a PNG file");
        assert_eq!(
            DecodeError::Corrupted("bad CRC".to_string()).to_string(),
            "Corrupted PNG file: bad CRC"
        );
    }

    #[test]
    fn test_workflow_error_carries_path() {
        let error = WorkflowError::Decode {
            path: PathBuf::from("shots/a.png"),
            source: DecodeError::NotAnImage,
        };
        assert_eq!(error.to_string(), "shots/a.png: Not a PNG file");
    }

    #[test]
    fn test_palette_error_carries_source_name_and_line() {
        let error = WorkflowError::Palette {
            name: "colors.txt".to_string(),
            source: PaletteError::EmptySet,
        };
        assert_eq!(error.to_string(), "colors.txt: palette is empty");
    }

    #[test]
    fn test_encode_error_is_transparent() {
        let error: WorkflowError = EncodeError::CodecFailure("boom".to_string()).into();
        assert_eq!(error.to_string(), "PNG encode error: boom");
    }

    #[test]
    fn test_fatality() {
        let read = WorkflowError::Read {
            path: PathBuf::from("x"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!read.is_fatal());

        let corrupted = WorkflowError::Decode {
            path: PathBuf::from("x"),
            source: DecodeError::Corrupted(String::new()),
        };
        assert!(!corrupted.is_fatal());

        let oom = WorkflowError::Decode {
            path: PathBuf::from("x"),
            source: DecodeError::OutOfMemory,
        };
        assert!(oom.is_fatal());

        let palette = WorkflowError::Palette {
            name: "x".to_string(),
            source: PaletteError::OutOfMemory,
        };
        assert!(palette.is_fatal());
    }
}
