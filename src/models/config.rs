use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::codec::DEFAULT_DECODE_LIMIT;
use crate::error::WorkflowError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "PALKIT_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where `make` writes the palette image
    pub output: PathBuf,

    /// PNG compression effort
    pub compression: Compression,

    /// Re-compress palette images with oxipng
    pub optimize: bool,

    /// Largest allocation `extract` may make for one image, in bytes
    pub max_decode_bytes: usize,
}

/// PNG compression effort
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<Compression> for png::Compression {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("palette.png")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            compression: Compression::default(),
            optimize: false,
            max_decode_bytes: DEFAULT_DECODE_LIMIT,
        }
    }
}

impl AppConfig {
    /// Config file to use: the explicit path, else `$PALKIT_CONFIG`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Read and parse a config file.
    pub fn try_load(path: &Path) -> Result<Self, WorkflowError> {
        let content = std::fs::read_to_string(path).map_err(|source| WorkflowError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| WorkflowError::Config(format!("{}: {e}", path.display())))
    }

    /// Load configuration, falling back to defaults when there is no file
    /// or it cannot be used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };
        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!(
                    file = %path.display(),
                    output = %config.output.display(),
                    compression = ?config.compression,
                    optimize = config.optimize,
                    max_decode_bytes = config.max_decode_bytes,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
