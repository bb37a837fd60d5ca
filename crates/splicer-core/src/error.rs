//! Error type shared by every core module.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout `splicer-core`.
pub type Result<T> = std::result::Result<T, SplicerError>;

#[derive(Debug, Error)]
pub enum SplicerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("{0} contains no audio")]
    NoAudio(PathBuf),

    #[error("operation cancelled")]
    Cancelled,

    #[error("filename is empty")]
    EmptyFilename,

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("{0} already exists")]
    OutputExists(PathBuf),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("playback error: {0}")]
    Playback(String),
}

impl SplicerError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
