// error.rs
use std::path::{Path, PathBuf};

use image::ImageError;
use thiserror::Error;

/// Errors that can occur while converting an image to WebP.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the source, writing the destination or reading file metadata failed
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be parsed as an image
    #[error("cannot identify image file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The WebP encoder rejected the image or its configuration
    #[error("WebP encoding failed: {0}")]
    Encode(String),
}

impl ConvertError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Decode failures that are really I/O failures are reported as `Io`.
    pub(crate) fn decode(path: &Path, source: ImageError) -> Self {
        match source {
            ImageError::IoError(e) => Self::io(path, e),
            other => ConvertError::Decode {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }

    /// True for failures caused by the files themselves (missing, unreadable,
    /// not an image) rather than by the encoder.
    pub fn is_io_related(&self) -> bool {
        matches!(self, ConvertError::Io { .. } | ConvertError::Decode { .. })
    }
}
