//! Error types
//!
//! Two families of failure exist: file errors (the input could not be read or
//! decoded) and configuration errors (an option value is invalid). Both are
//! fatal to the run.

use std::io;
use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, WordFreqError>;

#[derive(Debug, thiserror::Error)]
pub enum WordFreqError {
    /// Input path does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Input path is a directory
    #[error("{} is a directory, not a file", path.display())]
    IsDirectory { path: PathBuf },

    /// Reading the file failed
    #[error("unable to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Content is not valid text in the selected encoding
    #[error("unable to decode {} as {encoding}: {detail}", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
        detail: String,
    },

    /// An option has an invalid value
    #[error("invalid value '{value}' for --{option}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The encoding label is not recognised
    #[error("unknown encoding '{label}' (use utf8, auto, or a WHATWG label such as latin1)")]
    UnknownEncoding { label: String },
}

impl WordFreqError {
    /// True for errors raised while loading the input file
    pub fn is_file(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::IsDirectory { .. } | Self::Read { .. } | Self::Decode { .. }
        )
    }

    /// True for errors raised while validating options
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidOption { .. } | Self::UnknownEncoding { .. })
    }
}
