//! # Error Handling
//!
//! Provides the `PatchError` enum shared by the library and the CLI.

use derive_more::Display;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors raised while patching the vendored source.
///
/// Every IO variant carries the path, so the failing file is always named
/// in the build log.
#[derive(Debug, Display)]
pub enum PatchError {
    /// The target exists but could not be read.
    #[display("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The patched content could not be written back.
    #[display("Failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The target is not valid UTF-8.
    #[display("Encoding Error in {}: {source}", path.display())]
    Encoding {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying decode error.
        source: FromUtf8Error,
    },

    /// The target was required but is absent.
    #[display("Target not found: {}", path.display())]
    NotFound {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// A replacement table failed validation.
    #[display("Invalid replacement table: {_0}")]
    InvalidTable(String),
}

impl PatchError {
    /// True for failures reading or writing the target file.
    pub fn is_file_access(&self) -> bool {
        matches!(self, PatchError::Read { .. } | PatchError::Write { .. })
    }

    /// True when the target could not be decoded as UTF-8.
    pub fn is_encoding(&self) -> bool {
        matches!(self, PatchError::Encoding { .. })
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatchError::Read { source, .. } | PatchError::Write { source, .. } => Some(source),
            PatchError::Encoding { source, .. } => Some(source),
            PatchError::NotFound { .. } | PatchError::InvalidTable(_) => None,
        }
    }
}

/// Helper type alias for Result using PatchError.
pub type PatchResult<T> = Result<T, PatchError>;
