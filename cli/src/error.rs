#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use m5patch_core::PatchError;
use std::path::PathBuf;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the patcher, passed through unchanged.
    #[display("{}", _0)]
    Patch(PatchError),

    /// IO Error wrapper (writing status lines).
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Logger could not be installed.
    #[display("Logger Error: {}", _0)]
    Logger(log::SetLoggerError),

    /// `--check` found content that still needs patching.
    #[from(ignore)]
    #[display("Patch pending for {}", _0.display())]
    PendingPatch(PathBuf),
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Patch(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Logger(e) => Some(e),
            CliError::PendingPatch(_) => None,
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
