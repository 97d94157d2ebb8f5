#![deny(missing_docs)]

//! # M5Patch Core
//!
//! Rewrites the vendored M5Unified source so it builds against ESP-IDF 5.5,
//! where `touch_pad_t` is no longer usable in its channel tables.

/// Shared error types.
pub mod error;

/// Per-run configuration supplied by the host build.
pub mod config;

/// Literal replacement tables.
pub mod replacements;

/// Target file patching.
pub mod patcher;

pub use config::PatchConfig;
pub use error::{PatchError, PatchResult};
pub use patcher::{patch, patch_file, PatchMode, PatchOutcome};
pub use replacements::{Applied, Replacement, ReplacementTable};

/// Prefix for every status line the hook prints.
pub const STATUS_PREFIX: &str = "[patch_m5unified]";

/// Formats an outcome as the hook's console line.
pub fn status_line(outcome: &PatchOutcome) -> String {
    format!("{} {}", STATUS_PREFIX, outcome)
}
