#![deny(missing_docs)]

//! # Vendored Source Patching
//!
//! Applies a [`ReplacementTable`](crate::replacements::ReplacementTable) to the
//! M5Unified source of one build environment.
//!
//! - **files**: Locating, reading and conditionally rewriting the target.
//! - **outcome**: What a run did, rendered as the hook's status text.

/// Target file handling.
pub mod files;

/// Run results.
pub mod outcome;

pub use files::{patch, patch_file};
pub use outcome::{PatchMode, PatchOutcome};
