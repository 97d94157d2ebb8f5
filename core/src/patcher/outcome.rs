use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Whether a run may write to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchMode {
    /// Overwrite the target when the table changes it.
    #[default]
    Write,
    /// Report what would change without touching the file.
    Check,
}

/// What a patch run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The target does not exist for this environment.
    Skipped {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// None of the table's literals were present.
    Unchanged {
        /// Path that was inspected.
        path: PathBuf,
    },

    /// At least one literal was replaced.
    Patched {
        /// Path that was patched.
        path: PathBuf,
        /// Occurrences replaced per table entry.
        hits: Vec<usize>,
        /// False when running in [`PatchMode::Check`].
        written: bool,
    },
}

impl PatchOutcome {
    /// The resolved target path.
    pub fn path(&self) -> &Path {
        match self {
            PatchOutcome::Skipped { path }
            | PatchOutcome::Unchanged { path }
            | PatchOutcome::Patched { path, .. } => path,
        }
    }

    /// True if the table changed the content, whether or not it was written.
    pub fn is_changed(&self) -> bool {
        matches!(self, PatchOutcome::Patched { .. })
    }

    /// True if the content changed but was left on disk as-is.
    pub fn is_pending(&self) -> bool {
        matches!(self, PatchOutcome::Patched { written: false, .. })
    }
}

impl Display for PatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchOutcome::Skipped { path } => write!(f, "skip: {} not found", path.display()),
            PatchOutcome::Unchanged { .. } => write!(f, "no changes needed"),
            PatchOutcome::Patched { written: true, .. } => {
                write!(f, "patched touch_pad_t compatibility for ESP-IDF 5.5")
            }
            PatchOutcome::Patched { written: false, .. } => write!(
                f,
                "{} needs touch_pad_t compatibility patch for ESP-IDF 5.5",
                self.path().display()
            ),
        }
    }
}
