//! # Run Configuration
//!
//! The values a host build supplies for one patch run. Nothing here reads
//! the process environment; the caller builds the config and passes it in.

use std::path::PathBuf;

/// Location of the vendored source relative to one environment's libdeps directory.
pub const TARGET_SUBPATH: [&str; 3] = ["M5Unified", "src", "M5Unified.cpp"];

/// Configuration for a single patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    /// Root of resolved build dependencies (`PROJECT_LIBDEPS_DIR`).
    pub deps_root: PathBuf,
    /// Current build environment name (`PIOENV`).
    pub env_id: String,
}

impl PatchConfig {
    /// Creates a config from a dependency root and an environment name.
    pub fn new(deps_root: impl Into<PathBuf>, env_id: impl Into<String>) -> Self {
        Self {
            deps_root: deps_root.into(),
            env_id: env_id.into(),
        }
    }

    /// Directory holding this environment's dependencies.
    pub fn env_dir(&self) -> PathBuf {
        self.deps_root.join(&self.env_id)
    }

    /// `<deps_root>/<env_id>/M5Unified/src/M5Unified.cpp`
    pub fn target_path(&self) -> PathBuf {
        TARGET_SUBPATH
            .iter()
            .fold(self.env_dir(), |acc, part| acc.join(part))
    }
}
