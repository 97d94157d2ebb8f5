#![deny(missing_docs)]

//! # Patch Command
//!
//! Resolves the M5Unified source for one PlatformIO environment, applies the
//! `touch_pad_t` compatibility table and prints a `[patch_m5unified]` status line.

use crate::error::{CliError, CliResult};
use m5patch_core::{
    patch_file, status_line, PatchConfig, PatchError, PatchMode, PatchOutcome, ReplacementTable,
};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for a patch run.
#[derive(clap::Args, Debug, Clone)]
pub struct PatchArgs {
    /// Root of resolved build dependencies (e.g. .pio/libdeps).
    #[clap(long, env = "PROJECT_LIBDEPS_DIR")]
    pub libdeps_dir: PathBuf,

    /// Build environment name, used as a subdirectory of the libdeps root.
    #[clap(long = "env", env = "PIOENV")]
    pub env_id: String,

    /// Report whether a patch is needed without writing; fails if one is.
    #[clap(long)]
    pub check: bool,

    /// Fail instead of skipping when M5Unified is not present.
    #[clap(long)]
    pub require_present: bool,
}

impl PatchArgs {
    /// Builds the core configuration from the parsed arguments.
    pub fn config(&self) -> PatchConfig {
        PatchConfig::new(&self.libdeps_dir, &self.env_id)
    }

    fn mode(&self) -> PatchMode {
        if self.check {
            PatchMode::Check
        } else {
            PatchMode::Write
        }
    }
}

/// Executes a patch run, writing the status line to `out`.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `out` - Destination for the status line (stdout in the binary).
pub fn execute(args: &PatchArgs, out: &mut impl Write) -> CliResult<PatchOutcome> {
    let config = args.config();
    let table = ReplacementTable::m5unified_touch_pad();

    let outcome = patch_file(&config, &table, args.mode())?;

    if let PatchOutcome::Skipped { path } = &outcome {
        if args.require_present {
            return Err(PatchError::NotFound { path: path.clone() }.into());
        }
    }
    writeln!(out, "{}", status_line(&outcome))?;

    if outcome.is_pending() {
        return Err(CliError::PendingPatch(outcome.path().to_path_buf()));
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(libdeps_dir: PathBuf) -> PatchArgs {
        PatchArgs {
            libdeps_dir,
            env_id: "m5stack-core2".into(),
            check: false,
            require_present: false,
        }
    }

    fn seed(args: &PatchArgs, content: &str) -> PathBuf {
        let target = args.config().target_path();
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, content).unwrap();
        target
    }

    #[test]
    fn test_skip_prints_path() {
        let dir = tempdir().unwrap();
        let args = args(dir.path().to_path_buf());
        let mut out = Vec::new();

        let outcome = execute(&args, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            format!(
                "[patch_m5unified] skip: {} not found\n",
                outcome.path().display()
            )
        );
    }

    #[test]
    fn test_require_present_fails_on_missing() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.require_present = true;
        let mut out = Vec::new();

        let res = execute(&args, &mut out);

        assert!(matches!(res, Err(CliError::Patch(PatchError::NotFound { .. }))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_patch_then_no_change() {
        let dir = tempdir().unwrap();
        let args = args(dir.path().to_path_buf());
        let target = seed(&args, "static constexpr touch_pad_t s_channel_id[] = {\n");

        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();
        execute(&args, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[patch_m5unified] patched touch_pad_t compatibility for ESP-IDF 5.5\n\
             [patch_m5unified] no changes needed\n"
        );
        assert_eq!(
            fs::read_to_string(target).unwrap(),
            "static constexpr int s_channel_id[] = {\n"
        );
    }

    #[test]
    fn test_check_reports_pending_without_writing() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.check = true;
        let target = seed(&args, "TOUCH_PAD_NUM7\n");
        let mut out = Vec::new();

        let res = execute(&args, &mut out);

        assert!(matches!(res, Err(CliError::PendingPatch(_))));
        assert_eq!(fs::read_to_string(target).unwrap(), "TOUCH_PAD_NUM7\n");
    }

    #[test]
    fn test_check_passes_on_compatible_file() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.check = true;
        seed(&args, "static constexpr int s_channel_id[] = {\n");
        let mut out = Vec::new();

        let outcome = execute(&args, &mut out).unwrap();

        assert!(!outcome.is_changed());
    }
}
