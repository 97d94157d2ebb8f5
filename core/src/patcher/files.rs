use crate::config::PatchConfig;
use crate::error::{PatchError, PatchResult};
use crate::patcher::outcome::{PatchMode, PatchOutcome};
use crate::replacements::ReplacementTable;
use std::fs;
use std::io;
use std::path::Path;

#[cfg(any(target_os = "linux", target_os = "android"))]
const ELOOP: Option<i32> = Some(40);
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
const ELOOP: Option<i32> = Some(62);
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
const ELOOP: Option<i32> = None;

/// Patches the target of `config` with the built-in table, writing changes.
pub fn patch(config: &PatchConfig) -> PatchResult<PatchOutcome> {
    patch_file(
        config,
        &ReplacementTable::m5unified_touch_pad(),
        PatchMode::Write,
    )
}

/// Applies `table` to the file named by `config`.
///
/// A missing target is reported as [`PatchOutcome::Skipped`], not an error.
/// The file is only rewritten when the table changes its content and `mode`
/// is [`PatchMode::Write`]. Read, decode and write failures are returned as-is.
pub fn patch_file(
    config: &PatchConfig,
    table: &ReplacementTable,
    mode: PatchMode,
) -> PatchResult<PatchOutcome> {
    let path = config.target_path();
    log::debug!("Resolved target {}", path.display());

    let exists = match path.try_exists() {
        Ok(exists) => exists,
        Err(e) if cannot_exist(&e) => false,
        Err(source) => {
            return Err(PatchError::Read {
                path: path.clone(),
                source,
            })
        }
    };
    if !exists {
        log::info!("{} not present for env {:?}", path.display(), config.env_id);
        return Ok(PatchOutcome::Skipped { path });
    }

    let original = read_utf8(&path)?;
    let applied = table.apply(&original);

    if applied.text == original {
        return Ok(PatchOutcome::Unchanged { path });
    }

    let written = match mode {
        PatchMode::Write => {
            fs::write(&path, applied.text.as_bytes()).map_err(|source| PatchError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!(
                "Wrote {} ({} replacement(s))",
                path.display(),
                applied.total_hits()
            );
            true
        }
        PatchMode::Check => false,
    };

    Ok(PatchOutcome::Patched {
        path,
        hits: applied.hits,
        written,
    })
}

/// Lookup failures that mean the path cannot resolve to a file: a missing
/// component, a parent that is not a directory, or a symlink loop.
fn cannot_exist(err: &io::Error) -> bool {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => true,
        _ => ELOOP.is_some() && err.raw_os_error() == ELOOP,
    }
}

/// Reads a file and decodes it strictly as UTF-8.
fn read_utf8(path: &Path) -> PatchResult<String> {
    let bytes = fs::read(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| PatchError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
