#![deny(missing_docs)]

//! # patch-m5unified
//!
//! PlatformIO pre-build hook that makes the vendored M5Unified sources
//! compile against ESP-IDF 5.5.
//!
//! The libdeps root and environment name come from `--libdeps-dir`/`--env`
//! or from the `PROJECT_LIBDEPS_DIR`/`PIOENV` variables the host sets.

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::error::CliResult;

mod error;
mod patch;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Patch M5Unified for ESP-IDF 5.5 touch_pad_t changes")]
struct Cli {
    #[clap(flatten)]
    args: patch::PatchArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(level_for(cli.verbose))
        .init()?;

    let stdout = std::io::stdout();
    patch::execute(&cli.args, &mut stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "patch-m5unified",
            "--libdeps-dir",
            "/proj/.pio/libdeps",
            "--env",
            "m5stack-cores3",
            "--check",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.args.libdeps_dir, PathBuf::from("/proj/.pio/libdeps"));
        assert_eq!(cli.args.env_id, "m5stack-cores3");
        assert!(cli.args.check);
        assert!(!cli.args.require_present);
        assert_eq!(level_for(cli.verbose), LevelFilter::Debug);
    }

    #[test]
    fn test_config_from_args() {
        let cli = Cli::try_parse_from([
            "patch-m5unified",
            "--libdeps-dir",
            "deps",
            "--env",
            "core2",
            "--require-present",
        ])
        .unwrap();

        assert!(cli.args.require_present);
        assert_eq!(
            cli.args.config().target_path(),
            PathBuf::from("deps/core2/M5Unified/src/M5Unified.cpp")
        );
    }

    #[test]
    fn test_default_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
