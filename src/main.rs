//! exfs - process, scratch-file and file lookup helpers
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use exfs::cli::{dispatch, Cli};
use exfs::core::logging;
use exfs::FileSystem;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {}", e);
    }

    let fs = FileSystem::new();
    let result = {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        let result = dispatch(cli, &fs, &mut stdout, &mut stderr);
        stdout.flush()?;
        result
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Expected outcomes (not found, aborted edit) get a plain message
        Err(e) if e.is_recoverable() => {
            tracing::info!("exfs: {}", e);
            eprintln!("exfs: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            tracing::error!("exfs failed: {}", e);
            if e.is_fatal() {
                eprintln!("Log file: {}", logging::get_current_log_file().display());
            }
            Err(e.into())
        }
    }
}
