//! Blocking command execution
//!
//! Commands are started with [`std::process::Command`] directly, never through
//! a shell, so arguments reach the child exactly as given.

use std::process::{Command, ExitStatus, Stdio};

use exfs_core::prelude::*;

/// Output of a command run in capture mode.
///
/// Both streams are kept even when the command fails so callers can inspect
/// stderr for diagnostics.
#[derive(Debug)]
pub struct CaptureOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: Result<()>,
}

impl CaptureOutput {
    pub fn is_success(&self) -> bool {
        self.status.is_ok()
    }

    /// Convert into `(stdout, stderr)`, failing with the command's error
    pub fn into_result(self) -> Result<(String, String)> {
        self.status.map(|()| (self.stdout, self.stderr))
    }
}

/// Something that can start external commands.
///
/// Components that need to spawn processes take a runner instead of calling
/// [`Command`] themselves, which lets tests substitute a mock.
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait ProcessRunner {
    /// Run `command` with stdin, stdout and stderr inherited from this process.
    fn run(&self, command: &str, args: &[String]) -> Result<()>;

    /// Run `command` with stdin inherited and stdout/stderr captured.
    fn capture(&self, command: &str, args: &[String]) -> CaptureOutput;
}

/// Runner backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &str, args: &[String]) -> Result<()> {
        debug!("Running {} {:?}", command, args);

        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::process_spawn(command, e))?;

        check_status(command, status, String::new())
    }

    fn capture(&self, command: &str, args: &[String]) -> CaptureOutput {
        debug!("Capturing {} {:?}", command, args);

        let output = match Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                return CaptureOutput {
                    stdout: String::new(),
                    stderr: String::new(),
                    status: Err(Error::process_spawn(command, e)),
                }
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        trace!(
            "{} produced {} bytes of stdout, {} bytes of stderr",
            command,
            stdout.len(),
            stderr.len()
        );

        let status = check_status(command, output.status, stderr.clone());
        CaptureOutput {
            stdout,
            stderr,
            status,
        }
    }
}

/// Map a finished child's exit status to a result
fn check_status(command: &str, status: ExitStatus, stderr: String) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        debug!("{} exited with {:?}", command, status.code());
        Err(Error::process_exit(command, status.code(), stderr))
    }
}
