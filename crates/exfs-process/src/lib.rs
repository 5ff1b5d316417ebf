//! # exfs-process - Process Execution
//!
//! Thin blocking wrapper over [`std::process::Command`] with two modes:
//! interactive ([`ProcessRunner::run`]) and capture
//! ([`ProcessRunner::capture`]).
//!
//! Enable the `test-helpers` feature to get [`MockProcessRunner`] for use in
//! downstream tests.

pub mod runner;

pub use runner::{CaptureOutput, ProcessRunner, SystemRunner};

#[cfg(any(test, feature = "test-helpers"))]
pub use runner::MockProcessRunner;
