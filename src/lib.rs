//! exfs Library
//!
//! Process execution, scratch-file editing and upward file lookup for CLI
//! tools. The work lives in the `exfs-*` crates; this crate adds the
//! command-line glue.

pub mod cli;

pub use exfs_core as core;
pub use exfs_fs as fs;
pub use exfs_process as process;

pub use exfs_fs::FileSystem;
