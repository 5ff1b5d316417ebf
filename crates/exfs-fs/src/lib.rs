//! # exfs-fs - Editing and Lookup
//!
//! Filesystem-facing operations for CLI tools:
//!
//! - [`TempFileEditor`] - round-trip text through the user's editor via a
//!   scratch file
//! - [`UpwardLocator`] - find a file in the working directory or an ancestor,
//!   never looking above the home directory
//! - [`EditorSettings`] - pick the editor program from flags or the environment
//! - [`FileSystem`] - one value exposing all of the above plus raw command
//!   execution

pub mod config;
pub mod editor;
pub mod filesystem;
pub mod locator;

pub use config::{EditorSettings, EDITOR_ENV_VAR, VISUAL_ENV_VAR};
pub use editor::TempFileEditor;
pub use filesystem::FileSystem;
pub use locator::{search_upward, UpwardLocator};
