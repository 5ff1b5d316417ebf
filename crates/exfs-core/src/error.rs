//! Error types shared by every exfs crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// exfs error types organized by domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine the user home directory")]
    HomeDirUnavailable,

    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },

    // ─────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to spawn '{command}': {reason}")]
    ProcessSpawn { command: String, reason: String },

    #[error("'{command}' exited with code {code:?}{}", stderr_suffix(.stderr))]
    ProcessExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Editor Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No editor configured. Set $VISUAL or $EDITOR.")]
    EditorNotConfigured,

    #[error("Editor not found in PATH: {editor}")]
    EditorNotFound { editor: String },

    #[error("Aborting with empty result")]
    EditAborted,

    #[error("Aborting with empty result; temporary file {path} could not be removed: {reason}")]
    AbortCleanup { path: PathBuf, reason: String },

    #[error("Edit succeeded but temporary file {path} could not be removed: {reason}")]
    TempCleanup {
        path: PathBuf,
        reason: String,
        /// The edited text, still valid despite the cleanup failure
        content: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Lookup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot search above user home directory: {path}")]
    OutsideHome { path: PathBuf },

    #[error("Reached user home dir & did not find file: {name}")]
    FileNotFound { name: String },

    #[error("Invalid file name for lookup: {name:?}")]
    InvalidFileName { name: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    pub fn process_spawn(command: impl Into<String>, reason: impl ToString) -> Self {
        Self::ProcessSpawn {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    pub fn process_exit(command: impl Into<String>, code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ProcessExit {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn editor_not_found(editor: impl Into<String>) -> Self {
        Self::EditorNotFound {
            editor: editor.into(),
        }
    }

    pub fn temp_cleanup(
        path: impl Into<PathBuf>,
        reason: impl ToString,
        content: impl Into<String>,
    ) -> Self {
        Self::TempCleanup {
            path: path.into(),
            reason: reason.to_string(),
            content: content.into(),
        }
    }

    pub fn abort_cleanup(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::AbortCleanup {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn outside_home(path: impl Into<PathBuf>) -> Self {
        Self::OutsideHome { path: path.into() }
    }

    pub fn file_not_found(name: impl Into<String>) -> Self {
        Self::FileNotFound { name: name.into() }
    }

    pub fn invalid_file_name(name: impl Into<String>) -> Self {
        Self::InvalidFileName { name: name.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are expected outcomes the caller should handle
    /// rather than system faults.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound { .. }
                | Error::EditAborted
                | Error::AbortCleanup { .. }
                | Error::TempCleanup { .. }
        )
    }

    /// Check if this error should end the calling command
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::HomeDirUnavailable
                | Error::UnsupportedPlatform { .. }
                | Error::EditorNotConfigured
                | Error::EditorNotFound { .. }
                | Error::OutsideHome { .. }
        )
    }

    /// Whether the user cancelled an edit by leaving the scratch file empty
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::EditAborted | Error::AbortCleanup { .. })
    }

    /// Edited text that survived the failure, if any
    pub fn recovered_content(&self) -> Option<&str> {
        match self {
            Error::TempCleanup { content, .. } => Some(content),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
