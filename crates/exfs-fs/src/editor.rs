//! Scratch-file editing in an external editor.
//!
//! Text is written to a uniquely named temporary file, the user's editor is
//! run on it with the terminal inherited, and whatever the file holds once the
//! editor exits is returned. An empty file means the user aborted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use exfs_core::prelude::*;
use exfs_process::ProcessRunner;
use tempfile::{Builder, NamedTempFile};

/// Prefix used when the name hint has no usable stem
const DEFAULT_PREFIX: &str = "exfs-";

/// Random characters appended to the prefix
const RANDOM_LEN: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

/// Runs an external editor on scratch files.
#[derive(Debug)]
pub struct TempFileEditor<R> {
    runner: R,
    /// Directory for scratch files; the system temp dir when `None`
    temp_dir: Option<PathBuf>,
}

impl<R: ProcessRunner> TempFileEditor<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            temp_dir: None,
        }
    }

    /// Place scratch files in `dir` instead of the system temp dir
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Open `initial_text` in `editor` and return the edited text.
    ///
    /// `file_name_hint` seeds the scratch file name (`notes.md` becomes
    /// `notes<random>.md`) so the editor can pick a file type.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the scratch file cannot be created, written or read
    /// - [`Error::ProcessSpawn`] / [`Error::ProcessExit`] if the editor fails;
    ///   any partial edit is discarded
    /// - [`Error::EditAborted`] if the file is empty after editing, or
    ///   [`Error::AbortCleanup`] if it also could not be removed
    /// - [`Error::TempCleanup`] if the scratch file cannot be removed; the
    ///   edited text is carried in the error
    pub fn edit(&self, editor: &str, file_name_hint: &str, initial_text: &str) -> Result<String> {
        let mut file = self.create_scratch(file_name_hint)?;
        file.write_all(initial_text.as_bytes())?;
        file.flush()?;

        let path = file.path().to_path_buf();
        debug!("Editing scratch file {} with {}", path.display(), editor);

        // On failure `file` is dropped here, which removes the scratch file
        self.runner
            .run(editor, &[path.to_string_lossy().into_owned()])?;

        let content = fs::read_to_string(&path)?;
        finish(file, content, NamedTempFile::close)
    }

    fn create_scratch(&self, file_name_hint: &str) -> Result<NamedTempFile> {
        let (prefix, suffix) = split_hint(file_name_hint);

        let mut builder = Builder::new();
        builder.prefix(&prefix).suffix(&suffix).rand_bytes(RANDOM_LEN);

        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        Ok(file)
    }
}

/// Remove the scratch file and turn its final content into the edit result.
///
/// An empty `content` is an abort. A removal failure is reported either way;
/// after a good edit the text travels with the error.
fn finish<F>(file: NamedTempFile, content: String, remove: F) -> Result<String>
where
    F: FnOnce(NamedTempFile) -> io::Result<()>,
{
    let path = file.path().to_path_buf();
    let removed = remove(file);

    if content.is_empty() {
        info!("Edit aborted: scratch file left empty");
        return match removed {
            Ok(()) => Err(Error::EditAborted),
            Err(e) => {
                warn!("Failed to remove aborted scratch file {}: {}", path.display(), e);
                Err(Error::abort_cleanup(path, e))
            }
        };
    }

    match removed {
        Ok(()) => {
            trace!("Removed scratch file {}", path.display());
            Ok(content)
        }
        Err(e) => Err(Error::temp_cleanup(path, e, content)),
    }
}

/// Split a name hint into a file name prefix and an extension suffix.
///
/// Only the final path component of the hint is used.
fn split_hint(hint: &str) -> (String, String) {
    let path = Path::new(hint);

    let prefix = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    let suffix = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (prefix, suffix)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
