//! Facade over process execution, scratch-file editing and upward lookup

use std::path::PathBuf;

use exfs_core::Result;
use exfs_process::{CaptureOutput, ProcessRunner, SystemRunner};

use crate::editor::TempFileEditor;
use crate::locator::UpwardLocator;

/// Entry point for callers that need commands, edits and file lookup.
///
/// The process runner is injected so the editor can be exercised without a
/// real terminal editor.
#[derive(Debug)]
pub struct FileSystem<R = SystemRunner> {
    editor: TempFileEditor<R>,
    locator: UpwardLocator,
}

impl FileSystem<SystemRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner::new())
    }
}

impl Default for FileSystem<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> FileSystem<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            editor: TempFileEditor::new(runner),
            locator: UpwardLocator::new(),
        }
    }

    /// Replace the locator, e.g. to bound lookups by a directory other than home
    pub fn with_locator(mut self, locator: UpwardLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Replace the scratch-file editor settings
    pub fn map_editor(mut self, f: impl FnOnce(TempFileEditor<R>) -> TempFileEditor<R>) -> Self {
        self.editor = f(self.editor);
        self
    }

    /// Run a command with this process's stdin, stdout and stderr.
    pub fn execute(&self, command: &str, args: &[String]) -> Result<()> {
        self.editor.runner().run(command, args)
    }

    /// Run a command and collect its stdout and stderr.
    pub fn capture(&self, command: &str, args: &[String]) -> CaptureOutput {
        self.editor.runner().capture(command, args)
    }

    /// Let the user edit `text` in `editor` and return the result.
    ///
    /// See [`TempFileEditor::edit`].
    pub fn edit_temporary_file(&self, editor: &str, file_name_hint: &str, text: &str) -> Result<String> {
        self.editor.edit(editor, file_name_hint, text)
    }

    /// Find `file_name` in the current directory or an ancestor up to home.
    ///
    /// See [`UpwardLocator::locate`].
    pub fn find_file_above_cur_dir(&self, file_name: &str) -> Result<PathBuf> {
        self.locator.locate(file_name)
    }
}
