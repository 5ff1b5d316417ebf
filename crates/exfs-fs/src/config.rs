//! Editor configuration
//!
//! Resolves which editor program to hand to [`crate::TempFileEditor`].
//! Nothing here is persisted; settings come from the caller or the
//! environment.

use std::env;

use exfs_core::prelude::*;

/// Environment variable naming the user's editor
pub const EDITOR_ENV_VAR: &str = "EDITOR";

/// Environment variable naming the user's visual editor, preferred over `$EDITOR`
pub const VISUAL_ENV_VAR: &str = "VISUAL";

/// Editor selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSettings {
    /// Editor given explicitly by the caller (e.g. a `--editor` flag).
    /// Takes priority over the environment.
    pub editor: Option<String>,
}

impl EditorSettings {
    pub fn new(editor: Option<String>) -> Self {
        Self { editor }
    }

    /// Resolve the editor program.
    ///
    /// Priority order:
    /// 1. Explicit `editor` setting
    /// 2. `$VISUAL`
    /// 3. `$EDITOR`
    ///
    /// Blank values are skipped.
    pub fn resolve(&self) -> Result<String> {
        if let Some(editor) = non_blank(self.editor.as_deref()) {
            debug!("Using configured editor: {}", editor);
            return Ok(editor);
        }

        for var in [VISUAL_ENV_VAR, EDITOR_ENV_VAR] {
            if let Some(editor) = non_blank(env::var(var).ok().as_deref()) {
                debug!("Using editor from ${}: {}", var, editor);
                return Ok(editor);
            }
        }

        Err(Error::EditorNotConfigured)
    }

    /// Resolve the editor and make sure it can be executed.
    pub fn resolve_checked(&self) -> Result<String> {
        let editor = self.resolve()?;
        match which::which(&editor) {
            Ok(path) => {
                trace!("Editor {} resolved to {}", editor, path.display());
                Ok(editor)
            }
            Err(e) => {
                debug!("Editor {} not executable: {}", editor, e);
                Err(Error::editor_not_found(editor))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
