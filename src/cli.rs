//! Command-line glue over the exfs library crates

use std::io::Write;

use clap::{Parser, Subcommand};
use exfs_core::prelude::*;
use exfs_fs::{EditorSettings, FileSystem};
use exfs_process::ProcessRunner;

/// exfs - process, scratch-file and file lookup helpers
#[derive(Parser, Debug)]
#[command(name = "exfs")]
#[command(about = "Run commands, edit text in $EDITOR and find files above the current directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Find a file in the current directory or an ancestor up to $HOME
    Locate {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Edit text in your editor and print the result
    Edit {
        /// Scratch file name hint, e.g. `notes.md`
        #[arg(value_name = "HINT")]
        hint: String,

        /// Editor program (defaults to $VISUAL, then $EDITOR)
        #[arg(long)]
        editor: Option<String>,

        /// Initial text
        #[arg(long, default_value = "")]
        text: String,
    },

    /// Run a command interactively
    Run {
        #[arg(value_name = "CMD")]
        program: String,

        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a command and print its captured stdout and stderr
    Capture {
        #[arg(value_name = "CMD")]
        program: String,

        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Execute a parsed command, writing results to `out` and `err`
pub fn dispatch<R, O, E>(cli: Cli, fs: &FileSystem<R>, out: &mut O, err: &mut E) -> Result<()>
where
    R: ProcessRunner,
    O: Write,
    E: Write,
{
    match cli.command {
        CliCommand::Locate { name } => {
            let path = fs.find_file_above_cur_dir(&name)?;
            writeln!(out, "{}", path.display())?;
        }
        CliCommand::Edit { hint, editor, text } => {
            let editor = EditorSettings::new(editor).resolve_checked()?;
            let result = fs.edit_temporary_file(&editor, &hint, &text);
            write_edit_result(result, out, err)?;
        }
        CliCommand::Run { program, args } => {
            fs.execute(&program, &args)?;
        }
        CliCommand::Capture { program, args } => {
            let captured = fs.capture(&program, &args);
            write!(out, "{}", captured.stdout)?;
            write!(err, "{}", captured.stderr)?;
            captured.status?;
        }
    }
    Ok(())
}

/// Print the outcome of an edit session.
///
/// Edited text goes to `out`. When the edit succeeded but the scratch file
/// could not be removed, the text is still printed and the cleanup failure
/// becomes a warning on `err`.
pub fn write_edit_result<O, E>(result: Result<String>, out: &mut O, err: &mut E) -> Result<()>
where
    O: Write,
    E: Write,
{
    let edited = match result {
        Ok(edited) => edited,
        Err(e) => match e.recovered_content() {
            Some(content) => {
                warn!("{}", e);
                writeln!(err, "warning: {}", e)?;
                content.to_string()
            }
            None => return Err(e),
        },
    };
    write!(out, "{}", edited)?;
    Ok(())
}
