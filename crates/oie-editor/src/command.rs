//! Per-editor command lines and their execution.

use std::path::{Path, PathBuf};
use std::process::Command;

use oie_core::prelude::*;

use crate::config::{EditorConfig, EditorKind};

/// A program plus arguments, built for one editor and run once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Build the command that opens `path` at `line`/`column` (both 1-based).
    pub fn build(config: &EditorConfig, path: &str, line: u32, column: u32) -> Self {
        let args = match config.kind {
            EditorKind::Emacs => vec![
                "--no-wait".to_string(),
                "--eval".to_string(),
                emacs_visit_form(path, line),
            ],
            EditorKind::PyCharm => vec!["--line".to_string(), line.to_string(), path.to_string()],
            EditorKind::Sublime => vec![format!("{}:{}", source_for_bytecode(path), line)],
            EditorKind::VSCode => vec!["-g".to_string(), format!("{path}:{line}:{column}")],
            EditorKind::Vim => {
                let mut args = vec![format!("+{line}")];
                if column > 1 {
                    args.push("-c".to_string());
                    args.push(format!("normal {}l", column - 1));
                }
                args.push(path.to_string());
                args
            }
            EditorKind::Generic => vec![
                path.to_string(),
                format!("+{line}"),
                format!("+{column}"),
            ],
        };

        Self {
            program: config.executable.clone(),
            args,
        }
    }

    /// Space-joined command line, as written to the log.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command and wait for it to exit.
    ///
    /// A bare program name is looked up on `PATH` first. Spawn failures,
    /// lookup misses and non-zero exit statuses are all
    /// [`Error::EditorLaunch`]. There is no timeout.
    pub fn run(&self) -> Result<()> {
        let program = self.resolve_program()?;

        let status = Command::new(&program)
            .args(&self.args)
            .status()
            .map_err(|e| Error::editor_launch(self.command_line(), e))?;

        if !status.success() {
            return Err(Error::editor_launch(self.command_line(), status));
        }

        trace!("{} exited successfully", program.display());
        Ok(())
    }

    fn resolve_program(&self) -> Result<PathBuf> {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return Ok(program.to_path_buf());
        }
        which::which(program).map_err(|e| Error::editor_launch(self.command_line(), e))
    }
}

/// Elisp that visits `path`, jumps to `line`, recenters, raises the frame,
/// and pulses the line when `pulse` is available.
fn emacs_visit_form(path: &str, line: u32) -> String {
    format!(
        "(progn \
         (find-file \"{}\") \
         (goto-line {}) \
         (recenter) \
         (select-frame-set-input-focus (selected-frame)) \
         (when (fboundp 'pulse-momentary-highlight-one-line) \
         (pulse-momentary-highlight-one-line (point))))",
        elisp_escape(path),
        line
    )
}

fn elisp_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Tracebacks may name compiled `.pyc` files; open the source instead.
fn source_for_bytecode(path: &str) -> String {
    match path.strip_suffix(".pyc") {
        Some(stem) => format!("{stem}.py"),
        None => path.to_string(),
    }
}
