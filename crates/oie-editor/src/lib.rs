//! # oie-editor - Editor Resolution and Launch
//!
//! Picks an editor from `$OPEN_IN_EDITOR` / `$EDITOR`, builds the command
//! line that opens a file at a line and column in that editor, and runs it.
//!
//! ## Public API
//!
//! - [`EditorConfig`] - Resolved editor kind plus executable path
//! - [`EditorKind`] - Closed set of supported editors
//! - [`Invocation`] - Program and arguments for one editor launch
//! - [`visit()`] / [`open_in_editor()`] - Build, log, and run the command

pub mod command;
pub mod config;
pub mod editor;

pub use command::Invocation;
pub use config::{executable_path, EditorConfig, EditorKind, FALLBACK_ENV, PRIMARY_ENV};
pub use editor::{open_in_editor, visit};
