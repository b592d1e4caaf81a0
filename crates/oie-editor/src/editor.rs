//! Opening locators in the resolved editor.

use oie_core::prelude::*;
use oie_core::Locator;

use crate::command::Invocation;
use crate::config::EditorConfig;

/// Open `path` at `line`/`column` (both 1-based) and wait for the launcher
/// to exit. The command line is logged before it runs.
pub fn visit(config: &EditorConfig, path: &str, line: u32, column: u32) -> Result<()> {
    let invocation = Invocation::build(config, path, line, column);
    info!("{}", invocation.command_line());
    invocation.run()
}

/// Open a parsed locator, defaulting a missing line or column to 1.
pub fn open_in_editor(config: &EditorConfig, locator: &Locator) -> Result<()> {
    visit(
        config,
        &locator.path,
        locator.line_or_first(),
        locator.column_or_first(),
    )
}
