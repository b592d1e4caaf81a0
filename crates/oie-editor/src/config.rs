//! Editor detection from `$OPEN_IN_EDITOR` / `$EDITOR`.

use std::fmt;

use oie_core::prelude::*;

/// Checked first; may carry flags, e.g. `"/usr/local/bin/code -n"`.
pub const PRIMARY_ENV: &str = "OPEN_IN_EDITOR";

/// Checked when `OPEN_IN_EDITOR` is unset or empty.
pub const FALLBACK_ENV: &str = "EDITOR";

// ─────────────────────────────────────────────────────────────────────────────
// Editor Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// The editors we know how to build a command line for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Emacs,
    Sublime,
    PyCharm,
    VSCode,
    Vim,
    /// Anything taking `path +line +column`
    Generic,
}

/// Substring → kind, in priority order. First match wins.
///
/// The trailing `"o"` rule matches almost any path and acts as a last-resort
/// fallback rather than recognizing a particular editor.
const CLASSIFIERS: &[(&str, EditorKind)] = &[
    ("emacsclient", EditorKind::Emacs),
    ("subl", EditorKind::Sublime),
    ("charm", EditorKind::PyCharm),
    ("code", EditorKind::VSCode),
    ("vim", EditorKind::Vim),
    ("o", EditorKind::Generic),
];

impl EditorKind {
    /// Classify an executable path by substring containment.
    pub fn classify(executable: &str) -> Option<Self> {
        CLASSIFIERS
            .iter()
            .find(|(needle, _)| executable.contains(needle))
            .map(|&(_, kind)| kind)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EditorKind::Emacs => "Emacs",
            EditorKind::Sublime => "Sublime Text",
            EditorKind::PyCharm => "PyCharm",
            EditorKind::VSCode => "Visual Studio Code",
            EditorKind::Vim => "Vim",
            EditorKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Config
// ─────────────────────────────────────────────────────────────────────────────

/// Which editor to drive and where its executable lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub kind: EditorKind,
    /// Executable path with any trailing flags removed
    pub executable: String,
}

impl EditorConfig {
    pub fn new(kind: EditorKind, executable: impl Into<String>) -> Self {
        Self {
            kind,
            executable: executable.into(),
        }
    }

    /// Resolve the editor from `$OPEN_IN_EDITOR`, falling back to `$EDITOR`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(PRIMARY_ENV).ok(),
            std::env::var(FALLBACK_ENV).ok(),
        )
    }

    /// Resolve the editor from raw variable values.
    ///
    /// The primary value wins when non-empty. Both raw values are logged
    /// before returning [`Error::UnresolvedEditor`].
    pub fn from_vars(primary: Option<String>, fallback: Option<String>) -> Result<Self> {
        let chosen = primary
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| fallback.as_deref().filter(|v| !v.is_empty()));

        let resolved = chosen.and_then(|value| {
            let executable = executable_path(value);
            EditorKind::classify(executable).map(|kind| Self::new(kind, executable))
        });

        match resolved {
            Some(config) => {
                debug!("Resolved {} at {}", config.kind, config.executable);
                Ok(config)
            }
            None => {
                error!(
                    "{}={:?}\n{}={:?}",
                    PRIMARY_ENV, primary, FALLBACK_ENV, fallback
                );
                Err(Error::unresolved_editor(primary, fallback))
            }
        }
    }
}

/// Strip trailing flags from an editor variable value.
///
/// Everything before the first `" -"` (right-trimmed) is the executable;
/// without one, the whole value is.
pub fn executable_path(value: &str) -> &str {
    match value.find(" -") {
        Some(i) => value[..i].trim_end(),
        None => value,
    }
}
