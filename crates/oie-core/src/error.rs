//! Error types for locator parsing, editor resolution, and editor launch

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening a locator in an editor
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid locator {input:?}: {reason}")]
    InvalidLocator { input: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Editor Errors
    // ─────────────────────────────────────────────────────────────
    /// Neither environment variable names an editor we know how to drive.
    /// The raw values are kept for diagnosis.
    #[error(
        "Could not infer editor from environment: OPEN_IN_EDITOR={primary:?} EDITOR={fallback:?}"
    )]
    UnresolvedEditor {
        primary: Option<String>,
        fallback: Option<String>,
    },

    #[error("Failed to launch editor `{command}`: {reason}")]
    EditorLaunch { command: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_locator(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLocator {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unresolved_editor(primary: Option<String>, fallback: Option<String>) -> Self {
        Self::UnresolvedEditor { primary, fallback }
    }

    pub fn editor_launch(command: impl Into<String>, reason: impl ToString) -> Self {
        Self::EditorLaunch {
            command: command.into(),
            reason: reason.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_editor_shows_raw_values() {
        let err = Error::unresolved_editor(None, Some("nano".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("OPEN_IN_EDITOR=None"));
        assert!(msg.contains("EDITOR=Some(\"nano\")"));
    }

    #[test]
    fn test_editor_launch_message() {
        let err = Error::editor_launch("code -g /tmp/x.txt:1:1", "exit status: 2");
        assert_eq!(
            err.to_string(),
            "Failed to launch editor `code -g /tmp/x.txt:1:1`: exit status: 2"
        );
    }

    #[test]
    fn test_invalid_locator_message() {
        let err = Error::invalid_locator("not a url", "relative URL without a base");
        assert!(err.to_string().contains("\"not a url\""));
        assert!(err.to_string().contains("relative URL without a base"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_context_passes_error_through() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("opening log").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
