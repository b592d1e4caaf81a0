//! Logging configuration using tracing
//!
//! Every event becomes one entry in a plain-text, append-only log file:
//!
//! ```text
//! 2026-10-16 09:41:07
//! /usr/local/bin/code -g /tmp/x.txt:3:2
//!
//! ```
//!
//! The file is opened in append mode for each entry and closed right after.
//! Nothing coordinates concurrent writers, so entries from simultaneous
//! invocations may interleave. The log is diagnostic only.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// File name of the log inside the system temporary directory
pub const LOG_FILE_NAME: &str = "open-in-editor.log";

/// Environment variable holding an `EnvFilter` directive for log verbosity
pub const LOG_FILTER_ENV: &str = "OPEN_IN_EDITOR_LOG";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Initialize the logging subsystem
///
/// Logs are appended to `open-in-editor.log` in the system temporary
/// directory. Log level is controlled by the `OPEN_IN_EDITOR_LOG`
/// environment variable and defaults to `info`.
///
/// # Examples
/// ```bash
/// OPEN_IN_EDITOR_LOG=debug open-in-editor file:///tmp/x.txt:3
/// ```
pub fn init() -> Result<PathBuf> {
    let path = log_file_path();

    // Fail early if the log can't be written at all; entries are best effort after this
    open_append(&path).with_context(|| format!("Cannot open log file {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(entry_layer(&path))
        .init();

    Ok(path)
}

/// Get the log file path
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Build the fmt layer that writes timestamped entries to `path`.
pub fn entry_layer<S>(path: &Path) -> impl tracing_subscriber::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .event_format(EntryFormat)
        .with_writer(AppendLog::new(path))
}

fn open_append(path: &Path) -> io::Result<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Format
// ─────────────────────────────────────────────────────────────────────────────

/// Formats an event as: local timestamp line, message, blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryFormat;

impl<S, N> FormatEvent<S, N> for EntryFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        writeln!(writer, "{}", Local::now().format(TIMESTAMP_FORMAT))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)?;
        writeln!(writer)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Append Writer
// ─────────────────────────────────────────────────────────────────────────────

/// `MakeWriter` that hands out one [`EntryWriter`] per event.
#[derive(Debug, Clone)]
pub struct AppendLog {
    path: PathBuf,
}

impl AppendLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<'a> MakeWriter<'a> for AppendLog {
    type Writer = EntryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        EntryWriter {
            path: self.path.clone(),
            buf: Vec::new(),
        }
    }
}

/// Buffers one formatted entry, then appends it to the log file in a single
/// write when dropped.
#[derive(Debug)]
pub struct EntryWriter {
    path: PathBuf,
    buf: Vec<u8>,
}

impl Write for EntryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let mut file = open_append(&self.path)?;
        file.write_all(&self.buf)?;
        self.buf.clear();
        Ok(())
    }
}

impl Drop for EntryWriter {
    fn drop(&mut self) {
        // Nowhere left to report a logging failure
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn capture(path: &Path, f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(entry_layer(path));
        tracing::subscriber::with_default(subscriber, f);
    }

    fn is_timestamp(line: &str) -> bool {
        chrono::NaiveDateTime::parse_from_str(line, TIMESTAMP_FORMAT).is_ok()
    }

    #[test]
    fn test_entry_is_timestamp_message_blank_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(LOG_FILE_NAME);

        capture(&path, || tracing::info!("code -g /tmp/x.txt:3:2"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        assert!(is_timestamp(lines[0]), "bad timestamp: {:?}", lines[0]);
        assert_eq!(lines[1], "code -g /tmp/x.txt:3:2");
        assert_eq!(lines[2], "");
        assert!(content.ends_with("\n\n"));
    }

    #[test]
    fn test_entries_are_appended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(LOG_FILE_NAME);
        fs::write(&path, "earlier run\n\n").unwrap();

        capture(&path, || {
            tracing::info!("first");
            tracing::error!("second\nwith a trace line");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier run\n\n"));
        let first = content.find("\nfirst\n\n").unwrap();
        let second = content.find("\nsecond\nwith a trace line\n\n").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_writer_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fresh.log");
        assert!(!path.exists());

        let mut writer = AppendLog::new(&path).make_writer();
        writer.write_all(b"hello\n").unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_log_file_path_in_temp_dir() {
        let path = log_file_path();
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert_eq!(path.parent().unwrap(), std::env::temp_dir());
    }
}
