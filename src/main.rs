//! open-in-editor - open a `file://` locator in your editor
//!
//! This is the binary entry point. Everything it does is logged to
//! `open-in-editor.log` in the system temporary directory, since it usually
//! runs without a visible terminal (e.g. as a terminal emulator's URL handler).

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::config::{HookBuilder, Theme};
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info};

use oie_core::{logging, Locator};
use oie_editor::{open_in_editor, EditorConfig};

/// Open a file at a line and column in the editor named by $OPEN_IN_EDITOR or $EDITOR
#[derive(Parser, Debug)]
#[command(name = "open-in-editor", version)]
#[command(about = "Open a file:line:column URL in your editor", long_about = None)]
struct Args {
    /// Locator URL, e.g. file:///path/to/file.rs:12:5
    #[arg(value_name = "URL")]
    url: String,
}

fn main() -> ExitCode {
    let log_ready = match logging::init() {
        Ok(_) => true,
        Err(e) => {
            eprintln!("open-in-editor: logging disabled: {e}");
            false
        }
    };

    let result = HookBuilder::default()
        .theme(Theme::new())
        .display_env_section(false)
        .install()
        .and_then(|()| run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            error!("{report:?}");
            if !log_ready {
                eprintln!("{report:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse().or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Err(e),
    })?;

    let config = EditorConfig::from_env().wrap_err("Could not infer editor")?;
    let locator = Locator::parse(&args.url)?;
    info!("{locator}");

    open_in_editor(&config, &locator)
        .wrap_err_with(|| format!("Could not open {} in {}", locator.path, config.kind))
}
