//! Rendering sessions and calculator results for the command line.

pub mod json;
pub mod terminal;

pub use json::{render_json, SessionSnapshot};
pub use terminal::{render_allocation, render_allocation_bar, render_forecast, render_session};

use crate::errors::{Error, Result};
use crate::formatting::FormattingConfig;
use crate::session::Session;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dashboard
    Terminal,
    /// Pretty-printed JSON snapshot
    Json,
}

pub fn render(session: &Session, format: OutputFormat, formatting: FormattingConfig) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(render_session(session, formatting.formatter().as_ref())),
        OutputFormat::Json => render_json(session),
    }
}

/// Write `rendered` to `output`, or to stdout when no path is given.
pub fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| Error::file_system(path, e))?;
            tracing::info!("Wrote output to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
