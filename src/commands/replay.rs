use crate::config::MediamixConfig;
use crate::formatting::FormattingConfig;
use crate::output::{render, write_output, OutputFormat};
use crate::script::load_script;
use crate::session::{replay, Session};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub script: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Load the script and fold it over a fresh session.
pub fn replay_script(config: &MediamixConfig, path: &Path) -> Result<Session> {
    let script = load_script(path)
        .with_context(|| format!("Failed to load script {}", path.display()))?;
    Ok(replay(config.session(), &script.actions))
}

pub fn handle_replay(config: &MediamixConfig, replay_config: ReplayConfig) -> Result<()> {
    let session = replay_script(config, &replay_config.script)?;
    tracing::info!(
        points = session.performance().len(),
        activities = session.activity().len(),
        "Replay finished"
    );
    let rendered = render(&session, replay_config.format, replay_config.formatting)?;
    write_output(&rendered, replay_config.output.as_deref())?;
    Ok(())
}
