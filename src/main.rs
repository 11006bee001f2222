use anyhow::{Context, Result};
use clap::Parser;
use mediamix::cli::{Cli, Commands};
use mediamix::commands::{self, ReplayConfig};
use mediamix::config::{load_config, load_config_from, MediamixConfig};
use mediamix::formatting::FormattingConfig;
use mediamix::observability::init_tracing;
use mediamix::output::write_output;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatting = FormattingConfig::resolve(cli.plain, cli.color);

    match cli.command {
        Commands::Init { force } => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            commands::init_config(&cwd, force)?;
            println!("Created .mediamix.toml configuration file");
        }
        Commands::Forecast {
            cpa,
            conversions,
            improvement,
        } => {
            let fmt = formatting.formatter();
            let text = commands::handle_forecast(cpa, conversions, improvement, fmt.as_ref());
            write_output(&text, None)?;
        }
        Commands::Allocate { set } => {
            let config = resolve_config(cli.config.as_deref())?;
            let fmt = formatting.formatter();
            let text = commands::handle_allocate(&config, &set, fmt.as_ref());
            write_output(&text, None)?;
        }
        Commands::Score {
            ooh,
            tv,
            digital,
            ctv,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let fmt = formatting.formatter();
            let text = commands::handle_score(&config, [ooh, tv, digital, ctv], fmt.as_ref());
            write_output(&text, None)?;
        }
        Commands::Replay {
            script,
            format,
            output,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            commands::handle_replay(
                &config,
                ReplayConfig {
                    script,
                    format,
                    output,
                    formatting,
                },
            )?;
        }
    }

    Ok(())
}

// An explicit --config must load; otherwise discover or fall back to defaults
fn resolve_config(explicit: Option<&Path>) -> Result<MediamixConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
