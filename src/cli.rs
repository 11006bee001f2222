use crate::core::Channel;
use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mediamix")]
#[command(about = "Media budget allocation and forecast calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .mediamix.toml)
    #[arg(long, global = true, env = "MEDIAMIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colors and Unicode bar glyphs
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color output: auto, always or never
    #[arg(long, global = true, value_name = "WHEN", value_parser = parse_color_mode, default_value = "auto")]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .mediamix.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Chain the next forecast from a CPA and conversion count
    Forecast {
        /// Previous forecast CPA
        #[arg(long)]
        cpa: f64,

        /// Previous forecast conversions
        #[arg(long)]
        conversions: u64,

        /// Improvement percentage to apply
        #[arg(long, allow_negative_numbers = true)]
        improvement: f64,
    },

    /// Move budget sliders, starting from the configured allocation
    Allocate {
        /// Channel assignment such as `tv=40`; may be repeated
        #[arg(long = "set", value_name = "CHANNEL=VALUE", value_parser = parse_channel_value, required = true)]
        set: Vec<(Channel, f64)>,
    },

    /// Composite improvement of an allocation
    Score {
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        ooh: Option<u8>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        tv: Option<u8>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        digital: Option<u8>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        ctv: Option<u8>,
    },

    /// Replay an action script and render the resulting dashboard
    Replay {
        /// TOML or JSON action script
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse `CHANNEL=VALUE`, e.g. `ctv=25` or `Digital=40.5`.
pub fn parse_channel_value(s: &str) -> Result<(Channel, f64), String> {
    let (channel, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHANNEL=VALUE, got '{}'", s))?;
    let channel = channel.parse::<Channel>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value '{}': {}", value.trim(), e))?;
    Ok((channel, value))
}

pub fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s).ok_or_else(|| format!("expected auto, always or never, got '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_channel_value() {
        assert_eq!(parse_channel_value("tv=40"), Ok((Channel::Tv, 40.0)));
        assert_eq!(parse_channel_value("Digital= 12.5"), Ok((Channel::Digital, 12.5)));
        assert!(parse_channel_value("tv").is_err());
        assert!(parse_channel_value("radio=3").is_err());
        assert!(parse_channel_value("ooh=lots").is_err());
    }

    #[test]
    fn test_allocate_accepts_repeated_set() {
        let cli = Cli::try_parse_from(["mediamix", "allocate", "--set", "tv=40", "--set", "ooh=-5"]).unwrap();
        match cli.command {
            Commands::Allocate { set } => {
                assert_eq!(set, vec![(Channel::Tv, 40.0), (Channel::Ooh, -5.0)]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_rejects_out_of_range_share() {
        assert!(Cli::try_parse_from(["mediamix", "score", "--ooh", "101"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["mediamix", "-vv", "score"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_color_flag() {
        let cli = Cli::try_parse_from(["mediamix", "score"]).unwrap();
        assert_eq!(cli.color, ColorMode::Auto);

        let cli = Cli::try_parse_from(["mediamix", "score", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorMode::Never);

        let cli = Cli::try_parse_from(["mediamix", "--color", "ALWAYS", "score"]).unwrap();
        assert_eq!(cli.color, ColorMode::Always);

        assert!(Cli::try_parse_from(["mediamix", "score", "--color", "sometimes"]).is_err());
    }
}
