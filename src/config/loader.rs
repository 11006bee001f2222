use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::MediamixConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".mediamix.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str, origin: &Path) -> Result<MediamixConfig> {
    let config = toml::from_str::<MediamixConfig>(contents)
        .map_err(|e| Error::toml(origin, e.message()))?;
    config.validate()?;

    for label in config.unknown_rate_labels() {
        tracing::warn!(
            "Rate '{}' in {} names no channel and will be ignored",
            label,
            origin.display()
        );
    }

    Ok(config)
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<MediamixConfig> {
    let contents = read_config_file(path).map_err(|e| Error::file_system(path, e))?;
    let config = parse_and_validate_config(&contents, path)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config. Failures are logged and yield `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MediamixConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only real errors are logged, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.mediamix.toml` at or above `start`.
pub fn discover_config(start: PathBuf) -> Option<MediamixConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Discover a config from the current directory upwards, or fall back to defaults.
pub fn load_config() -> MediamixConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return MediamixConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        MediamixConfig::default()
    })
}
