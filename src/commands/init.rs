use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Mediamix Configuration

# Improvement rate (percentage points) per channel at full spend
[rates]
OOH = 3.5
TV = 5.0
Digital = 12.0
CTV = 8.5

# Starting budget shares; must sum to 100
[allocation]
OOH = 20
TV = 35
Digital = 30
CTV = 15

# First point of the performance log
[baseline]
label = "Week 1"
cpa = 42.5
conversions = 1200
"#;

/// Write the default configuration into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, MediamixConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG, Path::new(CONFIG_FILE_NAME)).unwrap();
        let defaults = MediamixConfig::default();
        assert_eq!(parsed.rate_table(), defaults.rate_table());
        assert_eq!(parsed.allocation(), defaults.allocation());
        assert_eq!(parsed.baseline, defaults.baseline);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_config(dir.path(), false).unwrap();
        assert!(init_config(dir.path(), false).is_err());
        assert!(init_config(dir.path(), true).is_ok());
    }
}
