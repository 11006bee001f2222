//! Action scripts replayed against a session.
//!
//! A script is TOML (`[[actions]]` tables) unless its file name ends in
//! `.json`, in which case it is a JSON object with an `actions` array.

use crate::errors::{Error, Result};
use crate::session::Action;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Toml,
    Json,
}

impl ScriptFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScriptFormat::Json,
            _ => ScriptFormat::Toml,
        }
    }
}

pub fn parse_script(contents: &str, format: ScriptFormat, origin: &Path) -> Result<Script> {
    match format {
        ScriptFormat::Toml => {
            toml::from_str(contents).map_err(|e| Error::toml(origin, e.message()))
        }
        ScriptFormat::Json => serde_json::from_str(contents).map_err(|source| Error::JsonParse {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

pub fn load_script(path: &Path) -> Result<Script> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    let script = parse_script(&contents, ScriptFormat::from_path(path), path)?;
    tracing::info!(
        "Loaded {} action(s) from {}",
        script.actions.len(),
        path.display()
    );
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Channel;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ScriptFormat::from_path(Path::new("a.json")), ScriptFormat::Json);
        assert_eq!(ScriptFormat::from_path(Path::new("a.JSON")), ScriptFormat::Json);
        assert_eq!(ScriptFormat::from_path(Path::new("a.toml")), ScriptFormat::Toml);
        assert_eq!(ScriptFormat::from_path(Path::new("script")), ScriptFormat::Toml);
    }

    #[test]
    fn test_parse_toml_script() {
        let contents = r#"
[[actions]]
action = "set_allocation"
channel = "CTV"
value = 30.0

[[actions]]
action = "record_actuals"
label = "Week 2"
cpa = 40.0
conversions = 1300
"#;
        let script = parse_script(contents, ScriptFormat::Toml, Path::new("s.toml")).unwrap();
        assert_eq!(
            script.actions,
            vec![
                Action::set_allocation(Channel::Ctv, 30.0),
                Action::record_actuals("Week 2", 40.0, 1300),
            ]
        );
    }

    #[test]
    fn test_parse_json_script() {
        let contents = r#"{"actions":[{"action":"apply_composite","label":"Rebalance"}]}"#;
        let script = parse_script(contents, ScriptFormat::Json, Path::new("s.json")).unwrap();
        assert_eq!(script.actions, vec![Action::apply_composite("Rebalance")]);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_script("{", ScriptFormat::Json, Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_empty_script_has_no_actions() {
        let script = parse_script("", ScriptFormat::Toml, Path::new("empty.toml")).unwrap();
        assert!(script.actions.is_empty());
    }
}
