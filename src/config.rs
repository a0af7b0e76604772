use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const CONFIG_PATH_ENV_VAR: &str = "DDAY_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("dday").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".dday.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colored prompts and verdicts.
    pub color: bool,
    /// How often an invalid answer may be re-entered before the
    /// session is aborted.
    pub input_attempts: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            color: true,
            input_attempts: 5,
        }
    }
}

/// Loads the config from the given path, or from the first existing
/// default location, or falls back to `Config::default()`.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            return read_config(&location);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    log::info!("Loading config from '{}'", path.display());

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.color);
        assert_eq!(config.input_attempts, 5);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.input_attempts, 5);
    }

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r#"
            color = false
            input_attempts = 3
            "#,
        )
        .unwrap();
        assert!(!config.color);
        assert_eq!(config.input_attempts, 3);
    }

    #[test]
    fn invalid_config_is_an_error() {
        use crate::error::{Error, ErrorKind};

        let err: Error = toml::from_str::<Config>("input_attempts = \"many\"")
            .map_err(Error::from)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }
}
