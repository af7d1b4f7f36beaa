use std::path::{Path, PathBuf};

use life_core::SessionConfiguration;
use life_term::TermConfiguration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIRECTORY: &str = "conway";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("could not read configuration file [{path}]")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfiguration {
    #[serde(default)]
    pub session: SessionConfiguration,
    #[serde(default)]
    pub terminal: TermConfiguration,
}

impl AppConfiguration {
    /// Loads the file given on the command line, which must exist, or else the
    /// default file if there is one.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigurationError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No configuration at {path:?}, using defaults");
                Ok(Self::default())
            },
            None => {
                log::debug!("No configuration directory, using defaults");
                Ok(Self::default())
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading configuration from {path:?}");
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(contents)?)
    }
}

/// `$XDG_CONFIG_HOME/conway/config.toml`, falling back to `~/.config`
fn default_config_path() -> Option<PathBuf> {
    let mut path = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            let mut home = homedir::get_my_home().ok().flatten()?;
            home.push(".config");
            Some(home)
        })?;
    path.push(APP_DIRECTORY);
    path.push(CONFIG_FILE);
    Some(path)
}
