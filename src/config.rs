use crate::error::{GhpeekError, Result};
use crate::github::client::DEFAULT_API_BASE;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub default_username: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            default_username: None,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(api_url: Option<String>) -> Self {
        let config_file = config_dir().join("ghpeek").join("config.toml");
        match Self::figment(&config_file, api_url).extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    fn figment(config_file: &Path, api_url: Option<String>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("GHPEEK_"));

        if let Some(url) = api_url {
            figment = figment.merge(Serialized::default("api_base_url", url));
        }
        figment
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| config_dir().join("ghpeek").join("ghpeek.log"))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GhpeekError::Config(e.to_string()))
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
