use std::{env, fs, path::PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    log_dir: PathBuf,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            log_dir: raw.log_dir,
        }
    }
}

impl Config {
    /// Load configuration: explicit TOML path, else the default config file
    /// if it exists, else environment. `LOG_DIR` overrides either file.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut cfg = if let Some(path) = path {
            let raw = fs::read_to_string(path)?;
            Config::from(toml::from_str::<RawConfig>(&raw)?)
        } else {
            let default_path = default_config_path();
            if default_path.exists() {
                let raw = fs::read_to_string(&default_path)?;
                Config::from(toml::from_str::<RawConfig>(&raw)?)
            } else {
                Self::default_from_env()?
            }
        };

        if let Ok(dir) = env::var("LOG_DIR") {
            if !dir.trim().is_empty() {
                cfg.log_dir = PathBuf::from(dir);
            }
        }
        validate_required(&cfg)?;
        Ok(cfg)
    }

    fn default_from_env() -> Result<Self> {
        Ok(Self {
            log_dir: PathBuf::from(env_required("LOG_DIR")?),
        })
    }
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from("com", "logquery", "logquery")
        .map(|p| p.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".logquery/config.toml"))
}

fn validate_required(cfg: &Config) -> Result<()> {
    if cfg.log_dir.as_os_str().is_empty() {
        anyhow::bail!("LOG_DIR is required (set via env or config)");
    }
    Ok(())
}

fn env_required(key: &str) -> Result<String> {
    let val = env::var(key).unwrap_or_default();
    if val.trim().is_empty() {
        anyhow::bail!("{key} is required");
    }
    Ok(val)
}
