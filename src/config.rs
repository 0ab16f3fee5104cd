use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable overriding the award list location.
pub const CSV_PATH_ENV: &str = "CSV_PATH";

/// Root configuration structure, deserialized from `.award-intervals/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub predict: PredictConfig,
}

/// Where the award list lives and how it is delimited.
#[derive(Debug, Deserialize)]
pub struct DataConfig {
    /// Award list file. Defaults to `data/movielist.csv`.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Field delimiter. Defaults to `;`.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            path: default_data_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("movielist.csv")
}

fn default_delimiter() -> char {
    ';'
}

#[derive(Debug, Default, Deserialize)]
pub struct IngestConfig {
    /// Lower-case producer names at import, merging `"Bo Derek"` and `"bo derek"`.
    #[serde(default)]
    pub fold_case: bool,
}

#[derive(Debug, Deserialize)]
pub struct PredictConfig {
    /// A producer/studio pair seen more often than this is flagged.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

impl Default for PredictConfig {
    fn default() -> Self {
        PredictConfig {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> usize {
    1
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.award-intervals/config.toml`
/// 3. `~/.config/award-intervals/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = Path::new(".award-intervals").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("award-intervals")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Pick the award list path: `--data` wins over `CSV_PATH`, which wins over the config.
pub fn resolve_data_path(config: &Config, cli_path: Option<&Path>, env_path: Option<String>) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    match env_path {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => config.data.path.clone(),
    }
}
