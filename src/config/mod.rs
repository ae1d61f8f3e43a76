use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Animation frame interval for `watch`, in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "default_chart_days")]
    pub chart_days: usize,
    #[serde(default = "default_tank_width")]
    pub tank_width: usize,
    #[serde(default = "default_tank_height")]
    pub tank_height: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_frame_ms() -> u64 {
    16
}
fn default_chart_days() -> usize {
    crate::core::chart::DEFAULT_DAYS
}
fn default_tank_width() -> usize {
    48
}
fn default_tank_height() -> usize {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            frame_ms: default_frame_ms(),
            chart_days: default_chart_days(),
            tank_width: default_tank_width(),
            tank_height: default_tank_height(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hydrotrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hydrotrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hydrotrack.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hydrotrack.sqlite")
    }

    /// Configured database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Parse YAML config text; missing fields take their defaults.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        serde_yaml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from file, or return defaults if it is missing or
    /// unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|content| Self::from_yaml(&content))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the configuration file (unless in test mode) and make sure the
    /// database directory exists. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() || is_test {
                    p
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg = Config::from_yaml("database: /tmp/water.sqlite\nframe_ms: 33\n").unwrap();
        assert_eq!(cfg.database, "/tmp/water.sqlite");
        assert_eq!(cfg.frame_ms, 33);
        assert_eq!(cfg.chart_days, 7);
        assert_eq!(cfg.tank_width, 48);
        assert_eq!(cfg.tank_height, 16);
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let path = env::temp_dir().join("hydrotrack_bad_config_test.conf");
        fs::write(&path, "frame_ms: [not, a, number]\n").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_config_is_default() {
        let path = env::temp_dir().join("hydrotrack_missing_config_test.conf");
        fs::remove_file(&path).ok();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
