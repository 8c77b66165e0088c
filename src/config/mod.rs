use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::plan::Granularity;

/// Persisted preferences. These only seed the setup form on the next
/// launch; the weekly plan itself is session-only and never written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_start_time() -> String {
    "06:00".to_string()
}

fn default_end_time() -> String {
    "22:00".to_string()
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            granularity: Granularity::ThirtyMinutes,
            start_time: default_start_time(),
            end_time: default_end_time(),
            font_scale: 1.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            serde_json::from_str(&contents)
                .context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "weekplan", "weekplan")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_usual_day() {
        let config = Config::default();
        assert_eq!(config.start_time, "06:00");
        assert_eq!(config.end_time, "22:00");
        assert_eq!(config.granularity, Granularity::ThirtyMinutes);
        assert_eq!(config.font_scale, 1.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"username":"yuna"}"#).unwrap();
        assert_eq!(config.username, "yuna");
        assert_eq!(config.start_time, "06:00");
        assert_eq!(config.font_scale, 1.0);
    }
}
