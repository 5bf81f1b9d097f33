//! Dashboard settings persisted as JSON

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{config, layout};
use crate::error::{DashError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV loaded at startup
    pub data_path: PathBuf,
    pub dark_mode: bool,
    /// Height of each chart panel in points
    pub chart_height: f32,
    /// Show the filtered rows preview table
    pub show_table: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(config::DEFAULT_DATA_FILE),
            dark_mode: true,
            chart_height: layout::CHART_HEIGHT,
            show_table: false,
        }
    }
}

impl DashboardConfig {
    /// Read settings from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.chart_height.is_finite() || self.chart_height <= 0.0 {
            return Err(DashError::Config(format!(
                "chart_height must be positive, got {}",
                self.chart_height
            )));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(DashError::Config("data_path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Command line dataset path takes precedence over the file setting
    pub fn with_data_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.data_path, PathBuf::from("heart_2020_cleaned.csv"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_path": "survey.csv", "show_table": true }}"#).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();

        assert_eq!(config.data_path, PathBuf::from("survey.csv"));
        assert!(config.show_table);
        assert_eq!(config.chart_height, layout::CHART_HEIGHT);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "chart_height": -5.0 }}"#).unwrap();
        assert!(matches!(DashboardConfig::load(file.path()), Err(DashError::Config(_))));

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(DashboardConfig::load(garbage.path()), Err(DashError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILE);
        let saved = DashboardConfig {
            dark_mode: false,
            chart_height: 420.0,
            ..DashboardConfig::default()
        };

        saved.save(&path).unwrap();

        assert_eq!(DashboardConfig::load(&path).unwrap(), saved);
    }

    #[test]
    fn test_command_line_override() {
        let overridden = DashboardConfig::default().with_data_override(Some(PathBuf::from("other.csv")));
        assert_eq!(overridden.data_path, PathBuf::from("other.csv"));

        let unchanged = DashboardConfig::default().with_data_override(None);
        assert_eq!(unchanged.data_path, PathBuf::from(config::DEFAULT_DATA_FILE));
    }
}
