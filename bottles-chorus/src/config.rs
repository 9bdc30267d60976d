//! Chorus configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors found while validating a configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a chorus needs at least one singer")]
    NoSingers,

    #[error("pool_threads must be positive when set")]
    EmptyPool,
}

/// Parameters for singing the song, alone or as a chorus (loaded from TOML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChorusConfig {
    /// Bottles on the wall when the song starts
    #[serde(default = "default_bottles")]
    pub bottles: i32,

    /// Number of concurrent singers sharing one sink
    #[serde(default = "default_singers")]
    pub singers: usize,

    /// Optional: size of the rayon pool used by `sing_in_pool`
    #[serde(default)]
    pub pool_threads: Option<usize>,
}

fn default_bottles() -> i32 {
    99
}

fn default_singers() -> usize {
    100
}

impl Default for ChorusConfig {
    fn default() -> Self {
        Self {
            bottles: default_bottles(),
            singers: default_singers(),
            pool_threads: None,
        }
    }
}

impl ChorusConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the starting number of bottles
    pub fn with_bottles(mut self, bottles: i32) -> Self {
        self.bottles = bottles;
        self
    }

    /// Builder method: set the number of singers
    pub fn with_singers(mut self, singers: usize) -> Self {
        self.singers = singers;
        self
    }

    /// Builder method: set the rayon pool size
    pub fn with_pool_threads(mut self, threads: usize) -> Self {
        self.pool_threads = Some(threads);
        self
    }

    /// Lines one singer produces for the whole song
    pub fn lines_per_singer(&self) -> usize {
        crate::song::expected_lines(self.bottles)
    }

    /// Lines the whole chorus produces, saturating at `usize::MAX`
    pub fn total_lines(&self) -> usize {
        self.lines_per_singer().saturating_mul(self.singers)
    }

    /// Reject settings no run can use
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.singers == 0 {
            return Err(ConfigError::NoSingers);
        }
        if self.pool_threads == Some(0) {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChorusConfig = toml::from_str(content).context("Failed to parse chorus config")?;
        config.validate()?;
        Ok(config)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<ChorusConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = ChorusConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    log::debug!("Loaded chorus config from {:?}: {:?}", path, config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ChorusConfig::new();
        assert_eq!(config.bottles, 99);
        assert_eq!(config.singers, 100);
        assert_eq!(config.pool_threads, None);
        assert_eq!(config.lines_per_singer(), 495);
        assert_eq!(config.total_lines(), 49_500);
    }

    #[test]
    fn test_builder() {
        let config = ChorusConfig::new()
            .with_bottles(10)
            .with_singers(4)
            .with_pool_threads(2);

        assert_eq!(config.bottles, 10);
        assert_eq!(config.singers, 4);
        assert_eq!(config.pool_threads, Some(2));
        assert_eq!(config.total_lines(), 200);
    }

    #[test]
    fn test_total_lines_saturates() {
        let config = ChorusConfig::new().with_singers(usize::MAX);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_lines(), usize::MAX);

        let config = ChorusConfig::new().with_bottles(0).with_singers(usize::MAX);
        assert_eq!(config.total_lines(), 0);
    }

    #[test]
    fn test_config_deserialization() {
        let config = ChorusConfig::from_toml_str(
            r#"
            bottles = 12
            singers = 3
            pool_threads = 2
        "#,
        )
        .unwrap();

        assert_eq!(config, ChorusConfig::new().with_bottles(12).with_singers(3).with_pool_threads(2));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ChorusConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChorusConfig::default());
    }

    #[test]
    fn test_validation() {
        assert_eq!(ChorusConfig::new().with_singers(0).validate(), Err(ConfigError::NoSingers));
        assert_eq!(ChorusConfig::new().with_pool_threads(0).validate(), Err(ConfigError::EmptyPool));
        assert!(ChorusConfig::from_toml_str("singers = 0").is_err());
        assert!(ChorusConfig::from_toml_str("bottles = \"many\"").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bottles = 5").unwrap();
        writeln!(file, "singers = 2").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.bottles, 5);
        assert_eq!(config.singers, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
