//! sortvis configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sortvis_charts::PartitionShading;
use sortvis_core::input::{clamp_size, DEFAULT_MAX_VALUE, DEFAULT_SIZE};
use sortvis_core::{Algorithm, Value};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "sortvis.toml";
/// Upper bound of the delay slider
pub const MAX_DELAY_MS: u64 = 1000;

/// Top-level configuration (sortvis.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SortvisConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Generated input
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    /// Values are drawn from `1..=max_value`
    #[serde(default = "default_max_value")]
    pub max_value: Value,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_max_value() -> Value {
    DEFAULT_MAX_VALUE
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_value: default_max_value(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    sortvis_animation::DEFAULT_DELAY_MS
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Terminal rendering
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Chart height in rows
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub shading: PartitionShading,
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_height() -> usize {
    12
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            shading: PartitionShading::default(),
            clear_screen: true,
        }
    }
}

impl SortvisConfig {
    /// Load an explicit config file; it must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `sortvis.toml` from `dir` if present, defaults otherwise
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Explicit path if given, else the working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load_from_dir(Path::new(".")),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SortvisConfig = toml::from_str(content)?;
        Ok(config.clamped())
    }

    /// Bring out-of-range values back inside their bounds
    pub fn clamped(mut self) -> Self {
        self.input.size = clamp_size(self.input.size);
        self.input.max_value = self.input.max_value.max(1);
        self.playback.delay_ms = self.playback.delay_ms.min(MAX_DELAY_MS);
        self.render.height = self.render.height.max(1);
        self
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = SortvisConfig::from_toml("").unwrap();
        assert_eq!(config, SortvisConfig::default());
        assert_eq!(config.input.size, 20);
        assert_eq!(config.playback.delay_ms, 500);
        assert_eq!(config.render.shading, PartitionShading::Dim);
        assert!(config.render.clear_screen);
    }

    #[test]
    fn parses_every_section() {
        let config = SortvisConfig::from_toml(
            r#"
            [input]
            size = 8
            max_value = 50
            seed = 42

            [playback]
            algorithm = "quick-sort"
            delay_ms = 0

            [render]
            height = 6
            shading = "flat"
            clear_screen = false
            "#,
        )
        .unwrap();

        assert_eq!(config.input.size, 8);
        assert_eq!(config.input.max_value, 50);
        assert_eq!(config.input.seed, Some(42));
        assert_eq!(config.playback.algorithm, Algorithm::Quick);
        assert_eq!(config.playback.delay_ms, 0);
        assert_eq!(config.render.height, 6);
        assert_eq!(config.render.shading, PartitionShading::Flat);
        assert!(!config.render.clear_screen);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = SortvisConfig::from_toml(
            "[input]\nsize = 1000\nmax_value = 0\n[playback]\ndelay_ms = 5000\n",
        )
        .unwrap();
        assert_eq!(config.input.size, 100);
        assert_eq!(config.input.max_value, 1);
        assert_eq!(config.playback.delay_ms, 1000);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(SortvisConfig::from_toml("[playback]\nalgorithm = \"bogo\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = SortvisConfig::load(Some(Path::new("/nonexistent/sortvis.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut config = SortvisConfig::default();
        config.input.seed = Some(7);
        config.playback.algorithm = Algorithm::Selection;
        let text = config.to_toml().unwrap();
        assert_eq!(SortvisConfig::from_toml(&text).unwrap(), config);
    }
}
