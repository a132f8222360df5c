//! Configuration for the replay harness
//!
//! Loaded from YAML. Every field has a default, so an empty file (or no file
//! at all) gives a usable configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::fs;

use crate::skill::MAX_GESTURE_LEN;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analog: AnalogConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Analog stick pre-filter applied before classification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalogConfig {
    /// Radial deadzone, as a fraction of full deflection
    #[serde(default = "default_deadzone")]
    pub deadzone: f32,
    /// Map square-gated stick readings onto the unit circle
    #[serde(default)]
    pub square_to_circle: bool,
    /// Per-axis inversion, keyed by axis id ("lx", "ly", "rx", "ry")
    #[serde(default)]
    pub invert: HashMap<String, bool>,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            deadzone: default_deadzone(),
            square_to_circle: false,
            invert: HashMap::new(),
        }
    }
}

/// Per-stick flick history kept for rotation matching
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Number of most recent flicks kept per stick
    #[serde(default = "default_history_window")]
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window: default_history_window(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file with validation
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path))?;

        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration for correctness and consistency
    pub fn validate(&self) -> Result<()> {
        let deadzone = self.analog.deadzone;
        if !deadzone.is_finite() || !(0.0..1.0).contains(&deadzone) {
            anyhow::bail!("analog.deadzone {} is invalid (must be in 0.0..1.0)", deadzone);
        }

        for axis in self.analog.invert.keys() {
            if !matches!(axis.as_str(), "lx" | "ly" | "rx" | "ry") {
                anyhow::bail!("analog.invert has unknown axis '{}' (expected lx, ly, rx or ry)", axis);
            }
        }

        if !(2..=MAX_GESTURE_LEN).contains(&self.history.window) {
            anyhow::bail!(
                "history.window {} is invalid (must be 2-{})",
                self.history.window, MAX_GESTURE_LEN
            );
        }

        Ok(())
    }
}

// Default value functions
fn default_deadzone() -> f32 { 0.2 }
fn default_history_window() -> usize { MAX_GESTURE_LEN }
