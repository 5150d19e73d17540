use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ui::theme::serde_color;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub timing: TimingConfig,
    pub affirmations: AffirmationsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme applied when no preference is persisted: "light" or "dark"
    pub default_theme: String,
    /// Accent override for the light palette, hex
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub light_accent: Option<Color>,
    /// Accent override for the dark palette, hex
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub dark_accent: Option<Color>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Affirmation fade-out before the text swap, milliseconds
    pub fade_ms: u64,
    /// Resize debounce settle time, milliseconds
    pub debounce_ms: u64,
    /// Control/text pulse duration after activation, milliseconds
    pub pulse_ms: u64,
    /// How long the startup announcement stays on the status line, milliseconds
    pub announcement_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AffirmationsConfig {
    /// Custom affirmation list, one per line. Built-in list when unset.
    pub file: Option<PathBuf>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
            light_accent: None,
            dark_accent: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fade_ms: 200,
            debounce_ms: 250,
            pulse_ms: 300,
            announcement_ms: 3000,
        }
    }
}

impl TimingConfig {
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn announcement(&self) -> Duration {
        Duration::from_millis(self.announcement_ms)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
