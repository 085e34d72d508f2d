use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Runtime settings, loadable from YAML. Every field has a default, so a
/// partial file only overrides what it names.
///
/// Window fields are consumed by windowed backends; the core only uses
/// them to place the default cameras.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Seconds per fixed update.
    pub fixed_step: f32,
    /// Upper bound on fixed-update catch-up per frame. `None` leaves
    /// catch-up unbounded: a long stall then owes all of its steps at once,
    /// which can snowball when fixed updates themselves are slow.
    pub max_catch_up_steps: Option<u32>,
    /// Sort key where the UI layer begins: the default world camera draws
    /// keys below this, the default UI camera keys at or above it.
    pub ui_layer: f32,
    /// Initial center of the world camera.
    pub camera_center: Vec2,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Stageloop".to_string(),
            window_width: 800,
            window_height: 600,
            target_fps: 60,
            fixed_step: 1.0 / 60.0,
            max_catch_up_steps: None,
            ui_layer: 10.0,
            camera_center: Vec2::new(400.0, 300.0),
        }
    }
}

impl EngineConfig {
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }
}
