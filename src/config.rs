use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW};

/// Camera tuning loaded from a JSON file. Missing fields fall back to the
/// camera defaults, so a config can override just one knob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Degrees; clamped to [1, 45] when the camera is built.
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov: DEFAULT_FOV,
        }
    }
}

impl CameraConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read camera config {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse camera config {}", path.display()))
    }
}
