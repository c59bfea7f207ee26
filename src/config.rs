//! Viewer settings.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```
//! # use glyph_voxel::ViewerConfig;
//! let config = ViewerConfig::from_json_str(r#"{ "rotation_step": 5.0 }"#).unwrap();
//! assert_eq!(config.rotation_step, 5.0);
//! assert_eq!(config.target_fps, 60);
//! ```

use crate::{camera::Projection, MeshConfig, ViewerError};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub projection: Projection,
    /// Distance from the camera to the glyph's center.
    pub camera_distance: f32,
    /// Degrees turned per tick while a direction key is held.
    pub rotation_step: f32,
    /// Ticks per second. Zero disables rate limiting.
    pub target_fps: u32,
    pub light: LightConfig,
    pub mesh: MeshConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            projection: Projection::default(),
            camera_distance: 15.0,
            rotation_step: 2.0,
            target_fps: 60,
            light: LightConfig::default(),
            mesh: MeshConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn tick_interval(&self) -> Duration {
        if self.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
        }
    }

    /// Tick rate for frontends with a fixed-timestep scheduler, or `None` when
    /// ticks are unlimited.
    pub fn tick_rate_hz(&self) -> Option<f64> {
        (self.target_fps > 0).then(|| f64::from(self.target_fps))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "3D Glyph Viewer - Use Arrow Keys to Rotate".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// One directional light with an ambient term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Direction pointing towards the light.
    pub direction: [f32; 3],
    pub ambient: f32,
    pub diffuse: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [1.0, 1.0, 1.0],
            ambient: 0.2,
            diffuse: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_viewer() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera_distance, 15.0);
        assert_eq!(config.rotation_step, 2.0);
        assert_eq!(config.mesh.block_size, 0.8);
        assert_eq!(config.light.direction, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ViewerConfig::from_json_str(r#"{ "window": { "width": 1024 }, "mesh": { "extrude_depth": 2.0 } }"#)
                .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.mesh.extrude_depth, 2.0);
        assert_eq!(config.mesh.color, crate::DEFAULT_COLOR);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ViewerConfig::from_json_str("{ \"target_fps\": \"fast\" }").unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ViewerConfig::load("/nonexistent/glyph-voxel.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/glyph-voxel.json"));
    }

    #[test]
    fn tick_interval_follows_fps() {
        let mut config = ViewerConfig::default();
        config.target_fps = 50;
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
        config.target_fps = 0;
        assert_eq!(config.tick_interval(), Duration::ZERO);
    }

    #[test]
    fn tick_rate_is_independent_of_refresh() {
        let mut config = ViewerConfig::default();
        assert_eq!(config.tick_rate_hz(), Some(60.0));
        // 60 ticks of 2 degrees make 120 degrees per second.
        let per_second = config.rotation_step as f64 * config.tick_rate_hz().unwrap();
        assert_eq!(per_second, 120.0);
        config.target_fps = 0;
        assert_eq!(config.tick_rate_hz(), None);
    }
}
