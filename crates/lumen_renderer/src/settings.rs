//! Render settings: everything needed to go from a preset name to an image.
//!
//! Settings can be loaded from JSON; any missing field takes its default.

use std::path::Path;

use crate::camera::{Camera, CameraSettings};
use crate::error::{RenderError, RenderResult};
use crate::renderer::{RenderConfig, MAX_DEPTH};
use crate::scenes::ScenePreset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Seed for the random source; `None` draws one from the OS
    pub seed: Option<u64>,
    pub scene: ScenePreset,
    /// Camera placement and lens. The aspect ratio is always taken from
    /// `width` and `height`.
    pub camera: CameraSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 10,
            max_depth: MAX_DEPTH,
            seed: None,
            scene: ScenePreset::default(),
            camera: CameraSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON string.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(RenderError::InvalidSettings(format!(
                "image size {}x{} has too many pixels",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.camera.look_from == self.camera.look_at {
            return Err(RenderError::InvalidSettings(
                "camera look_from and look_at must differ".to_string(),
            ));
        }
        let view = self.camera.look_from - self.camera.look_at;
        if self.camera.vup.cross(view).length_squared() == 0.0 {
            return Err(RenderError::InvalidSettings(
                "camera vup must not be parallel to the view direction".to_string(),
            ));
        }
        Ok(())
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
        }
    }

    /// Build the camera with the aspect ratio of the output image.
    pub fn camera(&self) -> Camera {
        self.camera
            .with_aspect(self.render_config().aspect())
            .build()
    }
}
