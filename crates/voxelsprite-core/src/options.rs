//! Configuration options for voxelsprite.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxelError};

/// Edge length used when the caller does not pick one.
pub const DEFAULT_VOXEL_SIZE: f32 = 10.0;

/// Distance between the implicit camera and the model origin.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 400.0;

/// Pixels with alpha at or below this value produce no voxel.
pub const DEFAULT_ALPHA_THRESHOLD: f32 = 0.1;

/// Smallest zoom factor the view accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// Options used when building a model and its initial view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Voxel edge length in model units.
    pub voxel_size: f32,

    /// Distance the model is pushed along +Z before projection.
    pub camera_distance: f32,

    /// Alpha cutoff for voxel emission, in [0, 1].
    pub alpha_threshold: f32,

    /// Floor for the zoom factor. Never below [`MIN_ZOOM`].
    pub min_zoom: f32,

    /// Angle applied by one relative rotation step (radians).
    pub rotation_step: f32,

    /// Amount added or removed by one relative zoom step.
    pub zoom_step: f32,

    /// Auto-rotation angular velocity per axis (radians / second).
    pub auto_rotate_speed: Vec3,

    /// Whether auto-rotation starts enabled.
    pub auto_rotate: bool,

    /// Whether wireframe mode starts enabled.
    pub wireframe: bool,

    /// Whether per-face shading starts enabled.
    pub shading: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            voxel_size: DEFAULT_VOXEL_SIZE,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            min_zoom: MIN_ZOOM,
            rotation_step: 0.1,
            zoom_step: 0.1,
            auto_rotate_speed: Vec3::new(0.0, 0.5, 0.0),
            auto_rotate: false,
            wireframe: false,
            shading: true,
        }
    }
}

impl RenderOptions {
    /// Parses options from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json(&text)?;
        log::debug!("loaded render options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every option for a usable value.
    pub fn validate(&self) -> Result<()> {
        crate::error::validate_voxel_size(self.voxel_size)?;
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            return Err(VoxelError::InvalidOption {
                name: "camera_distance",
                reason: format!("{} is not a positive distance", self.camera_distance),
            });
        }
        if !(0.0..=1.0).contains(&self.alpha_threshold) {
            return Err(VoxelError::InvalidOption {
                name: "alpha_threshold",
                reason: format!("{} is outside [0, 1]", self.alpha_threshold),
            });
        }
        if !(self.min_zoom.is_finite() && self.min_zoom >= MIN_ZOOM) {
            return Err(VoxelError::InvalidOption {
                name: "min_zoom",
                reason: format!("{} is below {MIN_ZOOM}", self.min_zoom),
            });
        }
        if !self.auto_rotate_speed.is_finite() {
            return Err(VoxelError::InvalidOption {
                name: "auto_rotate_speed",
                reason: "velocities must be finite".to_string(),
            });
        }
        Ok(())
    }
}
