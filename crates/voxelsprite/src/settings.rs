//! Read-only snapshot of a model's state.

use serde::Serialize;

/// What a host needs for an on-screen diagnostics overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Current zoom factor.
    pub zoom: f32,
    /// Whether auto-rotation is running.
    pub auto_rotate: bool,
    /// Whether wireframe mode is on.
    pub wireframe: bool,
    /// Whether per-face shading is on.
    pub shading: bool,
    /// Rotation around X (radians).
    pub rotation_x: f32,
    /// Rotation around Y (radians).
    pub rotation_y: f32,
    /// Rotation around Z (radians).
    pub rotation_z: f32,
    /// Number of voxels in the model.
    pub voxel_count: usize,
    /// Triangles painted by the last draw.
    pub rendered_faces: usize,
    /// False when the model fell back to the default cube.
    pub loaded_from_image: bool,
}
