//! Mutable view state for a rendered model.
//!
//! Host input callbacks mutate this through the model's setters; the frame
//! pipeline reads it once per draw. Changes apply on the next draw.

use glam::{Vec2, Vec3};

use crate::options::RenderOptions;

/// Rotation, zoom and display toggles for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    rotation: Vec3,
    zoom: f32,
    min_zoom: f32,
    screen_center: Vec2,
    camera_distance: f32,
    auto_rotate: bool,
    auto_rotate_speed: Vec3,
    wireframe: bool,
    shading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl ViewState {
    /// Creates the initial view described by `options`.
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            rotation: Vec3::ZERO,
            zoom: 1.0_f32.max(options.min_zoom),
            min_zoom: options.min_zoom,
            screen_center: Vec2::ZERO,
            camera_distance: options.camera_distance,
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: options.auto_rotate_speed,
            wireframe: options.wireframe,
            shading: options.shading,
        }
    }

    /// Rotation angles around X, Y and Z in radians. Unbounded.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Current zoom factor, never below the configured floor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Screen position the model origin projects to.
    #[must_use]
    pub fn screen_center(&self) -> Vec2 {
        self.screen_center
    }

    /// Distance between the camera and the model origin.
    #[must_use]
    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Whether [`ViewState::advance`] rotates the model.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Auto-rotation angular velocity per axis (radians / second).
    #[must_use]
    pub fn auto_rotate_speed(&self) -> Vec3 {
        self.auto_rotate_speed
    }

    /// Whether triangles are drawn as white outlines.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Whether static per-face shades are applied.
    #[must_use]
    pub fn shading(&self) -> bool {
        self.shading
    }

    /// Moves the projected model origin.
    pub fn set_screen_center(&mut self, center: Vec2) {
        self.screen_center = center;
    }

    /// Adds `delta` to the rotation angles.
    pub fn rotate_by(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Replaces all three rotation angles.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Sets the X rotation angle.
    pub fn set_rotation_x(&mut self, angle: f32) {
        self.rotation.x = angle;
    }

    /// Sets the Y rotation angle.
    pub fn set_rotation_y(&mut self, angle: f32) {
        self.rotation.y = angle;
    }

    /// Sets the Z rotation angle.
    pub fn set_rotation_z(&mut self, angle: f32) {
        self.rotation.z = angle;
    }

    /// Zeroes every rotation angle.
    pub fn reset_rotation(&mut self) {
        self.rotation = Vec3::ZERO;
    }

    /// Adds `delta` to the zoom factor, clamped to the floor.
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    /// Sets the zoom factor, clamped to the floor.
    pub fn set_zoom(&mut self, zoom: f32) {
        // NaN falls back to the floor as well.
        self.zoom = if zoom >= self.min_zoom {
            zoom
        } else {
            self.min_zoom
        };
    }

    /// Sets auto-rotation velocities and whether it is active.
    pub fn set_auto_rotation(&mut self, speed: Vec3, enabled: bool) {
        self.auto_rotate_speed = speed;
        self.auto_rotate = enabled;
    }

    /// Flips auto-rotation on or off.
    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Flips wireframe mode.
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    /// Flips per-face shading.
    pub fn toggle_shading(&mut self) {
        self.shading = !self.shading;
    }

    /// Advances auto-rotation by `dt` seconds. No-op when disabled.
    ///
    /// Auto and manual rotation accumulate into the same angles.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate {
            self.rotation += self.auto_rotate_speed * dt;
        }
    }
}
