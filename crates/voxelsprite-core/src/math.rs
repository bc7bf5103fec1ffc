//! Rotation, projection and normal helpers.
//!
//! Model space is right-handed with +Y up. The implicit camera sits at the
//! origin looking down +Z, so the model is pushed away from it by the camera
//! distance before projection. Screen space has +Y pointing down.

use glam::{Vec2, Vec3};

/// Rotates `v` around the X axis by `angle` radians.
#[inline]
#[must_use]
pub fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

/// Rotates `v` around the Y axis by `angle` radians.
#[inline]
#[must_use]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

/// Rotates `v` around the Z axis by `angle` radians.
#[inline]
#[must_use]
pub fn rotate_z(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

/// Perspective-projects a camera-space point onto the screen.
///
/// Uses `scale = distance / (distance + z)` and flips Y so that model "up"
/// maps to screen "up". Returns `None` when the point lies at or behind the
/// camera plane (`z <= -distance`).
#[inline]
#[must_use]
pub fn project(v: Vec3, center: Vec2, distance: f32) -> Option<Vec2> {
    if v.z <= -distance {
        return None;
    }
    let scale = distance / (distance + v.z);
    let p = Vec2::new(center.x + v.x * scale, center.y - v.y * scale);
    p.is_finite().then_some(p)
}

/// Unit normal of the triangle `(v1, v2, v3)`: `(v2 - v1) × (v3 - v1)`.
///
/// Degenerate triangles yield [`Vec3::ZERO`].
#[inline]
#[must_use]
pub fn calculate_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1).normalize_or_zero()
}

/// Applies the model-to-camera chain used every frame:
/// scale by `zoom`, rotate X, then Y, then Z, then push `camera_distance`
/// along +Z.
///
/// The rotation order is not commutative and must not change.
#[inline]
#[must_use]
pub fn transform_vertex(v: Vec3, zoom: f32, rotation: Vec3, camera_distance: f32) -> Vec3 {
    let scaled = v * zoom;
    let rotated = rotate_z(
        rotate_y(rotate_x(scaled, rotation.x), rotation.y),
        rotation.z,
    );
    rotated + Vec3::new(0.0, 0.0, camera_distance)
}
