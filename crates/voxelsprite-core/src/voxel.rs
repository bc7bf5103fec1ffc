//! Voxel cubes and the shared cube topology.
//!
//! Every voxel owns its eight corners. The twelve triangles are the same for
//! every voxel and live in the constant [`FACES`] table.

use glam::{Vec3, Vec4};

use crate::math::transform_vertex;

/// Axis-aligned direction of a cube side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    /// Positive X axis (right).
    PosX,
    /// Negative X axis (left).
    NegX,
    /// Positive Y axis (top).
    PosY,
    /// Negative Y axis (bottom).
    NegY,
    /// Positive Z axis (back, away from the viewer).
    PosZ,
    /// Negative Z axis (front, toward the viewer).
    NegZ,
}

impl FaceDirection {
    /// All six directions, in [`FaceDirection::index`] order.
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::NegZ,
        FaceDirection::PosZ,
        FaceDirection::NegX,
        FaceDirection::PosX,
        FaceDirection::PosY,
        FaceDirection::NegY,
    ];

    /// Returns the unit vector for this direction.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        match self {
            FaceDirection::PosX => Vec3::X,
            FaceDirection::NegX => Vec3::NEG_X,
            FaceDirection::PosY => Vec3::Y,
            FaceDirection::NegY => Vec3::NEG_Y,
            FaceDirection::PosZ => Vec3::Z,
            FaceDirection::NegZ => Vec3::NEG_Z,
        }
    }

    /// Position of this direction in [`FaceDirection::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FaceDirection::NegZ => 0,
            FaceDirection::PosZ => 1,
            FaceDirection::NegX => 2,
            FaceDirection::PosX => 3,
            FaceDirection::PosY => 4,
            FaceDirection::NegY => 5,
        }
    }

    /// Static shade applied to faces pointing this way.
    #[must_use]
    pub fn shade(self) -> f32 {
        match self {
            FaceDirection::NegZ => SHADE_FRONT,
            FaceDirection::PosZ => SHADE_BACK,
            FaceDirection::NegX => SHADE_LEFT,
            FaceDirection::PosX => SHADE_RIGHT,
            FaceDirection::PosY => SHADE_TOP,
            FaceDirection::NegY => SHADE_BOTTOM,
        }
    }
}

/// Shade of the side facing the viewer.
pub const SHADE_FRONT: f32 = 1.0;
/// Shade of the side facing away from the viewer.
pub const SHADE_BACK: f32 = 0.6;
/// Shade of the -X side.
pub const SHADE_LEFT: f32 = 0.8;
/// Shade of the +X side.
pub const SHADE_RIGHT: f32 = 0.9;
/// Shade of the +Y side.
pub const SHADE_TOP: f32 = 0.7;
/// Shade of the -Y side.
pub const SHADE_BOTTOM: f32 = 0.5;

/// One triangle of the cube topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Indices into [`Voxel::vertices`].
    pub indices: [usize; 3],
    /// Static shade in (0, 1], used only when shading is enabled.
    pub shade: f32,
    /// Side of the cube this triangle belongs to. Used for neighbour lookups
    /// only; the lit/culled normal is recomputed from transformed vertices.
    pub direction: FaceDirection,
}

impl Face {
    const fn new(indices: [usize; 3], shade: f32, direction: FaceDirection) -> Self {
        Self {
            indices,
            shade,
            direction,
        }
    }
}

/// Number of triangles per voxel.
pub const FACE_COUNT: usize = 12;

/// Cube topology shared by every voxel, two triangles per side.
///
/// Corner layout (`h = size / 2`): 0..4 are the front square at `z - h`
/// (`(-h,-h) (h,-h) (h,h) (-h,h)`), 4..8 the same square at `z + h`.
///
/// Each triangle is wound so that `(v2 - v1) × (v3 - v1)` points into the
/// cube. With the camera looking down +Z, a side turned toward the viewer
/// therefore has a non-negative normal Z.
pub const FACES: [Face; FACE_COUNT] = [
    // front
    Face::new([0, 1, 2], SHADE_FRONT, FaceDirection::NegZ),
    Face::new([0, 2, 3], SHADE_FRONT, FaceDirection::NegZ),
    // back
    Face::new([5, 4, 7], SHADE_BACK, FaceDirection::PosZ),
    Face::new([5, 7, 6], SHADE_BACK, FaceDirection::PosZ),
    // left
    Face::new([4, 0, 3], SHADE_LEFT, FaceDirection::NegX),
    Face::new([4, 3, 7], SHADE_LEFT, FaceDirection::NegX),
    // right
    Face::new([1, 5, 6], SHADE_RIGHT, FaceDirection::PosX),
    Face::new([1, 6, 2], SHADE_RIGHT, FaceDirection::PosX),
    // top
    Face::new([3, 2, 6], SHADE_TOP, FaceDirection::PosY),
    Face::new([3, 6, 7], SHADE_TOP, FaceDirection::PosY),
    // bottom
    Face::new([4, 5, 1], SHADE_BOTTOM, FaceDirection::NegY),
    Face::new([4, 1, 0], SHADE_BOTTOM, FaceDirection::NegY),
];

/// Unit-cube corner signs in the layout documented on [`FACES`].
const CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// A single colored cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Voxel {
    position: Vec3,
    size: f32,
    color: Vec4,
    vertices: [Vec3; 8],
}

impl Voxel {
    /// Creates a voxel centered at `position` with edge length `size`.
    ///
    /// `color` is RGBA in [0, 1].
    #[must_use]
    pub fn new(position: Vec3, size: f32, color: Vec4) -> Self {
        let half = size * 0.5;
        let vertices = CORNERS.map(|corner| position + corner * half);
        Self {
            position,
            size,
            color,
            vertices,
        }
    }

    /// Center of the cube.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// RGBA color.
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Corners in model space.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// The shared triangle table.
    #[must_use]
    pub fn faces(&self) -> &'static [Face; FACE_COUNT] {
        &FACES
    }

    /// Center of the same-size neighbour on the given side.
    #[must_use]
    pub fn neighbor_position(&self, direction: FaceDirection) -> Vec3 {
        self.position + direction.to_vec3() * self.size
    }

    /// Corners after zoom, rotation and the push away from the camera.
    #[must_use]
    pub fn transformed_vertices(
        &self,
        zoom: f32,
        rotation: Vec3,
        camera_distance: f32,
    ) -> [Vec3; 8] {
        self.vertices.map(|v| transform_vertex(v, zoom, rotation, camera_distance))
    }
}
