//! Neighbour lookup and interior-face removal.
//!
//! The index is rebuilt from the voxel list each frame. It only strips sides
//! sealed by a same-size neighbour; it never merges coplanar faces.

use std::collections::HashSet;

use glam::Vec3;

use crate::voxel::{Face, FaceDirection, Voxel, FACES};

/// Key steps per voxel edge.
const KEY_STEPS: f32 = 64.0;

/// Composite integer key for a voxel center.
///
/// Coordinates are measured in voxel edges and snapped to 1/64 of an edge, so
/// a neighbour position computed as `position + direction * size` hits the
/// same key as the stored voxel despite float rounding, whatever the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey(i64, i64, i64);

impl GridKey {
    /// Builds the key for a model-space position on a grid of `cell` units.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_position(position: Vec3, cell: f32) -> Self {
        let q = (position / cell * KEY_STEPS).round();
        Self(q.x as i64, q.y as i64, q.z as i64)
    }
}

/// Set of occupied voxel positions.
///
/// All voxels are expected to share one size; the first voxel sets the grid.
#[derive(Debug, Clone)]
pub struct OcclusionIndex {
    cell: f32,
    occupied: HashSet<GridKey>,
}

impl Default for OcclusionIndex {
    fn default() -> Self {
        Self {
            cell: 1.0,
            occupied: HashSet::new(),
        }
    }
}

impl OcclusionIndex {
    /// Indexes every voxel position in `voxels`.
    #[must_use]
    pub fn build(voxels: &[Voxel]) -> Self {
        let cell = voxels
            .first()
            .map(Voxel::size)
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(1.0);
        let occupied = voxels
            .iter()
            .map(|voxel| GridKey::from_position(voxel.position(), cell))
            .collect();
        Self { cell, occupied }
    }

    /// Returns true if a voxel is centered at `position`.
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        self.occupied.contains(&GridKey::from_position(position, self.cell))
    }

    /// Number of distinct occupied positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Returns true if no voxel is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Sides of `voxel` that are not covered by a neighbour.
    #[must_use]
    pub fn visible_faces(&self, voxel: &Voxel) -> VisibleFaces {
        let mut open = [false; 6];
        for direction in FaceDirection::ALL {
            open[direction.index()] = !self.contains(voxel.neighbor_position(direction));
        }
        VisibleFaces { open }
    }
}

/// Result of the visibility filter for one voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleFaces {
    open: [bool; 6],
}

impl VisibleFaces {
    /// Returns true if the side in `direction` is exposed.
    #[must_use]
    pub fn is_open(&self, direction: FaceDirection) -> bool {
        self.open[direction.index()]
    }

    /// Returns true if every side is sealed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.open.iter().any(|&o| o)
    }

    /// Number of visible triangles (two per exposed side).
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.iter().filter(|&&o| o).count() * 2
    }

    /// Visible triangles, in [`FACES`] order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Face> + '_ {
        FACES.iter().filter(|face| self.is_open(face.direction))
    }
}
