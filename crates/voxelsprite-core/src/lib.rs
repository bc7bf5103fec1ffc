//! Core geometry for voxelsprite-rs.
//!
//! This crate provides the pieces of the voxel pipeline that do not touch pixels:
//! - [`math`] rotation, projection and normal helpers
//! - [`Voxel`] cubes and the shared [`FACES`] topology table
//! - [`OcclusionIndex`] neighbour lookup and interior-face removal
//! - [`ViewState`] rotation/zoom/toggle state driven by host input
//! - [`RenderOptions`] configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// View state legitimately has several boolean toggles
#![allow(clippy::struct_excessive_bools)]

pub mod error;
pub mod math;
pub mod occlusion;
pub mod options;
pub mod state;
pub mod voxel;

pub use error::{validate_voxel_size, Result, VoxelError};
pub use occlusion::{GridKey, OcclusionIndex, VisibleFaces};
pub use options::{
    RenderOptions, DEFAULT_ALPHA_THRESHOLD, DEFAULT_CAMERA_DISTANCE, DEFAULT_VOXEL_SIZE, MIN_ZOOM,
};
pub use state::ViewState;
pub use voxel::{Face, FaceDirection, Voxel, FACES, FACE_COUNT};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3, Vec4};
