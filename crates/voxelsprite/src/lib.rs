//! voxelsprite: turn pixel-art images into rotating, shaded voxel solids.
//!
//! Every opaque pixel becomes a cube. Each frame the cubes are rotated,
//! projected, culled and painted back to front onto any [`Canvas`].
//!
//! # Quick Start
//!
//! ```no_run
//! use voxelsprite::*;
//!
//! fn main() -> RenderResult<()> {
//!     init_logging();
//!
//!     // Falls back to a 3x3x3 cube if the file can't be read.
//!     let mut model = Image3d::from_image("hero.png", Some(8.0));
//!     model.set_auto_rotation(0.0, 1.0, 0.0, true);
//!
//!     let mut frame = Framebuffer::new(640, 480)?;
//!     model.set_position(320.0, 240.0);
//!     model.update(1.0 / 60.0);
//!     model.draw(&mut frame);
//!
//!     save_image("hero_3d.png", &frame)
//! }
//! ```
//!
//! # Host contract
//!
//! - Call [`Image3d::update`] then [`Image3d::draw`] once per frame.
//! - Route input to the setters ([`Image3d::rotate_left`],
//!   [`Image3d::zoom_in`], [`Image3d::toggle_wireframe`], ...). They take
//!   effect on the next draw.
//! - Read [`Image3d::settings`] for overlays.

mod headless;
mod init;
pub mod loader;
mod model;
mod settings;

pub use headless::{render_to_file, render_to_image, BACKGROUND};
pub use init::init_logging;
pub use loader::{default_cube, load_voxels, voxels_from_image, LoadError};
pub use model::Image3d;
pub use settings::Settings;

// Re-export core types
pub use voxelsprite_core::{
    error::{Result, VoxelError},
    math,
    Face, FaceDirection, OcclusionIndex, RenderOptions, Vec2, Vec3, Vec4, ViewState, Voxel,
    DEFAULT_VOXEL_SIZE, FACES,
};

// Re-export render types
pub use voxelsprite_render::{
    encode_png, save_image, Canvas, CommandList, DrawCommand, FrameStats, Framebuffer,
    RenderError, RenderResult, ScreenFace,
};
