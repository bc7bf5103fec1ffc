//! Rendering backend for voxelsprite-rs.
//!
//! This crate turns voxels and a view into painted pixels:
//! - [`pipeline`] transform, culling, projection and back-to-front sorting
//! - [`Canvas`] the drawing seam a host implements (or uses [`CommandList`])
//! - [`Framebuffer`] a software RGBA target for headless rendering
//! - [`save_image`] / [`encode_png`] frame export

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod canvas;
pub mod error;
pub mod framebuffer;
pub mod pipeline;
pub mod screenshot;

pub use canvas::{Canvas, CommandList, DrawCommand};
pub use error::{RenderError, RenderResult};
pub use framebuffer::{to_rgba8, Framebuffer};
pub use pipeline::{
    collect_faces, rasterize, render_frame, sort_back_to_front, FrameStats, ScreenFace,
    WIREFRAME_COLOR,
};
pub use screenshot::{encode_png, save_image};
