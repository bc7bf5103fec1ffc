//! Headless rendering API for voxelsprite.
//!
//! Renders a model into a software framebuffer without any window. Useful for
//! integration tests, batch thumbnails and automated snapshots.

use std::path::Path;

use voxelsprite_core::Vec4;
use voxelsprite_render::{save_image, Framebuffer, RenderResult};

use crate::Image3d;

/// Background used by the headless helpers.
pub const BACKGROUND: Vec4 = Vec4::new(0.08, 0.08, 0.12, 1.0);

/// Renders one frame of `model` into a new framebuffer.
///
/// The model is re-centered on the framebuffer before drawing; its rotation
/// and zoom are left untouched.
///
/// # Example
/// ```no_run
/// use voxelsprite::*;
///
/// let mut model = Image3d::default_cube(None);
/// let frame = render_to_image(&mut model, 320, 240).unwrap();
/// assert_eq!(frame.as_bytes().len(), 320 * 240 * 4);
/// ```
pub fn render_to_image(model: &mut Image3d, width: u32, height: u32) -> RenderResult<Framebuffer> {
    let mut framebuffer = Framebuffer::new(width, height)?;
    framebuffer.clear(BACKGROUND);
    let center = framebuffer.center();
    model.set_position(center.x, center.y);
    model.draw(&mut framebuffer);
    Ok(framebuffer)
}

/// Renders one frame of `model` and saves it as PNG or JPEG.
///
/// # Example
/// ```no_run
/// use voxelsprite::*;
///
/// let mut model = Image3d::from_image("sprite.png", Some(8.0));
/// model.set_rotation(0.4, 0.6, 0.0);
/// render_to_file(&mut model, "sprite_3d.png", 640, 480).unwrap();
/// ```
pub fn render_to_file(
    model: &mut Image3d,
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> RenderResult<()> {
    let framebuffer = render_to_image(model, width, height)?;
    save_image(path, &framebuffer)
}
