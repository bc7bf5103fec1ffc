//! Saving rendered frames to disk or memory.

use std::path::Path;

use image::DynamicImage;

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::Framebuffer;

/// Saves a framebuffer to an image file.
///
/// # Arguments
/// * `path` - Output filename (supports .png, .jpg, .jpeg)
/// * `framebuffer` - The rendered frame
///
/// # Errors
/// Returns an error if the file cannot be written or format is unsupported.
pub fn save_image(path: impl AsRef<Path>, framebuffer: &Framebuffer) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => {
            framebuffer
                .as_image()
                .save_with_format(path, image::ImageFormat::Png)?;
        }
        "jpg" | "jpeg" => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(framebuffer.as_image().clone()).to_rgb8();
            rgb.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
        _ => {
            return Err(RenderError::UnsupportedFormat(extension));
        }
    }

    log::info!(
        "saved {}x{} frame to {}",
        framebuffer.width(),
        framebuffer.height(),
        path.display()
    );
    Ok(())
}

/// Encodes a framebuffer as PNG in memory.
pub fn encode_png(framebuffer: &Framebuffer) -> RenderResult<Vec<u8>> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    framebuffer
        .as_image()
        .write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_encode_png_signature() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Vec4::new(1.0, 0.0, 0.0, 1.0));
        let png = encode_png(&fb).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let fb = Framebuffer::new(2, 2).unwrap();
        let path = std::env::temp_dir().join("voxelsprite_render_test.tga");
        assert!(matches!(
            save_image(&path, &fb),
            Err(RenderError::UnsupportedFormat(ext)) if ext == "tga"
        ));
    }

    #[test]
    fn test_save_png_roundtrip() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Vec4::new(0.0, 1.0, 0.0, 1.0));
        let path = std::env::temp_dir().join("voxelsprite_render_test_roundtrip.png");
        save_image(&path, &fb).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [0, 255, 0, 255]);
        let _ = std::fs::remove_file(&path);
    }
}
