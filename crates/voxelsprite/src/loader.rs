//! Image-to-voxel conversion and the procedural fallback cube.
//!
//! Loading reports failure through [`LoadError`]; choosing the fallback is
//! left to the caller (see [`crate::Image3d`]).

#![allow(clippy::cast_precision_loss)]

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use voxelsprite_core::{validate_voxel_size, Vec3, Vec4, Voxel, VoxelError};

/// Why an image could not be turned into voxels.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or decoded.
    #[error("failed to load image '{}': {source}", path.display())]
    Image {
        /// The requested path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The voxel size is unusable.
    #[error(transparent)]
    InvalidVoxelSize(#[from] VoxelError),
}

/// Colors the default cube cycles through.
pub const DEFAULT_CUBE_PALETTE: [Vec4; 9] = [
    Vec4::new(1.0, 0.2, 0.2, 1.0),
    Vec4::new(0.2, 1.0, 0.2, 1.0),
    Vec4::new(0.2, 0.4, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 0.2, 1.0),
    Vec4::new(1.0, 0.2, 1.0, 1.0),
    Vec4::new(0.2, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 0.6, 0.2, 1.0),
    Vec4::new(0.6, 0.2, 1.0, 1.0),
    Vec4::new(0.9, 0.9, 0.9, 1.0),
];

/// Builds one voxel per pixel whose alpha exceeds `alpha_threshold`.
///
/// The sheet is centered on the origin with image row 0 at the top
/// (model +Y), one voxel deep at `z = 0`.
#[must_use]
pub fn voxels_from_image(image: &RgbaImage, voxel_size: f32, alpha_threshold: f32) -> Vec<Voxel> {
    let (width, height) = image.dimensions();
    let offset_x = -(width as f32) * voxel_size / 2.0;
    let offset_y = -(height as f32) * voxel_size / 2.0;

    image
        .enumerate_pixels()
        .filter_map(|(px, py, pixel)| {
            let color = Vec4::from_array(pixel.0.map(f32::from)) / 255.0;
            if color.w <= alpha_threshold {
                return None;
            }
            let position = Vec3::new(
                offset_x + px as f32 * voxel_size,
                offset_y + (height - 1 - py) as f32 * voxel_size,
                0.0,
            );
            Some(Voxel::new(position, voxel_size, color))
        })
        .collect()
}

/// Opens `path` and converts it with [`voxels_from_image`].
pub fn load_voxels(
    path: impl AsRef<Path>,
    voxel_size: f32,
    alpha_threshold: f32,
) -> Result<Vec<Voxel>, LoadError> {
    let path = path.as_ref();
    let voxel_size = validate_voxel_size(voxel_size)?;
    let image = image::open(path)
        .map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(voxels_from_image(&image, voxel_size, alpha_threshold))
}

/// A 3x3x3 cube of voxels centered on the origin, colored from
/// [`DEFAULT_CUBE_PALETTE`] in turn.
#[must_use]
pub fn default_cube(voxel_size: f32) -> Vec<Voxel> {
    let mut voxels = Vec::with_capacity(27);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let position = Vec3::new(x as f32, y as f32, z as f32) * voxel_size;
                let color = DEFAULT_CUBE_PALETTE[voxels.len() % DEFAULT_CUBE_PALETTE.len()];
                voxels.push(Voxel::new(position, voxel_size, color));
            }
        }
    }
    voxels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 25])); // 0.098, below threshold
        img.put_pixel(2, 0, Rgba([0, 0, 255, 26])); // 0.102, above threshold
        let voxels = voxels_from_image(&img, 1.0, 0.1);
        assert_eq!(voxels.len(), 2);
        assert_eq!(voxels[0].color(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(voxels[1].color().z, 1.0);
    }

    #[test]
    fn test_layout_is_centered_and_flipped() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let voxels = voxels_from_image(&img, 10.0, 0.1);
        assert_eq!(voxels.len(), 2);
        // Top-left pixel ends up high in model space.
        assert_eq!(voxels[0].position(), Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(voxels[1].position(), Vec3::new(0.0, -10.0, 0.0));
        assert!(voxels.iter().all(|v| v.position().z == 0.0));
    }

    #[test]
    fn test_default_cube() {
        let voxels = default_cube(10.0);
        assert_eq!(voxels.len(), 27);
        assert_eq!(voxels[0].position(), Vec3::splat(-10.0));
        assert_eq!(voxels[13].position(), Vec3::ZERO);
        assert_eq!(voxels[0].color(), voxels[9].color());
        assert_ne!(voxels[0].color(), voxels[1].color());
    }

    #[test]
    fn test_missing_file() {
        let err = load_voxels("/no/such/sprite.png", 10.0, 0.1).unwrap_err();
        assert!(matches!(err, LoadError::Image { .. }));
        assert!(err.to_string().contains("/no/such/sprite.png"));
    }

    #[test]
    fn test_bad_voxel_size() {
        let err = load_voxels("/no/such/sprite.png", 0.0, 0.1).unwrap_err();
        assert!(matches!(err, LoadError::InvalidVoxelSize(_)));
    }
}
