//! Headless rendering integration tests.
//!
//! These exercise the full update → draw → framebuffer path on the CPU.

use voxelsprite::{
    render_to_file, render_to_image, Image3d, RenderError, Vec3, Vec4, Voxel, BACKGROUND,
};
use voxelsprite_render::to_rgba8;

fn background() -> [u8; 4] {
    to_rgba8(BACKGROUND).0
}

#[test]
fn test_render_default_cube_to_image() {
    let mut model = Image3d::default_cube(None);
    model.set_rotation(0.4, 0.6, 0.0);
    let frame = render_to_image(&mut model, 200, 150).expect("render failed");

    assert_eq!(frame.width(), 200);
    assert_eq!(frame.height(), 150);
    assert_eq!(frame.as_bytes().len(), 200 * 150 * 4);

    // Cube sits on the center, corners stay background.
    assert_ne!(frame.pixel(100, 75), Some(background()));
    assert_eq!(frame.pixel(0, 0), Some(background()));
    assert!(model.settings().rendered_faces > 0);
}

#[test]
fn test_front_face_uses_full_shade() {
    let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let voxels = vec![Voxel::new(Vec3::ZERO, 40.0, red)];
    let mut model = Image3d::from_voxels(voxels, voxelsprite::RenderOptions::default());
    let frame = render_to_image(&mut model, 100, 100).unwrap();
    assert_eq!(frame.pixel(50, 50), Some([255, 0, 0, 255]));

    model.set_rotation_y(std::f32::consts::PI);
    let frame = render_to_image(&mut model, 100, 100).unwrap();
    // Back shade is 0.6.
    assert_eq!(frame.pixel(50, 50), Some([153, 0, 0, 255]));

    model.toggle_shading();
    let frame = render_to_image(&mut model, 100, 100).unwrap();
    assert_eq!(frame.pixel(50, 50), Some([255, 0, 0, 255]));
}

#[test]
fn test_wireframe_draws_white_outlines() {
    let voxels = vec![Voxel::new(Vec3::ZERO, 40.0, Vec4::new(0.0, 0.0, 1.0, 1.0))];
    let mut model = Image3d::from_voxels(voxels, voxelsprite::RenderOptions::default());
    model.toggle_wireframe();
    let frame = render_to_image(&mut model, 100, 100).unwrap();

    let white = frame
        .as_image()
        .pixels()
        .filter(|p| p.0 == [255, 255, 255, 255])
        .count();
    let blue = frame
        .as_image()
        .pixels()
        .filter(|p| p.0[2] == 255 && p.0[0] == 0)
        .count();
    assert!(white > 0);
    assert_eq!(blue, 0);
}

#[test]
fn test_extreme_zoom_wireframe_stays_in_bounds() {
    let voxels = vec![Voxel::new(Vec3::new(0.0, 0.0, 5.0), 10.0, Vec4::ONE)];
    let mut model = Image3d::from_voxels(voxels, voxelsprite::RenderOptions::default());
    model.set_zoom(1e9);
    model.toggle_wireframe();

    let frame = render_to_image(&mut model, 64, 64).expect("render failed");
    assert_eq!(frame.as_bytes().len(), 64 * 64 * 4);
    assert!(model.screen_faces().iter().all(|f| f.points.iter().all(|p| p.is_finite())));

    model.toggle_wireframe();
    let filled = render_to_image(&mut model, 64, 64).expect("render failed");
    assert_eq!(filled.width(), 64);
}

#[test]
fn test_render_to_file_png() {
    let path = std::env::temp_dir().join(format!("voxelsprite_{}_frame.png", std::process::id()));
    let mut model = Image3d::default_cube(Some(6.0));
    render_to_file(&mut model, &path, 64, 48).expect("save failed");

    let loaded = image::open(&path).expect("saved PNG unreadable").to_rgba8();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.dimensions(), (64, 48));
}

#[test]
fn test_render_errors() {
    let mut model = Image3d::default_cube(None);
    assert!(matches!(
        render_to_image(&mut model, 0, 10),
        Err(RenderError::InvalidSize { .. })
    ));

    let path = std::env::temp_dir().join("voxelsprite_frame.bmp");
    assert!(matches!(
        render_to_file(&mut model, &path, 8, 8),
        Err(RenderError::UnsupportedFormat(_))
    ));
}
