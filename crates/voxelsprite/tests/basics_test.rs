//! Basic integration tests for voxelsprite.
//!
//! Fixture images are generated on the fly and written to the temp directory.

use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use proptest::prelude::*;
use voxelsprite::{
    math, CommandList, FaceDirection, Image3d, OcclusionIndex, RenderOptions, Vec2, Vec3, Vec4,
    Voxel,
};

fn write_fixture(name: &str, image: &RgbaImage) -> PathBuf {
    let path = std::env::temp_dir().join(format!("voxelsprite_{}_{name}.png", std::process::id()));
    image.save(&path).expect("failed to write fixture");
    path
}

fn opaque(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
}

fn visible_face_count(voxels: &[Voxel]) -> usize {
    let index = OcclusionIndex::build(voxels);
    voxels.iter().map(|v| index.visible_faces(v).len()).sum()
}

#[test]
fn test_two_by_two_sheet() {
    let path = write_fixture("two_by_two", &opaque(2, 2));
    let model = Image3d::from_image(&path, Some(10.0));
    let _ = std::fs::remove_file(&path);

    assert!(model.settings().loaded_from_image);
    assert_eq!(model.voxels().len(), 4);

    // Two horizontal and two vertical contacts, each hiding one side per voxel.
    let shared_faces = 4;
    assert_eq!(
        visible_face_count(model.voxels()),
        4 * 12 - 2 * (shared_faces * 2)
    );
}

#[test]
fn test_nonexistent_path_falls_back() {
    let model = Image3d::from_image("/definitely/missing/sprite.png", None);
    let settings = model.settings();
    assert_eq!(settings.voxel_count, 27);
    assert!(!settings.loaded_from_image);
}

#[test]
fn test_undecodable_file_falls_back() {
    let path = std::env::temp_dir().join(format!("voxelsprite_{}_garbage.png", std::process::id()));
    std::fs::write(&path, b"this is not a png").unwrap();
    let model = Image3d::from_image(&path, None);
    let _ = std::fs::remove_file(&path);
    assert!(!model.settings().loaded_from_image);
    assert_eq!(model.voxels().len(), 27);
}

#[test]
fn test_transparency_threshold_from_file() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
    img.put_pixel(2, 0, Rgba([255, 255, 255, 128]));
    let path = write_fixture("threshold", &img);
    let model = Image3d::from_image(&path, Some(4.0));
    let _ = std::fs::remove_file(&path);

    assert_eq!(model.voxels().len(), 2);
    assert_eq!(model.voxel_size(), 4.0);
    // Gap in the middle: nothing is sealed.
    assert_eq!(visible_face_count(model.voxels()), 24);
}

#[test]
fn test_reload_keeps_view() {
    let mut model = Image3d::default_cube(None);
    model.set_rotation(0.5, 1.0, 1.5);
    model.set_zoom(2.0);
    model.toggle_wireframe();

    let path = write_fixture("reload", &opaque(3, 2));
    assert!(model.reload(&path));
    let _ = std::fs::remove_file(&path);

    let settings = model.settings();
    assert!(settings.loaded_from_image);
    assert_eq!(settings.voxel_count, 6);
    assert_eq!(settings.zoom, 2.0);
    assert!(settings.wireframe);
    assert_eq!(settings.rotation_z, 1.5);

    assert!(!model.reload("/definitely/missing/again.png"));
    assert_eq!(model.settings().voxel_count, 27);
}

#[test]
fn test_settings_snapshot() {
    let mut model = Image3d::default_cube(None);
    model.set_position(100.0, 100.0);
    model.set_auto_rotation(0.1, 0.2, 0.3, true);
    model.toggle_shading();
    model.update(1.0);

    let mut canvas = CommandList::new();
    model.draw(&mut canvas);

    let settings = model.settings();
    assert!(settings.auto_rotate);
    assert!(!settings.shading);
    assert!(!settings.wireframe);
    assert_eq!(settings.voxel_count, 27);
    assert_eq!(settings.rendered_faces, canvas.len());
    assert!((settings.rotation_x - 0.1).abs() < 1e-6);
    assert!((settings.rotation_z - 0.3).abs() < 1e-6);
}

#[test]
fn test_camera_plane_vertex_is_not_projected() {
    let distance = 400.0;
    let center = Vec2::new(320.0, 240.0);
    assert!(math::project(Vec3::new(5.0, 5.0, -distance), center, distance).is_none());
}

#[test]
fn test_model_inside_camera_draws_nothing_infinite() {
    // Zooming far in pushes most of the cube behind the camera.
    let mut model = Image3d::default_cube(None);
    model.set_position(320.0, 240.0);
    model.set_zoom(100.0);
    let faces = model.screen_faces();
    for face in &faces {
        assert!(face.points.iter().all(|p| p.is_finite()));
        assert!(face.depth > 0.0);
    }
}

#[test]
fn test_full_turns_keep_front_facing_sides_only() {
    let voxels = vec![Voxel::new(Vec3::ZERO, 10.0, Vec4::ONE)];
    let mut model = Image3d::from_voxels(voxels, RenderOptions::default());
    model.set_rotation(
        std::f32::consts::TAU,
        -2.0 * std::f32::consts::TAU,
        std::f32::consts::TAU,
    );
    let faces = model.screen_faces();
    let front = faces
        .iter()
        .filter(|f| f.shade == FaceDirection::NegZ.shade())
        .count();
    let back = faces
        .iter()
        .filter(|f| f.shade == FaceDirection::PosZ.shade())
        .count();
    assert_eq!(front, 2);
    assert_eq!(back, 0);
}

proptest! {
    #[test]
    fn prop_screen_faces_sorted(rx in -7.0f32..7.0, ry in -7.0f32..7.0, zoom in 0.1f32..5.0) {
        let mut model = Image3d::default_cube(None);
        model.set_position(200.0, 200.0);
        model.set_rotation(rx, ry, 0.0);
        model.set_zoom(zoom);
        let faces = model.screen_faces();
        for pair in faces.windows(2) {
            prop_assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn prop_zoom_out_floor(steps in 1usize..200, delta in 0.0f32..1000.0) {
        let mut model = Image3d::default_cube(None);
        for _ in 0..steps {
            model.zoom_out();
        }
        model.zoom_by(-delta);
        prop_assert!(model.settings().zoom >= 0.1);
    }

    #[test]
    fn prop_rotation_round_trip_restores_vertices(angle in -10.0f32..10.0) {
        let voxel = Voxel::new(Vec3::new(10.0, -20.0, 0.0), 10.0, Vec4::ONE);
        let base = voxel.transformed_vertices(1.5, Vec3::ZERO, 400.0);
        let there = Vec3::new(angle, 0.0, 0.0);
        let rotated = voxel.transformed_vertices(1.5, there, 400.0);
        let back: Vec<Vec3> = rotated
            .iter()
            .map(|v| math::rotate_x(*v - Vec3::Z * 400.0, -angle) + Vec3::Z * 400.0)
            .collect();
        for (a, b) in base.iter().zip(&back) {
            prop_assert!((*a - *b).length() < 1e-2);
        }
    }
}
