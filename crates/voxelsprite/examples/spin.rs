//! Spins a voxelized sprite and writes a few PNG snapshots.
//!
//! Usage: `cargo run --example spin -- [image] [voxel_size] [frames] [options.json]`
//!
//! Without an image (or with one that can't be read) the default cube is used.

use voxelsprite::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let voxel_size = args.next().map(|s| s.parse::<f32>()).transpose()?;
    let frames = args.next().map(|s| s.parse::<u32>()).transpose()?.unwrap_or(8);
    let options = match args.next() {
        Some(json) => RenderOptions::from_json_file(json)?,
        None => RenderOptions::default(),
    };

    let mut model = match path {
        Some(path) => Image3d::from_image_with_options(path, voxel_size, options),
        None => Image3d::default_cube_with_options(voxel_size, options),
    };
    model.set_rotation(0.35, 0.0, 0.0);
    model.set_auto_rotation(0.0, std::f32::consts::TAU, 0.0, true);

    let dt = 1.0 / frames.max(1) as f32;
    for frame in 0..frames {
        model.update(dt);
        let filename = format!("spin_{frame:03}.png");
        render_to_file(&mut model, &filename, 480, 360)?;

        let settings = model.settings();
        println!(
            "{filename}: {} voxels, {} faces, rotation y = {:.2}",
            settings.voxel_count, settings.rendered_faces, settings.rotation_y
        );
    }

    model.toggle_wireframe();
    render_to_file(&mut model, "spin_wireframe.png", 480, 360)?;

    if !model.settings().loaded_from_image {
        println!("note: image not loaded, rendered the default cube");
    }
    Ok(())
}
