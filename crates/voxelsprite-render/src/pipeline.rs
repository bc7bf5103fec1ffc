//! Per-frame geometry pipeline.
//!
//! Runs once per draw: occlusion index, vertex transform, camera-plane
//! rejection, backface culling, projection, depth sort and rasterization.
//! Nothing survives between frames except the caller's [`ViewState`].

use glam::{Vec2, Vec3, Vec4};

use voxelsprite_core::math::{calculate_normal, project};
use voxelsprite_core::{Face, OcclusionIndex, ViewState, Voxel};

use crate::canvas::Canvas;

/// Outline color used in wireframe mode.
pub const WIREFRAME_COLOR: Vec4 = Vec4::ONE;

/// A projected triangle waiting to be composited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFace {
    /// Screen-space corners.
    pub points: [Vec2; 3],
    /// Source voxel color.
    pub color: Vec4,
    /// Shade multiplier (1.0 when shading is off).
    pub shade: f32,
    /// Mean camera-space Z of the three corners.
    pub depth: f32,
}

impl ScreenFace {
    /// Color after shading. Alpha is left as is.
    #[must_use]
    pub fn shaded_color(&self) -> Vec4 {
        (self.color.truncate() * self.shade).extend(self.color.w)
    }
}

/// Counters for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Voxels in the model.
    pub voxels: usize,
    /// Voxels with every side sealed, skipped before transforming.
    pub hidden_voxels: usize,
    /// Triangles that passed the occlusion filter.
    pub visible_faces: usize,
    /// Triangles with a corner at or behind the camera.
    pub behind_camera: usize,
    /// Triangles facing away from the camera.
    pub backfaces: usize,
    /// Triangles whose projection failed.
    pub unprojectable: usize,
    /// Triangles handed to the canvas.
    pub rendered_faces: usize,
}

/// Transforms, culls and projects every visible triangle of `voxels`.
///
/// The returned faces are not sorted; see [`sort_back_to_front`].
#[must_use]
pub fn collect_faces(voxels: &[Voxel], view: &ViewState) -> (Vec<ScreenFace>, FrameStats) {
    let index = OcclusionIndex::build(voxels);
    let mut stats = FrameStats {
        voxels: voxels.len(),
        ..FrameStats::default()
    };
    let mut faces = Vec::new();

    let zoom = view.zoom();
    let rotation = view.rotation();
    let distance = view.camera_distance();
    let center = view.screen_center();

    for voxel in voxels {
        let visible = index.visible_faces(voxel);
        if visible.is_empty() {
            stats.hidden_voxels += 1;
            continue;
        }
        stats.visible_faces += visible.len();

        let transformed = voxel.transformed_vertices(zoom, rotation, distance);
        for face in visible.iter() {
            match screen_face(face, &transformed, voxel.color(), view.shading(), center, distance) {
                Ok(screen) => faces.push(screen),
                Err(Rejection::BehindCamera) => stats.behind_camera += 1,
                Err(Rejection::Backface) => stats.backfaces += 1,
                Err(Rejection::Unprojectable) => stats.unprojectable += 1,
            }
        }
    }

    stats.rendered_faces = faces.len();
    (faces, stats)
}

/// Why a triangle was dropped for this frame.
enum Rejection {
    BehindCamera,
    Backface,
    Unprojectable,
}

fn screen_face(
    face: &Face,
    transformed: &[Vec3; 8],
    color: Vec4,
    shading: bool,
    center: Vec2,
    distance: f32,
) -> Result<ScreenFace, Rejection> {
    let corners = face.indices.map(|i| transformed[i]);

    // Partially visible triangles are dropped, not clipped.
    if !corners.iter().all(|v| v.z > 0.0) {
        return Err(Rejection::BehindCamera);
    }

    let normal = calculate_normal(corners[0], corners[1], corners[2]);
    if normal.z < 0.0 {
        return Err(Rejection::Backface);
    }

    let mut points = [Vec2::ZERO; 3];
    for (point, corner) in points.iter_mut().zip(corners) {
        *point = project(corner, center, distance).ok_or(Rejection::Unprojectable)?;
    }

    Ok(ScreenFace {
        points,
        color,
        shade: if shading { face.shade } else { 1.0 },
        depth: (corners[0].z + corners[1].z + corners[2].z) / 3.0,
    })
}

/// Orders faces farthest first. Equal depths keep no particular order.
pub fn sort_back_to_front(faces: &mut [ScreenFace]) {
    faces.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Paints `faces` in slice order.
pub fn rasterize<C: Canvas + ?Sized>(faces: &[ScreenFace], wireframe: bool, canvas: &mut C) {
    for face in faces {
        let [a, b, c] = face.points;
        if wireframe {
            canvas.draw_line(a, b, WIREFRAME_COLOR);
            canvas.draw_line(b, c, WIREFRAME_COLOR);
            canvas.draw_line(c, a, WIREFRAME_COLOR);
        } else {
            canvas.fill_triangle(face.points, face.shaded_color());
        }
    }
}

/// Builds, sorts and paints one frame.
pub fn render_frame<C: Canvas + ?Sized>(
    voxels: &[Voxel],
    view: &ViewState,
    canvas: &mut C,
) -> FrameStats {
    let (mut faces, stats) = collect_faces(voxels, view);
    sort_back_to_front(&mut faces);
    rasterize(&faces, view.wireframe(), canvas);

    log::debug!(
        "frame: {} voxels, {} visible faces, {} rendered",
        stats.voxels,
        stats.visible_faces,
        stats.rendered_faces
    );
    let dropped = stats.behind_camera + stats.unprojectable;
    if dropped > 0 {
        log::trace!("frame: dropped {dropped} triangles at the camera plane");
    }
    stats
}
