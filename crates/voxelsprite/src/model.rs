//! The renderable voxel model.

use std::path::{Path, PathBuf};

use voxelsprite_core::{
    validate_voxel_size, RenderOptions, Vec2, Vec3, ViewState, Voxel, DEFAULT_VOXEL_SIZE,
};
use voxelsprite_render::{
    collect_faces, render_frame, sort_back_to_front, Canvas, FrameStats, ScreenFace,
};

use crate::loader::{default_cube, load_voxels};
use crate::settings::Settings;

/// A pixel-art image extruded into voxels, plus the view it is drawn with.
///
/// Hosts call [`Image3d::update`] then [`Image3d::draw`] once per frame and
/// route input to the setters in between.
#[derive(Debug, Clone)]
pub struct Image3d {
    voxels: Vec<Voxel>,
    voxel_size: f32,
    options: RenderOptions,
    view: ViewState,
    source: Option<PathBuf>,
    loaded_from_image: bool,
    last_frame: FrameStats,
}

impl Image3d {
    /// Builds a model from an image file.
    ///
    /// `voxel_size` defaults to [`voxelsprite_core::DEFAULT_VOXEL_SIZE`]. If the
    /// image cannot be loaded, the default cube is used instead and
    /// [`Settings::loaded_from_image`] reports `false`.
    pub fn from_image(path: impl AsRef<Path>, voxel_size: Option<f32>) -> Self {
        Self::from_image_with_options(path, voxel_size, RenderOptions::default())
    }

    /// Like [`Image3d::from_image`] with explicit options.
    ///
    /// `voxel_size`, when given, overrides `options.voxel_size`.
    pub fn from_image_with_options(
        path: impl AsRef<Path>,
        voxel_size: Option<f32>,
        options: RenderOptions,
    ) -> Self {
        let mut model = Self::empty(voxel_size, options);
        model.reload(path);
        model
    }

    /// Builds the procedural 3x3x3 cube.
    pub fn default_cube(voxel_size: Option<f32>) -> Self {
        Self::default_cube_with_options(voxel_size, RenderOptions::default())
    }

    /// Like [`Image3d::default_cube`] with explicit options.
    ///
    /// An unusable `voxel_size` is replaced by `options.voxel_size`.
    pub fn default_cube_with_options(voxel_size: Option<f32>, options: RenderOptions) -> Self {
        let mut model = Self::empty(voxel_size, options);
        model.voxels = default_cube(model.voxel_size);
        log::info!("created default cube with {} voxels", model.voxels.len());
        model
    }

    /// Builds a model from voxels the caller already has.
    ///
    /// Voxels with an unusable size are dropped with a warning.
    pub fn from_voxels(voxels: Vec<Voxel>, options: RenderOptions) -> Self {
        let mut model = Self::empty(None, options);
        let total = voxels.len();
        model.voxels = voxels
            .into_iter()
            .filter(|voxel| validate_voxel_size(voxel.size()).is_ok())
            .collect();
        if model.voxels.len() < total {
            log::warn!("dropped {} voxels with an invalid size", total - model.voxels.len());
        }
        if let Some(first) = model.voxels.first() {
            model.voxel_size = first.size();
        }
        model
    }

    fn empty(voxel_size: Option<f32>, options: RenderOptions) -> Self {
        let fallback = validate_voxel_size(options.voxel_size).unwrap_or(DEFAULT_VOXEL_SIZE);
        let voxel_size = match voxel_size.map(validate_voxel_size) {
            Some(Ok(size)) => size,
            Some(Err(err)) => {
                log::warn!("{err}; using {fallback}");
                fallback
            }
            None => fallback,
        };
        Self {
            voxels: Vec::new(),
            voxel_size,
            view: ViewState::new(&options),
            options,
            source: None,
            loaded_from_image: false,
            last_frame: FrameStats::default(),
        }
    }

    /// Replaces the voxels with those of another image, keeping the view.
    ///
    /// Falls back to the default cube on failure. Returns whether the image
    /// was loaded.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match load_voxels(path, self.voxel_size, self.options.alpha_threshold) {
            Ok(voxels) => {
                log::info!("loaded {} voxels from {}", voxels.len(), path.display());
                self.voxels = voxels;
                self.source = Some(path.to_path_buf());
                self.loaded_from_image = true;
            }
            Err(err) => {
                log::warn!("{err}; falling back to default cube");
                self.voxels = default_cube(self.voxel_size);
                self.source = None;
                self.loaded_from_image = false;
            }
        }
        self.loaded_from_image
    }

    /// Advances auto-rotation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.view.advance(dt);
    }

    /// Draws one frame onto `canvas`, back to front.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.last_frame = render_frame(&self.voxels, &self.view, canvas);
    }

    /// The sorted triangles [`Image3d::draw`] would paint, without painting.
    #[must_use]
    pub fn screen_faces(&self) -> Vec<ScreenFace> {
        let (mut faces, _) = collect_faces(&self.voxels, &self.view);
        sort_back_to_front(&mut faces);
        faces
    }

    /// Snapshot of the view and diagnostics.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let rotation = self.view.rotation();
        Settings {
            zoom: self.view.zoom(),
            auto_rotate: self.view.auto_rotate(),
            wireframe: self.view.wireframe(),
            shading: self.view.shading(),
            rotation_x: rotation.x,
            rotation_y: rotation.y,
            rotation_z: rotation.z,
            voxel_count: self.voxels.len(),
            rendered_faces: self.last_frame.rendered_faces,
            loaded_from_image: self.loaded_from_image,
        }
    }

    /// Counters from the last draw.
    #[must_use]
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// The voxels being drawn.
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Voxel edge length.
    #[must_use]
    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    /// Image the voxels came from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Sets where the model origin lands on screen.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.view.set_screen_center(Vec2::new(x, y));
    }

    /// Tilts the top toward the viewer by one rotation step.
    pub fn rotate_up(&mut self) {
        self.view.rotate_by(Vec3::X * -self.options.rotation_step);
    }

    /// Tilts the top away from the viewer by one rotation step.
    pub fn rotate_down(&mut self) {
        self.view.rotate_by(Vec3::X * self.options.rotation_step);
    }

    /// Turns around the vertical axis by one step.
    pub fn rotate_left(&mut self) {
        self.view.rotate_by(Vec3::Y * -self.options.rotation_step);
    }

    /// Turns around the vertical axis by one step the other way.
    pub fn rotate_right(&mut self) {
        self.view.rotate_by(Vec3::Y * self.options.rotation_step);
    }

    /// Rolls around the view axis by one step.
    pub fn roll_left(&mut self) {
        self.view.rotate_by(Vec3::Z * self.options.rotation_step);
    }

    /// Rolls around the view axis by one step the other way.
    pub fn roll_right(&mut self) {
        self.view.rotate_by(Vec3::Z * -self.options.rotation_step);
    }

    /// Sets the X rotation angle (radians).
    pub fn set_rotation_x(&mut self, angle: f32) {
        self.view.set_rotation_x(angle);
    }

    /// Sets the Y rotation angle (radians).
    pub fn set_rotation_y(&mut self, angle: f32) {
        self.view.set_rotation_y(angle);
    }

    /// Sets the Z rotation angle (radians).
    pub fn set_rotation_z(&mut self, angle: f32) {
        self.view.set_rotation_z(angle);
    }

    /// Sets all three rotation angles (radians).
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.view.set_rotation(Vec3::new(x, y, z));
    }

    /// Zeroes all rotation angles.
    pub fn reset_rotation(&mut self) {
        self.view.reset_rotation();
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.view.zoom_by(self.options.zoom_step);
    }

    /// Zooms out by one step, never below the floor.
    pub fn zoom_out(&mut self) {
        self.view.zoom_by(-self.options.zoom_step);
    }

    /// Adds `delta` to the zoom factor, never below the floor.
    pub fn zoom_by(&mut self, delta: f32) {
        self.view.zoom_by(delta);
    }

    /// Sets the zoom factor, never below the floor.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.view.set_zoom(zoom);
    }

    /// Sets auto-rotation velocities (radians / second) and enables or
    /// disables it.
    pub fn set_auto_rotation(&mut self, x: f32, y: f32, z: f32, enabled: bool) {
        self.view.set_auto_rotation(Vec3::new(x, y, z), enabled);
    }

    /// Flips auto-rotation.
    pub fn toggle_auto_rotate(&mut self) {
        self.view.toggle_auto_rotate();
    }

    /// Flips wireframe mode.
    pub fn toggle_wireframe(&mut self) {
        self.view.toggle_wireframe();
    }

    /// Flips per-face shading.
    pub fn toggle_shading(&mut self) {
        self.view.toggle_shading();
    }
}
