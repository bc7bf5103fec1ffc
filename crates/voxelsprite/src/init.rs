//! Logging setup for programs embedding voxelsprite.

/// Installs an `env_logger` backend for the `log` macros used throughout.
///
/// Honors `RUST_LOG` (e.g. `RUST_LOG=voxelsprite=debug` for per-frame
/// statistics). Safe to call more than once; later calls do nothing.
///
/// # Example
///
/// ```no_run
/// voxelsprite::init_logging();
/// let model = voxelsprite::Image3d::from_image("sprite.png", None);
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("voxelsprite logging initialized");
    }
}
