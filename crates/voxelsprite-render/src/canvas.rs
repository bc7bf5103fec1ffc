//! Drawing surface seam between the pipeline and the host.

use glam::{Vec2, Vec4};

/// Something triangles and lines can be painted onto.
///
/// Calls arrive in back-to-front order; implementations paint over whatever
/// is already there and must not depth test. Colors are RGBA in [0, 1].
pub trait Canvas {
    /// Fills the triangle with a flat color.
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Vec4);

    /// Draws a one-pixel line.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Vec4) {
        (**self).fill_triangle(points, color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        (**self).draw_line(from, to, color);
    }
}

/// A single recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled triangle.
    Triangle {
        /// Screen-space corners.
        points: [Vec2; 3],
        /// Fill color.
        color: Vec4,
    },
    /// An outline segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Vec4,
    },
}

/// Canvas that records calls instead of painting.
///
/// Useful for hosts that forward draw calls to their own graphics API.
#[derive(Debug, Default, Clone)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in submission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for CommandList {
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Vec4) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}
