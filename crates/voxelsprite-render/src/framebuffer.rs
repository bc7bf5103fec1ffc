//! Software RGBA render target.
//!
//! Flat-color scanline triangles and Bresenham lines with source-over alpha
//! blending. There is no depth buffer; callers submit back to front.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

use glam::{Vec2, Vec4};
use image::{Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{RenderError, RenderResult};

/// An owned RGBA8 image that implements [`Canvas`].
#[derive(Debug, Clone)]
pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    /// Creates a transparent black framebuffer.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Screen-space center, where a model is usually placed.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() as f32 * 0.5, self.height() as f32 * 0.5)
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Vec4) {
        let rgba = to_rgba8(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.image.get_pixel(x, y).0)
    }

    /// Borrow the underlying image.
    #[must_use]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the framebuffer and returns its image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Raw RGBA bytes, row by row from the top-left.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Vec4) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = blend(*dst, color);
    }

    fn fill_span(&mut self, y: i32, xa: f32, xb: f32, color: Vec4) {
        // Pixel centers at x + 0.5 inside [xa, xb).
        let start = (xa - 0.5).ceil().max(0.0) as i32;
        let end = ((xb - 0.5).ceil() as i32).min(self.width() as i32);
        for x in start..end {
            self.blend_pixel(i64::from(x), i64::from(y), color);
        }
    }

    /// Liang-Barsky clip of a segment to the image rectangle.
    ///
    /// Runs in `f64` so far off-screen endpoints keep sub-pixel accuracy.
    /// Returns integer pixel endpoints, or `None` if nothing is visible.
    fn clip_line(&self, from: Vec2, to: Vec2) -> Option<([i64; 2], [i64; 2])> {
        if !(from.is_finite() && to.is_finite()) {
            return None;
        }
        let (x0, y0) = (f64::from(from.x), f64::from(from.y));
        let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-dx, x0), (dx, w - x0), (-dy, y0), (dy, h - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let point = |t: f64| [(x0 + dx * t).floor() as i64, (y0 + dy * t).floor() as i64];
        Some((point(t0), point(t1)))
    }
}

impl Canvas for Framebuffer {
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Vec4) {
        if !points.iter().all(|p| p.is_finite()) {
            return;
        }
        let mut p = points;
        p.sort_by(|a, b| a.y.total_cmp(&b.y));
        let [top, mid, bottom] = p;

        let total_height = bottom.y - top.y;
        if total_height < f32::EPSILON {
            return;
        }

        let y_start = (top.y - 0.5).ceil().max(0.0) as i32;
        let y_end = ((bottom.y - 0.5).ceil() as i32).min(self.height() as i32);

        for y in y_start..y_end {
            let sample_y = y as f32 + 0.5;
            let long = top.x + (bottom.x - top.x) * (sample_y - top.y) / total_height;
            let short = if sample_y < mid.y {
                let h = mid.y - top.y;
                if h < f32::EPSILON {
                    mid.x
                } else {
                    top.x + (mid.x - top.x) * (sample_y - top.y) / h
                }
            } else {
                let h = bottom.y - mid.y;
                if h < f32::EPSILON {
                    mid.x
                } else {
                    mid.x + (bottom.x - mid.x) * (sample_y - mid.y) / h
                }
            };
            let (xa, xb) = if long < short {
                (long, short)
            } else {
                (short, long)
            };
            self.fill_span(y, xa, xb, color);
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        let Some(([mut x, mut y], [x1, y1])) = self.clip_line(from, to) else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Converts a [0, 1] RGBA color to 8-bit channels.
#[must_use]
pub fn to_rgba8(color: Vec4) -> Rgba<u8> {
    let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    Rgba([c.x as u8, c.y as u8, c.z as u8, c.w as u8])
}

/// Source-over blend of `src` onto `dst`.
fn blend(dst: Rgba<u8>, src: Vec4) -> Rgba<u8> {
    let a = src.w.clamp(0.0, 1.0);
    if a >= 1.0 {
        return to_rgba8(src);
    }
    let d = Vec4::new(
        f32::from(dst.0[0]),
        f32::from(dst.0[1]),
        f32::from(dst.0[2]),
        f32::from(dst.0[3]),
    ) / 255.0;
    let rgb = src.truncate() * a + d.truncate() * (1.0 - a);
    let out_a = a + d.w * (1.0 - a);
    to_rgba8(rgb.extend(out_a))
}
