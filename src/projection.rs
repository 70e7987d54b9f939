//! Orthographic projection onto the canvas.
//!
//! World space x and y in [0, 2] cover the canvas from left to right and from
//! row 0 to the last row; z is dropped.

use crate::math::{Vec2i, Vec3};

/// Canvas-sized orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    half_width: f32,
    half_height: f32,
}

impl Projection {
    /// Creates a projection for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            half_width: width as f32 / 2.0,
            half_height: height as f32 / 2.0,
        }
    }

    /// Project a world point to its pixel, truncating toward zero.
    #[inline]
    pub fn project(&self, point: Vec3) -> Vec2i {
        Vec2i::new(
            (point.x * self.half_width) as i32,
            (point.y * self.half_height) as i32,
        )
    }
}
