//! Triangle outlines.

use super::Rasterizer;
use crate::colors::Color;
use crate::math::Vec2i;
use crate::render::canvas::Canvas;
use crate::render::line::draw_line;

/// Draws the three edges `p0-p1`, `p1-p2` and `p2-p0` as lines.
///
/// Cost is proportional to the triangle's perimeter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireframeRasterizer;

impl Rasterizer for WireframeRasterizer {
    fn render_triangle(&self, p0: Vec2i, p1: Vec2i, p2: Vec2i, canvas: &mut Canvas, color: Color) {
        draw_line(canvas, p0, p1, color);
        draw_line(canvas, p1, p2, color);
        draw_line(canvas, p2, p0, color);
    }
}
