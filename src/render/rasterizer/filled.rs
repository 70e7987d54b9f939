//! Bounding box triangle fill.
//!
//! Every pixel in the triangle's integer bounding box is tested with
//! [`point_in_polygon`] and painted on a hit. The work is proportional to the
//! box area rather than the triangle area, so long thin diagonal triangles
//! waste most of their tests.

use super::Rasterizer;
use crate::colors::Color;
use crate::math::Vec2i;
use crate::render::canvas::Canvas;
use crate::render::polygon::point_in_polygon;

/// Fills a triangle by scanning its bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilledRasterizer;

impl Rasterizer for FilledRasterizer {
    fn render_triangle(&self, p0: Vec2i, p1: Vec2i, p2: Vec2i, canvas: &mut Canvas, color: Color) {
        let triangle = [p0, p1, p2];

        let min_x = p0.x.min(p1.x).min(p2.x);
        let max_x = p0.x.max(p1.x).max(p2.x);
        let min_y = p0.y.min(p1.y).min(p2.y);
        let max_y = p0.y.max(p1.y).max(p2.y);

        // Clip to canvas bounds; pixels outside would be dropped anyway.
        let min_x = min_x.max(0);
        let max_x = max_x.min(canvas.width() as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(canvas.height() as i32 - 1);

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                if point_in_polygon(Vec2i::new(x, y), &triangle) {
                    canvas.set(x, y, color);
                }
            }
        }
    }
}
