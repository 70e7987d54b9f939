//! Triangle fill strategies.
//!
//! Both strategies share the [`Rasterizer`] contract and hold no state, so the
//! renderer can pick one per call through [`RenderStrategy`].
//!
//! Available strategies:
//! - [`WireframeRasterizer`]: outlines the three edges with lines
//! - [`FilledRasterizer`]: bounding box scan with a point-in-polygon test

mod filled;
mod wireframe;

pub use filled::FilledRasterizer;
pub use wireframe::WireframeRasterizer;

use super::canvas::Canvas;
use crate::colors::Color;
use crate::math::Vec2i;

/// Trait for triangle rasterization strategies.
///
/// Implementors decide which pixels of the canvas a screen-space triangle
/// covers and paint them with a single color.
pub trait Rasterizer {
    /// Draw the triangle `p0, p1, p2` into `canvas`.
    ///
    /// Degenerate triangles must not panic; they draw nothing or a thin line.
    fn render_triangle(&self, p0: Vec2i, p1: Vec2i, p2: Vec2i, canvas: &mut Canvas, color: Color);
}

/// Fill strategy applied to every face of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Only the triangle edges.
    Wireframe,
    /// Every pixel inside the triangle.
    #[default]
    Filled,
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderStrategy::Wireframe => write!(f, "wireframe"),
            RenderStrategy::Filled => write!(f, "filled"),
        }
    }
}

impl Rasterizer for RenderStrategy {
    #[inline]
    fn render_triangle(&self, p0: Vec2i, p1: Vec2i, p2: Vec2i, canvas: &mut Canvas, color: Color) {
        match self {
            RenderStrategy::Wireframe => WireframeRasterizer.render_triangle(p0, p1, p2, canvas, color),
            RenderStrategy::Filled => FilledRasterizer.render_triangle(p0, p1, p2, canvas, color),
        }
    }
}
