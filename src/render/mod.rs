//! Drawing primitives: the canvas, lines, containment and triangle fills.

mod canvas;
mod line;
mod polygon;
mod rasterizer;

pub use canvas::Canvas;
pub use line::{draw_line, LinePoints};
pub use polygon::point_in_polygon;
pub use rasterizer::{FilledRasterizer, Rasterizer, RenderStrategy, WireframeRasterizer};
