//! An offline, flat-shaded triangle rasterizer.
//!
//! Meshes are projected orthographically onto a [`Canvas`], each face is lit
//! with a single intensity from a directional light, faces turned away from
//! the light are culled, and the rest are drawn either as outlines or as
//! filled triangles. Faces are drawn in mesh order with no depth buffer.
//!
//! # Quick Start
//!
//! ```no_run
//! use flatras::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mesh = Mesh::from_obj("face.obj")?;
//! let mut canvas = Canvas::new(500, 500);
//! render(&mesh, &mut canvas, colors::WHITE, RenderStrategy::Filled, &RenderSettings::default())?;
//! finish(canvas, &mut ImageFile::new("output.tga"))?;
//! # Ok(())
//! # }
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod engine;
pub mod light;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod output;
pub mod projection;
pub mod transform;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use engine::{render, RenderSettings, RenderStats};
pub use mesh::{Face, Mesh, MeshError, MeshSource};
pub use output::{finish, ImageFile, ImageSink};
pub use projection::Projection;
pub use render::{
    draw_line, point_in_polygon, Canvas, FilledRasterizer, LinePoints, Rasterizer,
    RenderStrategy, WireframeRasterizer,
};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use flatras::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colors::{self, Color};
    pub use crate::engine::{render, RenderSettings, RenderStats};
    pub use crate::light::DirectionalLight;
    pub use crate::math::{Vec2i, Vec3};
    pub use crate::mesh::{Face, Mesh, MeshError, MeshSource};
    pub use crate::output::{finish, ImageFile, ImageSink};
    pub use crate::render::{Canvas, Rasterizer, RenderStrategy};
    pub use crate::transform::Transform;
}
