//! Minimal vector types used by the pipeline.
//!
//! [`Vec3`] carries object and world space positions, [`Vec2i`] carries
//! integer pixel coordinates after projection.

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2i;
pub use vec3::Vec3;
