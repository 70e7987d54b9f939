//! Object-to-world transform.
//!
//! Provides a [`Transform`] struct with a fluent API for the offset and
//! uniform scale that map a mesh into the normalized viewing volume.

use crate::math::Vec3;

/// Translate by `offset`, then scale uniformly by `scale`.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```
/// use flatras::Transform;
/// use flatras::math::Vec3;
///
/// let mut transform = Transform::new();
/// transform.set_offset(Vec3::new(1.0, 1.0, 0.0)).set_scale(0.9);
/// assert_eq!(transform.apply(Vec3::ZERO), Vec3::new(0.9, 0.9, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    offset: Vec3,
    scale: f32,
}

impl Default for Transform {
    /// Maps an OBJ model in [-1, 1] onto [0, 1.8], leaving a small border
    /// once projected.
    fn default() -> Self {
        Self {
            offset: Vec3::new(1.0, 1.0, 0.0),
            scale: 0.9,
        }
    }
}

impl Transform {
    /// Create the default transform (offset (1, 1, 0), scale 0.9).
    pub fn new() -> Self {
        Self::default()
    }

    /// The transform that leaves every point in place.
    pub fn identity() -> Self {
        Self {
            offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    // ============ Offset ============

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec3) -> &mut Self {
        self.offset = offset;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    // ============ Application ============

    /// Map an object-space point to world space.
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        (point + self.offset) * self.scale
    }
}
