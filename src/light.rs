//! Flat shading: face normals and directional light intensity.

use crate::colors::Color;
use crate::math::Vec3;

/// Unit normal of the triangle `v0, v1, v2`.
///
/// The normal is `(v2 - v0) x (v1 - v0)`, which points toward -Z for a
/// triangle whose vertices run counter-clockwise in the XY plane, i.e. toward
/// the default light. Returns `None` for degenerate (zero area) triangles.
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    (v2 - v0).cross(v1 - v0).try_normalize()
}

/// A directional light that illuminates the scene uniformly from a direction.
///
/// The light and the viewer look the same way, so a face lit with a
/// non-positive intensity also faces away from the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light shines along.
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::BACK,
        }
    }
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction is normalized; a zero vector falls back to the default.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.try_normalize().unwrap_or(Vec3::BACK),
        }
    }

    /// Intensity in [-1.0, 1.0]: the dot product of a unit normal with the
    /// light direction.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }

    /// Intensity of the triangle's face, or `None` when the triangle has no
    /// normal.
    pub fn face_intensity(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
        triangle_normal(v0, v1, v2).map(|n| self.intensity(n))
    }
}

/// How a face is shaded, decided once per face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shade {
    /// Facing the light; draw with this color.
    Lit(Color),
    /// Facing away from the light (intensity <= 0).
    BackFacing,
    /// Zero area; there is no normal to light.
    Degenerate,
}

/// Shade a face of `base` color lit by `light`.
pub fn shade_face(light: &DirectionalLight, base: Color, v0: Vec3, v1: Vec3, v2: Vec3) -> Shade {
    match light.face_intensity(v0, v1, v2) {
        None => Shade::Degenerate,
        Some(intensity) if intensity > 0.0 => Shade::Lit(base.modulate(intensity)),
        Some(_) => Shade::BackFacing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{RED, WHITE};
    use approx::assert_relative_eq;

    const ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    #[test]
    fn counter_clockwise_triangle_faces_the_light() {
        let n = triangle_normal(ORIGIN, X, Y).unwrap();
        assert_eq!(n, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_direct_illumination() {
        // Normal (0, 0, -1) along light (0, 0, -1).
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
        assert_eq!(shade_face(&light, WHITE, ORIGIN, X, Y), Shade::Lit(WHITE));
    }

    #[test]
    fn test_no_illumination() {
        // Normal (0, 0, 1) against light (0, 0, -1).
        let light = DirectionalLight::default();
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), -1.0);
        assert_eq!(triangle_normal(ORIGIN, Y, X), Some(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(shade_face(&light, WHITE, ORIGIN, Y, X), Shade::BackFacing);
    }

    #[test]
    fn test_edge_on_face_is_culled() {
        // Normal perpendicular to the light gives zero intensity.
        let light = DirectionalLight::default();
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(shade_face(&light, WHITE, ORIGIN, X, z), Shade::BackFacing);
    }

    #[test]
    fn test_angled_illumination() {
        // Light pointing straight down (-Y), normal at 45 degrees
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        let normal = Vec3::new(0.0, -1.0, -1.0).try_normalize().unwrap();
        // cos(45) ≈ 0.707
        let intensity = light.intensity(normal);
        assert!((intensity - 0.707).abs() < 0.01);
    }

    #[test]
    fn light_direction_is_normalized() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -5.0));
        assert_relative_eq!(light.direction.z, -1.0);
        assert_eq!(DirectionalLight::new(Vec3::ZERO), DirectionalLight::default());
    }

    #[test]
    fn degenerate_triangles_have_no_normal() {
        assert_eq!(triangle_normal(X, X, X), None);
        assert_eq!(triangle_normal(ORIGIN, X, X * 2.0), None);
        let light = DirectionalLight::default();
        assert_eq!(shade_face(&light, WHITE, ORIGIN, X, X * 2.0), Shade::Degenerate);
    }

    #[test]
    fn lit_color_scales_base() {
        let light = DirectionalLight::default();
        // Tilted face: normal (0, -1, -1)/sqrt(2), intensity ~0.707.
        let v2 = Vec3::new(0.0, 1.0, -1.0);
        match shade_face(&light, RED, ORIGIN, X, v2) {
            Shade::Lit(c) => assert_eq!(c, Color::rgb(180, 0, 0)),
            other => panic!("expected lit face, got {other:?}"),
        }
    }
}
