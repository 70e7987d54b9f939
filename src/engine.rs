//! Per-face render loop.
//!
//! [`render`] is the entry point: it walks the mesh faces in order,
//! transforms and projects their vertices, shades and culls each face, and
//! hands the survivors to the chosen [`RenderStrategy`]. There is no depth
//! buffer; a face drawn later overwrites any earlier face it overlaps.

use crate::colors::Color;
use crate::light::{shade_face, DirectionalLight, Shade};
use crate::math::Vec3;
use crate::mesh::{MeshError, MeshSource};
use crate::projection::Projection;
use crate::render::{Canvas, Rasterizer, RenderStrategy};
use crate::transform::Transform;

/// Scene settings shared by every face of a render call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSettings {
    pub light: DirectionalLight,
    pub transform: Transform,
}

impl RenderSettings {
    pub fn new(light_direction: Vec3, transform: Transform) -> Self {
        Self {
            light: DirectionalLight::new(light_direction),
            transform,
        }
    }
}

/// Face counts from one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces handed to the rasterizer.
    pub drawn: usize,
    /// Faces pointing away from the light.
    pub culled: usize,
    /// Zero-area faces.
    pub degenerate: usize,
}

/// Draw every lit face of `mesh` into `canvas`.
///
/// The mesh is validated before anything is drawn, so on error the canvas is
/// left untouched.
pub fn render<M: MeshSource + ?Sized>(
    mesh: &M,
    canvas: &mut Canvas,
    base_color: Color,
    strategy: RenderStrategy,
    settings: &RenderSettings,
) -> Result<RenderStats, MeshError> {
    mesh.validate()?;

    let projection = Projection::new(canvas.width(), canvas.height());
    let vertex_count = mesh.vertex_count();
    let mut stats = RenderStats::default();

    for i in 0..mesh.face_count() {
        let face = mesh.face(i).ok_or(MeshError::MissingFace { face: i })?;

        let mut world = [Vec3::ZERO; 3];
        for (slot, index) in world.iter_mut().zip(face.indices()) {
            let vertex = mesh
                .vertex(index as usize)
                .ok_or(MeshError::FaceIndexOutOfRange {
                    face: i,
                    index,
                    vertex_count,
                })?;
            *slot = settings.transform.apply(vertex);
        }

        match shade_face(&settings.light, base_color, world[0], world[1], world[2]) {
            Shade::Lit(color) => {
                let [p0, p1, p2] = world.map(|p| projection.project(p));
                strategy.render_triangle(p0, p1, p2, canvas, color);
                stats.drawn += 1;
            }
            Shade::BackFacing => {
                log::trace!("face {i} faces away from the light");
                stats.culled += 1;
            }
            Shade::Degenerate => {
                log::trace!("face {i} is degenerate");
                stats.degenerate += 1;
            }
        }
    }

    log::info!(
        "rendered {} faces ({}): {} drawn, {} culled, {} degenerate",
        mesh.face_count(),
        strategy,
        stats.drawn,
        stats.culled,
        stats.degenerate
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::mesh::{Face, Mesh};

    /// Two triangles of a square spanning [-1, 1] in x and y, both facing the
    /// light.
    fn square() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![Face::new(0, 1, 2), Face::new(0, 2, 3)],
        )
    }

    fn single(v0: Vec3, v1: Vec3, v2: Vec3) -> Mesh {
        Mesh::new(vec![v0, v1, v2], vec![Face::new(0, 1, 2)])
    }

    fn identity_settings() -> RenderSettings {
        RenderSettings::new(Vec3::new(0.0, 0.0, -1.0), Transform::identity())
    }

    #[test]
    fn facing_triangle_is_drawn_in_both_strategies() {
        // Normal (0, 0, -1) along light (0, 0, -1).
        let mesh = single(
            Vec3::new(0.2, 0.2, 0.0),
            Vec3::new(1.0, 0.2, 0.0),
            Vec3::new(0.2, 1.0, 0.0),
        );
        for strategy in [RenderStrategy::Filled, RenderStrategy::Wireframe] {
            let mut canvas = Canvas::new(100, 100);
            let stats = render(&mesh, &mut canvas, WHITE, strategy, &identity_settings()).unwrap();
            assert_eq!(stats.drawn, 1);
            assert!(canvas.painted_count() > 0, "{strategy}");
        }
    }

    #[test]
    fn back_facing_triangle_paints_nothing() {
        // Normal (0, 0, 1) against light (0, 0, -1).
        let mesh = single(
            Vec3::new(0.2, 0.2, 0.0),
            Vec3::new(0.2, 1.0, 0.0),
            Vec3::new(1.0, 0.2, 0.0),
        );
        for strategy in [RenderStrategy::Filled, RenderStrategy::Wireframe] {
            let mut canvas = Canvas::new(100, 100);
            let stats = render(&mesh, &mut canvas, WHITE, strategy, &identity_settings()).unwrap();
            assert_eq!(stats, RenderStats { drawn: 0, culled: 1, degenerate: 0 });
            assert_eq!(canvas.painted_count(), 0);
        }
    }

    #[test]
    fn degenerate_face_is_skipped() {
        let p = Vec3::new(0.5, 0.5, 0.0);
        let mesh = single(p, p, Vec3::new(1.0, 1.0, 0.0));
        let mut canvas = Canvas::new(50, 50);
        let stats = render(
            &mesh,
            &mut canvas,
            WHITE,
            RenderStrategy::Filled,
            &identity_settings(),
        )
        .unwrap();
        assert_eq!(stats.degenerate, 1);
        assert_eq!(canvas.painted_count(), 0);
    }

    #[test]
    fn default_transform_centers_the_model() {
        let mut canvas = Canvas::new(100, 100);
        let stats = render(
            &square(),
            &mut canvas,
            WHITE,
            RenderStrategy::Filled,
            &RenderSettings::default(),
        )
        .unwrap();
        assert_eq!(stats.drawn, 2);
        // Square maps to roughly [0, 90] on both axes.
        assert_eq!(canvas.get(60, 30), Some(WHITE));
        assert_eq!(canvas.get(30, 60), Some(WHITE));
        assert_eq!(canvas.get(95, 95), Some(Color::default()));
    }

    #[test]
    fn later_faces_overwrite_earlier_ones() {
        let a = Vec3::new(0.1, 0.1, 0.0);
        let b = Vec3::new(1.5, 0.1, 0.0);
        let c = Vec3::new(0.1, 1.5, 0.0);
        // Same triangle twice, the second one dimmer because it is tilted.
        let tilted = Vec3::new(0.1, 1.5, -1.4);
        let mesh = Mesh::new(vec![a, b, c, tilted], vec![Face::new(0, 1, 2), Face::new(0, 1, 3)]);
        let mut canvas = Canvas::new(100, 100);
        render(
            &mesh,
            &mut canvas,
            WHITE,
            RenderStrategy::Filled,
            &identity_settings(),
        )
        .unwrap();
        let tilted_last = canvas.get(20, 20).unwrap();

        // Reversed order: the brighter face wins.
        let mesh = Mesh::new(vec![a, b, c, tilted], vec![Face::new(0, 1, 3), Face::new(0, 1, 2)]);
        let mut canvas = Canvas::new(100, 100);
        render(
            &mesh,
            &mut canvas,
            WHITE,
            RenderStrategy::Filled,
            &identity_settings(),
        )
        .unwrap();
        let flat_last = canvas.get(20, 20).unwrap();
        assert!(tilted_last.r > 0, "got {tilted_last:?}");
        assert!(tilted_last.r < flat_last.r, "{tilted_last:?} vs {flat_last:?}");
    }

    #[test]
    fn far_off_canvas_vertex_is_clipped() {
        // The first vertex projects far past i32::MIN.
        let mesh = single(
            Vec3::new(-1e10, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let mut canvas = Canvas::new(100, 100);
        let stats = render(&mesh, &mut canvas, WHITE, RenderStrategy::Filled, &identity_settings())
            .unwrap();
        assert_eq!(stats.drawn, 1);
        assert_eq!(canvas.get(10, 10), Some(WHITE));
        assert_eq!(canvas.get(60, 10), Some(Color::default()));

        let mut canvas = Canvas::new(100, 100);
        let stats = render(
            &mesh,
            &mut canvas,
            WHITE,
            RenderStrategy::Wireframe,
            &identity_settings(),
        )
        .unwrap();
        assert_eq!(stats.drawn, 1);
        assert_eq!(canvas.get(25, 25), Some(WHITE));
        assert_eq!(canvas.get(0, 50), Some(WHITE));
        assert_eq!(canvas.get(10, 10), Some(Color::default()));
    }

    #[test]
    fn invalid_mesh_leaves_canvas_untouched() {
        let mut mesh_faces = square().faces().to_vec();
        mesh_faces.push(Face::new(0, 1, 9));
        let mesh = Mesh::new(square().vertices().to_vec(), mesh_faces);
        let mut canvas = Canvas::new(64, 64);
        let err = render(
            &mesh,
            &mut canvas,
            WHITE,
            RenderStrategy::Filled,
            &RenderSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::FaceIndexOutOfRange { face: 2, index: 9, .. }));
        assert_eq!(canvas.painted_count(), 0);
    }

    #[test]
    fn empty_mesh_is_an_error() {
        let mut canvas = Canvas::new(8, 8);
        let err = render(
            &Mesh::default(),
            &mut canvas,
            WHITE,
            RenderStrategy::Wireframe,
            &RenderSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::Empty));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mesh = square();
        let draw = || {
            let mut canvas = Canvas::new(120, 80);
            render(
                &mesh,
                &mut canvas,
                WHITE,
                RenderStrategy::Filled,
                &RenderSettings::default(),
            )
            .unwrap();
            canvas
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn renders_through_trait_objects() {
        let mesh: Box<dyn MeshSource> = Box::new(square());
        let mut canvas = Canvas::new(40, 40);
        let stats = render(
            mesh.as_ref(),
            &mut canvas,
            WHITE,
            RenderStrategy::Wireframe,
            &RenderSettings::default(),
        )
        .unwrap();
        assert_eq!(stats.drawn, 2);
    }
}
