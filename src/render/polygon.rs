//! Point-in-polygon test by ray crossing parity.

use crate::math::Vec2i;

/// Returns true if `point` lies inside the simple polygon `vertices`.
///
/// Casts a horizontal ray from the point and flips an inside flag for each
/// polygon edge it crosses. An edge counts when the point's y is on opposite
/// sides of its endpoints (an endpoint at the same y counts as above) and the
/// point lies at or left of the edge's x at that y. The x intersection uses
/// integer division, truncating toward zero.
///
/// Horizontal edges are never crossed by a horizontal ray and are skipped
/// before the division. Points exactly on an edge or a vertex may land on
/// either side. Fewer than three vertices contain nothing.
///
/// Any `i32` coordinates are accepted; the crossing is computed in `i128`.
pub fn point_in_polygon(point: Vec2i, vertices: &[Vec2i]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut prev = vertices[vertices.len() - 1];
    for &curr in vertices {
        if curr.y != prev.y && (curr.y >= point.y) != (prev.y >= point.y) {
            let dx = prev.x as i128 - curr.x as i128;
            let dy = prev.y as i128 - curr.y as i128;
            let crossing_x = dx * (point.y as i128 - curr.y as i128) / dy + curr.x as i128;
            if point.x as i128 <= crossing_x {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}
