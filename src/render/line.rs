//! Integer line drawing.
//!
//! Lines use the doubled-error form of Bresenham's algorithm: only integer
//! additions and comparisons per step, no division.

use crate::colors::Color;
use crate::math::Vec2i;

use super::canvas::Canvas;

/// Iterator over the pixels of the line between two points, both endpoints
/// included.
///
/// The line always steps along its longer axis, so it yields exactly
/// `max(|dx|, |dy|) + 1` points. Endpoints are ordered before stepping, which
/// makes `LinePoints::new(a, b)` and `LinePoints::new(b, a)` yield the same
/// set of points.
///
/// Any `i32` endpoints are accepted; stepping state is kept in `i64`.
#[derive(Clone, Debug)]
pub struct LinePoints {
    /// Axes are swapped while stepping; swap back when yielding.
    steep: bool,
    x: i64,
    x_end: i64,
    y: i64,
    y_step: i64,
    dx: i64,
    derror2: i64,
    /// Stays in (-dx, dx] between steps.
    error2: i64,
}

impl LinePoints {
    pub fn new(from: Vec2i, to: Vec2i) -> Self {
        let (mut x0, mut y0) = (from.x as i64, from.y as i64);
        let (mut x1, mut y1) = (to.x as i64, to.y as i64);

        // Step along whichever axis has more samples to avoid gaps.
        let steep = (x0 - x1).abs() < (y0 - y1).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        Self {
            steep,
            x: x0,
            x_end: x1,
            y: y0,
            y_step: if y1 > y0 { 1 } else { -1 },
            dx: x1 - x0,
            derror2: (y1 - y0).abs() * 2,
            error2: 0,
        }
    }

    /// Restrict the line to the pixels whose stepping coordinate lies inside
    /// a `width` x `height` canvas.
    ///
    /// The remaining points are exactly the ones the unrestricted line yields
    /// there, but the work no longer depends on how far the endpoints lie
    /// outside the canvas.
    pub fn clip_to(mut self, width: u32, height: u32) -> Self {
        let limit = if self.steep { height } else { width } as i64;
        self.x_end = self.x_end.min(limit - 1);
        if self.x < 0 {
            if self.x_end < 0 {
                self.x = self.x_end + 1;
            } else {
                self.advance(-self.x);
            }
        }
        self
    }

    /// Jump `k` steps ahead, landing in the same state `k` calls to `next`
    /// would leave.
    fn advance(&mut self, k: i64) {
        if k <= 0 || self.dx == 0 {
            self.x += k.max(0);
            return;
        }
        // The error gains `derror2` per step and loses `2 * dx` per minor
        // step; the number of minor steps is the one that brings it back
        // into (-dx, dx].
        let dx = self.dx as i128;
        let total = self.error2 as i128 + k as i128 * self.derror2 as i128;
        let minor_steps = -(-(total - dx)).div_euclid(2 * dx);
        self.y += minor_steps as i64 * self.y_step;
        self.error2 = (total - minor_steps * 2 * dx) as i64;
        self.x += k;
    }
}

impl Iterator for LinePoints {
    type Item = Vec2i;

    fn next(&mut self) -> Option<Vec2i> {
        if self.x > self.x_end {
            return None;
        }

        // Both coordinates lie between the i32 endpoints.
        let (major, minor) = (self.x as i32, self.y as i32);
        let point = if self.steep {
            Vec2i::new(minor, major)
        } else {
            Vec2i::new(major, minor)
        };

        self.error2 += self.derror2;
        if self.error2 > self.dx {
            self.y += self.y_step;
            self.error2 -= self.dx * 2;
        }
        self.x += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.x_end - self.x + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Draw a 1-pixel-wide line from `from` to `to`, both endpoints included.
///
/// Pixels outside the canvas are skipped without being stepped through.
pub fn draw_line(canvas: &mut Canvas, from: Vec2i, to: Vec2i, color: Color) {
    for p in LinePoints::new(from, to).clip_to(canvas.width(), canvas.height()) {
        canvas.set(p.x, p.y, color);
    }
}
