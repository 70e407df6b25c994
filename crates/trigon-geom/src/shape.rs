use core::fmt;

use crate::mat3::Mat3;
use crate::vec::Vec2;
use crate::vertex::Vertex;

const MAX_VERTICES: usize = 4;

/// Which primitive a [`Shape`] is; fixes its vertex count and index order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
}

impl ShapeKind {
    #[inline]
    pub const fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Rectangle => 4,
        }
    }

    /// Triangle-list indices into the shape's vertices.
    ///
    /// Rectangles are split along the 1–3 diagonal.
    #[inline]
    pub const fn indices(self) -> &'static [u16] {
        match self {
            ShapeKind::Triangle => &[0, 1, 2],
            ShapeKind::Rectangle => &[0, 1, 3, 1, 2, 3],
        }
    }
}

/// A fixed-length, exclusively owned list of vertices.
///
/// The vertex count is set by [`ShapeKind`] at construction and never
/// changes. Transforms mutate positions in place.
#[derive(Clone)]
pub struct Shape {
    kind: ShapeKind,
    // Slots past `kind.vertex_count()` are padding and never exposed.
    vertices: [Vertex; MAX_VERTICES],
}

impl Shape {
    pub fn triangle(vertices: [Vertex; 3]) -> Self {
        let [a, b, c] = vertices;
        Self {
            kind: ShapeKind::Triangle,
            vertices: [a, b, c, a],
        }
    }

    pub fn rectangle(vertices: [Vertex; 4]) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            vertices,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices[..self.kind.vertex_count()]
    }

    #[inline]
    pub fn indices(&self) -> &'static [u16] {
        self.kind.indices()
    }

    /// Mean of the vertex `x`/`y` coordinates (`z` ignored).
    pub fn centroid(&self) -> Vec2 {
        let verts = self.vertices();
        let sum = verts
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc + v.pos.xy());
        sum / verts.len() as f32
    }

    /// Applies `m` to every vertex position. `z` is left untouched.
    pub fn transform(&mut self, m: &Mat3) {
        let n = self.kind.vertex_count();
        for v in &mut self.vertices[..n] {
            v.pos = v.pos.with_xy(m.transform_point(v.pos.xy()));
        }
    }

    /// Rotates the shape counter-clockwise by `angle` radians about its own centroid.
    pub fn rotate(&mut self, angle: f32) {
        let m = Mat3::rotation_about(self.centroid(), angle);
        self.transform(&m);
    }

    /// Moves every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let n = self.kind.vertex_count();
        let offset = Vec2::new(dx, dy);
        for v in &mut self.vertices[..n] {
            v.pos = v.pos.with_xy(v.pos.xy() + offset);
        }
    }
}

// Equality and debug output only see the live vertices, never the padding.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.vertices() == other.vertices()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("kind", &self.kind)
            .field("vertices", &self.vertices())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::{Rgb, Vec3};
    use core::f32::consts::PI;

    const EPS: f32 = 1e-5;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, 0.5), Rgb::WHITE)
    }

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn positions(s: &Shape) -> Vec<Vec2> {
        s.vertices().iter().map(|v| v.pos().xy()).collect()
    }

    fn assert_positions(s: &Shape, expected: &[Vec2]) {
        let got = positions(s);
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!(approx_eq(*g, *e), "got {g:?}, expected {e:?}");
        }
    }

    fn tri() -> Shape {
        Shape::triangle([v(0.0, 0.6), v(-0.5, -0.3), v(0.5, -0.3)])
    }

    fn quad() -> Shape {
        Shape::rectangle([v(0.9, 0.5), v(0.9, -0.5), v(-0.1, -0.5), v(-0.1, 0.5)])
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn vertex_count_follows_kind() {
        assert_eq!(tri().vertices().len(), 3);
        assert_eq!(quad().vertices().len(), 4);
        assert_eq!(tri().indices(), &[0, 1, 2]);
        assert_eq!(quad().indices(), &[0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn equality_ignores_padding_slot() {
        let mut moved = tri();
        moved.translate(1.0, 0.0);
        let [a, b, c] = [moved.vertices()[0], moved.vertices()[1], moved.vertices()[2]];
        let rebuilt = Shape::triangle([a, b, c]);
        assert_eq!(moved, rebuilt);
        assert_ne!(moved, tri());
    }

    #[test]
    fn debug_lists_only_live_vertices() {
        let out = format!("{:?}", tri());
        assert_eq!(out.matches("Vertex").count(), 3);
        assert!(out.contains("Triangle"));
    }

    // ── centroid ──────────────────────────────────────────────────────────

    #[test]
    fn centroid_is_mean_of_vertices() {
        assert!(approx_eq(tri().centroid(), Vec2::new(0.0, 0.0)));
        assert!(approx_eq(quad().centroid(), Vec2::new(0.4, 0.0)));
    }

    #[test]
    fn centroid_survives_rotation() {
        for s in [tri(), quad()] {
            let before = s.centroid();
            let mut s = s;
            s.rotate(0.83);
            assert!(approx_eq(s.centroid(), before));
        }
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_by_zero_is_identity() {
        let mut s = quad();
        let before = positions(&s);
        s.rotate(0.0);
        assert_positions(&s, &before);
    }

    #[test]
    fn rotate_then_unrotate_restores_positions() {
        for angle in [0.1, 1.0, -2.5, PI, 7.0] {
            let mut s = quad();
            let before = positions(&s);
            s.rotate(angle);
            s.rotate(-angle);
            assert_positions(&s, &before);
        }
    }

    #[test]
    fn half_turn_negates_about_centroid() {
        let mut s = tri();
        s.rotate(PI);
        assert_positions(
            &s,
            &[Vec2::new(0.0, -0.6), Vec2::new(0.5, 0.3), Vec2::new(-0.5, 0.3)],
        );
    }

    #[test]
    fn rotate_keeps_z_color_and_tex() {
        let mut s = Shape::triangle([
            Vertex::textured(Vec3::new(0.0, 1.0, 0.25), Rgb::RED, Vec2::new(0.5, 1.0)),
            Vertex::textured(Vec3::new(-1.0, 0.0, 0.25), Rgb::GREEN, Vec2::new(0.0, 0.0)),
            Vertex::textured(Vec3::new(1.0, 0.0, 0.25), Rgb::BLUE, Vec2::new(1.0, 0.0)),
        ]);
        let before = s.clone();
        s.rotate(1.1);
        for (a, b) in s.vertices().iter().zip(before.vertices()) {
            assert_eq!(a.pos().z, b.pos().z);
            assert_eq!(a.color(), b.color());
            assert_eq!(a.tex(), b.tex());
        }
    }

    #[test]
    fn rotate_coincident_vertices_is_noop() {
        let mut s = Shape::triangle([v(0.2, 0.2), v(0.2, 0.2), v(0.2, 0.2)]);
        s.rotate(1.3);
        assert_positions(&s, &[Vec2::new(0.2, 0.2); 3]);
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_round_trip_is_identity() {
        let mut s = quad();
        let before = positions(&s);
        s.translate(0.3, -0.7);
        s.translate(-0.3, 0.7);
        assert_positions(&s, &before);
    }

    #[test]
    fn translate_is_additive() {
        let mut stepwise = tri();
        stepwise.translate(0.1, 0.2);
        stepwise.translate(-0.4, 0.05);

        let mut once = tri();
        once.translate(0.1 - 0.4, 0.2 + 0.05);

        assert_positions(&stepwise, &positions(&once));
    }

    #[test]
    fn translate_leaves_z_untouched() {
        let mut s = tri();
        s.translate(1.0, 1.0);
        assert!(s.vertices().iter().all(|v| v.pos().z == 0.5));
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn rotate_then_translate_matches_single_matrix() {
        let mut stepwise = tri();
        stepwise.rotate(0.4);
        stepwise.translate(0.25, -0.1);

        let c = tri().centroid();
        let m = Mat3::translation(Vec2::new(0.25, -0.1)) * Mat3::rotation_about(c, 0.4);
        let mut once = tri();
        once.transform(&m);

        assert_positions(&stepwise, &positions(&once));
    }
}
