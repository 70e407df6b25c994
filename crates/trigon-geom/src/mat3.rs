use core::ops::Mul;

use crate::vec::Vec2;

/// 3×3 homogeneous matrix for 2D affine transforms, backed by [`glam::Mat3`].
///
/// Points are treated as column vectors `(x, y, 1)`, so `a * b` applies `b`
/// first, then `a`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3(glam::Mat3);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3(glam::Mat3::IDENTITY);

    #[inline]
    pub fn translation(offset: Vec2) -> Self {
        Self(glam::Mat3::from_translation(offset.into()))
    }

    /// Counter-clockwise rotation about the origin (+Y up).
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        Self(glam::Mat3::from_angle(angle))
    }

    /// Rotation about `pivot`: `translation(pivot) * rotation(angle) * translation(-pivot)`.
    #[inline]
    pub fn rotation_about(pivot: Vec2, angle: f32) -> Self {
        Self::translation(pivot) * Self::rotation(angle) * Self::translation(-pivot)
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.0.transform_point2(p.into()).into()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self(m)
    }
}

impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.0
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(0.3, -0.7);
        assert_eq!(Mat3::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn translation_offsets_points() {
        let m = Mat3::translation(Vec2::new(1.0, -2.0));
        assert!(approx_eq(m.transform_point(Vec2::new(0.5, 0.5)), Vec2::new(1.5, -1.5)));
    }

    #[test]
    fn rotation_quarter_turn_is_counter_clockwise() {
        let m = Mat3::rotation(FRAC_PI_2);
        assert!(approx_eq(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
        assert!(approx_eq(m.transform_point(Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0)));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn product_applies_right_operand_first() {
        let t = Mat3::translation(Vec2::new(1.0, 0.0));
        let r = Mat3::rotation(FRAC_PI_2);
        // Rotate then translate: (1,0) -> (0,1) -> (1,1)
        assert!(approx_eq((t * r).transform_point(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 1.0)));
        // Translate then rotate: (1,0) -> (2,0) -> (0,2)
        assert!(approx_eq((r * t).transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn rotation_about_keeps_pivot_fixed() {
        let pivot = Vec2::new(0.25, -0.4);
        let m = Mat3::rotation_about(pivot, 1.234);
        assert!(approx_eq(m.transform_point(pivot), pivot));
    }

    #[test]
    fn rotation_about_half_turn_mirrors_through_pivot() {
        let pivot = Vec2::new(1.0, 1.0);
        let m = Mat3::rotation_about(pivot, PI);
        assert!(approx_eq(m.transform_point(Vec2::new(2.0, 1.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotation_matches_glam_affine() {
        let pivot = Vec2::new(-0.3, 0.45);
        let m = Mat3::rotation_about(pivot, 0.9);
        let affine = glam::Affine2::from_translation(pivot.into())
            * glam::Affine2::from_angle(0.9)
            * glam::Affine2::from_translation((-pivot).into());
        let p = Vec2::new(0.7, -0.2);
        assert!(approx_eq(m.transform_point(p), affine.transform_point2(p.into()).into()));
    }

    #[test]
    fn multiplying_by_identity_is_noop() {
        let m = Mat3::rotation_about(Vec2::new(0.1, 0.2), 0.7);
        assert_eq!(m * Mat3::IDENTITY, m);
        assert_eq!(Mat3::IDENTITY * m, m);
    }
}
