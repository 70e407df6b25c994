use trigon_geom::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Center of the viewport in logical pixels.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamps a pixel position into `[0, width] × [0, height]`.
    #[inline]
    pub fn clamp_pixel(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width.max(0.0)), p.y.clamp(0.0, self.height.max(0.0)))
    }

    /// Logical pixels → NDC.
    #[inline]
    pub fn pixel_to_ndc(self, p: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
    }

    /// NDC → logical pixels.
    #[inline]
    pub fn ndc_to_pixel(self, p: Vec2) -> Vec2 {
        Vec2::new((p.x + 1.0) * 0.5 * self.width, (1.0 - p.y) * 0.5 * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn corners_map_to_ndc_extremes() {
        assert!(approx_eq(VP.pixel_to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0)));
        assert!(approx_eq(VP.pixel_to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
        assert!(approx_eq(VP.pixel_to_ndc(VP.center()), Vec2::ZERO));
    }

    #[test]
    fn ndc_to_pixel_inverts_pixel_to_ndc() {
        let p = Vec2::new(123.0, 456.0);
        assert!(approx_eq(VP.ndc_to_pixel(VP.pixel_to_ndc(p)), p));
    }

    #[test]
    fn clamp_pixel_keeps_pointer_inside() {
        assert_eq!(VP.clamp_pixel(Vec2::new(-5.0, 700.0)), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(VP.is_valid());
    }
}
