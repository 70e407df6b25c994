use trigon_engine::coords::Viewport;
use trigon_geom::Vec2;

/// Remembers the last pointer position so the demos keep aiming at it after
/// the pointer leaves the window.
#[derive(Debug, Default, Copy, Clone)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    /// Folds in the current pointer (if inside the window) and returns the
    /// position to aim at, clamped to the window. Before the pointer has
    /// ever entered, that is the window center.
    pub fn update(&mut self, current: Option<Vec2>, viewport: Viewport) -> Vec2 {
        if let Some(p) = current {
            self.last = Some(p);
        }
        viewport.clamp_pixel(self.last.unwrap_or_else(|| viewport.center()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 800.0);

    #[test]
    fn starts_at_center() {
        let mut t = PointerTracker::default();
        assert_eq!(t.update(None, VP), Vec2::new(400.0, 400.0));
    }

    #[test]
    fn holds_last_position_after_leaving() {
        let mut t = PointerTracker::default();
        t.update(Some(Vec2::new(10.0, 20.0)), VP);
        assert_eq!(t.update(None, VP), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn clamps_to_window() {
        let mut t = PointerTracker::default();
        assert_eq!(t.update(Some(Vec2::new(-5.0, 900.0)), VP), Vec2::new(0.0, 800.0));
    }
}
