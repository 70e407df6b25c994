use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock was created or last reset (sum of clamped `dt`s).
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// turn into one giant movement step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f32,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline (e.g. after the window was restored).
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.elapsed = 0.0;
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. Split out from `tick` for tests.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = now.saturating_duration_since(self.last);
        let dt = raw.clamp(self.dt_min, self.dt_max).as_secs_f32();

        self.last = now;
        self.elapsed += dt;

        let ft = FrameTime {
            dt,
            elapsed: self.elapsed,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_to_max_after_stall() {
        let mut clock = FrameClock::new();
        let ft = clock.tick_at(clock.last + Duration::from_secs(3));
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MAX.as_secs_f32());
    }

    #[test]
    fn dt_is_clamped_to_min_for_zero_interval() {
        let mut clock = FrameClock::new();
        let ft = clock.tick_at(clock.last);
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MIN.as_secs_f32());
    }

    #[test]
    fn frame_index_and_elapsed_advance() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let a = clock.tick_at(start + Duration::from_millis(10));
        let b = clock.tick_at(start + Duration::from_millis(30));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!((b.dt - 0.020).abs() < 1e-6);
        assert!((b.elapsed - 0.030).abs() < 1e-6);
    }

    #[test]
    fn reset_clears_elapsed() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(50));
        clock.reset();
        let ft = clock.tick_at(clock.last + Duration::from_millis(5));
        assert!((ft.elapsed - 0.005).abs() < 1e-6);
    }
}
