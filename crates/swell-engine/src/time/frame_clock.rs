use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Seconds since the clock started. Monotonic, never clamped, so a stalled
    /// frame does not desynchronize the animation from wall time.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Per-window frame clock.
///
/// `dt` is clamped to avoid pathological values after the debugger pauses
/// the process or the window is minimized.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    last_elapsed: f32,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            last_elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the `dt` baseline. `elapsed` keeps counting from the start.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        // f32 rounding can step back near large values; hold the previous one.
        let elapsed = now
            .saturating_duration_since(self.start)
            .as_secs_f32()
            .max(self.last_elapsed);
        self.last_elapsed = elapsed;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed,
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
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        assert_eq!(clock.tick_at(t0).frame_index, 0);
        assert_eq!(clock.tick_at(t0).frame_index, 1);
        assert_eq!(clock.tick_at(t0).frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_but_elapsed_is_not() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
        assert!((ft.elapsed - 5.0).abs() < 1e-6);
    }

    #[test]
    fn dt_has_a_floor() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        let ft = clock.tick_at(t0);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        let a = clock.tick_at(t0 + Duration::from_millis(40)).elapsed;
        let b = clock.tick_at(t0 + Duration::from_millis(20)).elapsed;
        let c = clock.tick_at(t0 + Duration::from_millis(60)).elapsed;
        assert!(b >= a);
        assert!(c >= b);
    }

    #[test]
    fn reset_keeps_elapsed() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        let a = clock.tick_at(t0 + Duration::from_secs(1)).elapsed;
        clock.reset();
        let b = clock.tick().elapsed;
        assert!(b >= a);
    }
}
