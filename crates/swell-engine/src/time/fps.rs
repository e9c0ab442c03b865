use std::time::{Duration, Instant};

/// Frames-per-second estimate over a sliding window.
///
/// Counts presented frames and publishes a new rate once per `window`, so the
/// readout is stable enough to read.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    window_start: Option<Instant>,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        Self { window, window_start: None, frames: 0, fps: 0.0 }
    }

    /// Records one frame presented at `now`. Returns `Some(fps)` when a new
    /// estimate was published.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let span = now.saturating_duration_since(start);
        if span < self.window {
            return None;
        }

        self.fps = self.frames as f32 / span.as_secs_f32();
        self.frames = 0;
        self.window_start = Some(now);
        log::trace!("fps: {:.1}", self.fps);
        Some(self.fps)
    }

    /// Latest published estimate; 0 until the first window completes.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
