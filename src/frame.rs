use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;

/// Measures wall-clock frame deltas for hosts that drive the widget in real time.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_instant: Instant,
    elapsed_sec: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            elapsed_sec: 0.0,
        }
    }

    /// Seconds since the previous call, clamped so a stalled frame can't fling the carousel.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.elapsed_sec += dt.as_secs_f64();
        dt.as_secs_f32().min(MAX_FRAME_DT_SEC)
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }
}
