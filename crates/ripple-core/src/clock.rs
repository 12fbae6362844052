use instant::Instant;
use std::cell::Cell;

/// Monotonic "seconds since start" in the same domain the shader uses for `time`.
pub trait Clock {
    fn now_secs(&self) -> f32;
}

/// Wall clock anchored at construction.
#[derive(Clone, Copy, Debug)]
pub struct SinceStart {
    start: Instant,
}

impl Default for SinceStart {
    fn default() -> Self {
        Self::new()
    }
}

impl SinceStart {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SinceStart {
    fn now_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock advanced by hand; used by tests and fixed-step playback.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    pub fn new(start_secs: f32) -> Self {
        Self {
            now: Cell::new(start_secs),
        }
    }

    pub fn set(&self, secs: f32) {
        self.now.set(secs);
    }

    pub fn advance(&self, dt_secs: f32) {
        self.now.set(self.now.get() + dt_secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f32 {
        self.now.get()
    }
}
