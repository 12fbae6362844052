//! Runtime knobs for the tracker and the material it drives.

use crate::constants::{
    DEFAULT_RIPPLE_AMPLITUDE, DEFAULT_RIPPLE_DECAY, DEFAULT_RIPPLE_FREQUENCY,
    DEFAULT_RIPPLE_SPEED, MIN_RECT_EXTENT,
};

/// What to do with a click when the element rect has no usable area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DegenerateRectPolicy {
    /// Reject the click with `RippleError::DegenerateRect`; nothing is written.
    #[default]
    Skip,
    /// Raise each extent to at least `min_extent` and record the click.
    Clamp { min_extent: f32 },
}

impl DegenerateRectPolicy {
    pub fn clamp() -> Self {
        Self::Clamp {
            min_extent: MIN_RECT_EXTENT,
        }
    }
}

/// Wave shape written to the material once at instantiation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub speed: f32,
    pub frequency: f32,
    pub decay: f32,
    pub amplitude: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_RIPPLE_SPEED,
            frequency: DEFAULT_RIPPLE_FREQUENCY,
            decay: DEFAULT_RIPPLE_DECAY,
            amplitude: DEFAULT_RIPPLE_AMPLITUDE,
        }
    }
}

impl WaveParams {
    /// Seconds until a ripple's envelope falls below `threshold` of its peak.
    pub fn lifetime_secs(&self, threshold: f32) -> f32 {
        if self.decay <= 0.0 || threshold <= 0.0 {
            return f32::INFINITY;
        }
        -threshold.min(1.0).ln() / self.decay
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleParams {
    pub degenerate_rect: DegenerateRectPolicy,
    pub wave: WaveParams,
}
