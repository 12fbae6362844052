//! Fixed-capacity ring of ripple origins and start times.

use crate::constants::{center_origin_vec4, INACTIVE_START_TIME, RIPPLE_SLOTS};
use glam::{Vec2, Vec4};

/// Read-only view of one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSlot {
    pub origin: Vec2,
    pub start_time: f32,
}

impl RippleSlot {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.start_time > INACTIVE_START_TIME
    }

    /// Seconds since the click, or `None` for an inactive slot.
    #[inline]
    pub fn age(&self, now_secs: f32) -> Option<f32> {
        self.is_active().then(|| now_secs - self.start_time)
    }
}

/// Origins are kept as `(u, v, 0, 0)` so they can be uploaded as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleSlots {
    centers: [Vec4; RIPPLE_SLOTS],
    start_times: [f32; RIPPLE_SLOTS],
    next: usize,
}

impl Default for RippleSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleSlots {
    pub fn new() -> Self {
        Self {
            centers: [center_origin_vec4(); RIPPLE_SLOTS],
            start_times: [INACTIVE_START_TIME; RIPPLE_SLOTS],
            next: 0,
        }
    }

    /// Overwrite the slot at the ring index and advance it. Returns the slot written.
    pub fn write(&mut self, uv: Vec2, start_time: f32) -> usize {
        let idx = self.next;
        self.centers[idx] = Vec4::new(uv.x, uv.y, 0.0, 0.0);
        self.start_times[idx] = start_time;
        self.next = (idx + 1) % RIPPLE_SLOTS;
        idx
    }

    #[inline]
    pub fn next_index(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn centers(&self) -> &[Vec4; RIPPLE_SLOTS] {
        &self.centers
    }

    #[inline]
    pub fn start_times(&self) -> &[f32; RIPPLE_SLOTS] {
        &self.start_times
    }

    pub fn get(&self, index: usize) -> Option<RippleSlot> {
        let c = self.centers.get(index)?;
        Some(RippleSlot {
            origin: c.truncate().truncate(),
            start_time: self.start_times[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = RippleSlot> + '_ {
        (0..RIPPLE_SLOTS).filter_map(move |i| self.get(i))
    }

    /// Slots clicked within the last `lifetime_secs`.
    pub fn active_count(&self, now_secs: f32, lifetime_secs: f32) -> usize {
        self.iter()
            .filter_map(|s| s.age(now_secs))
            .filter(|age| *age >= 0.0 && *age < lifetime_secs)
            .count()
    }
}
