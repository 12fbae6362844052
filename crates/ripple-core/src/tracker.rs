//! Click-to-ripple bookkeeping.
//!
//! [`RippleTracker`] turns pointer clicks into writes on a 4-slot ring of
//! ripple origins and start times, then republishes the whole ring and the
//! element aspect ratio to the surface it owns. The shader derives each
//! ripple's age from `time - start_time`; nothing here ever clears a slot.

use crate::constants::{
    RIPPLE_SLOTS, UNIFORM_ASPECT_RATIO, UNIFORM_RIPPLE_CENTERS, UNIFORM_RIPPLE_START_TIMES,
};
use crate::error::RippleError;
use crate::params::{DegenerateRectPolicy, RippleParams};
use crate::projection::ScreenToLocal;
use crate::rect::Rect;
use crate::slots::RippleSlots;
use crate::surface::{RippleSurface, UniformKind};
use glam::Vec2;

/// What a successful click wrote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleHit {
    pub slot: usize,
    pub uv: Vec2,
    pub aspect_ratio: f32,
}

pub struct RippleTracker<S: RippleSurface> {
    surface: S,
    slots: RippleSlots,
    rect: Rect,
    params: RippleParams,
}

impl<S: RippleSurface> RippleTracker<S> {
    /// Take ownership of `surface`, check it carries the ripple uniforms and
    /// publish the idle slot arrays once.
    pub fn new(surface: S, rect: Rect, params: RippleParams) -> Result<Self, RippleError> {
        surface.check_uniform(UNIFORM_RIPPLE_CENTERS, UniformKind::VectorArray, RIPPLE_SLOTS)?;
        surface.check_uniform(UNIFORM_RIPPLE_START_TIMES, UniformKind::FloatArray, RIPPLE_SLOTS)?;
        surface.check_uniform(UNIFORM_ASPECT_RATIO, UniformKind::Float, 1)?;
        let mut tracker = Self {
            surface,
            slots: RippleSlots::new(),
            rect,
            params,
        };
        tracker.publish_slots()?;
        Ok(tracker)
    }

    pub fn register_click(
        &mut self,
        screen_position: Vec2,
        camera: &impl ScreenToLocal,
        current_time: f32,
    ) -> Result<RippleHit, RippleError> {
        if !current_time.is_finite() {
            return Err(RippleError::NonFiniteTime(current_time));
        }
        let rect = self.effective_rect()?;
        let local = camera
            .screen_to_local(screen_position)
            .ok_or(RippleError::Unmappable {
                x: screen_position.x,
                y: screen_position.y,
            })?;

        let uv = rect.normalize(local);
        let aspect_ratio = rect.aspect_ratio();
        let mut staged = self.slots.clone();
        let slot = staged.write(uv, current_time);

        // slots are committed only once the surface took every write
        let published = Self::write_slots(&mut self.surface, &staged)
            .and_then(|()| self.surface.set_float(UNIFORM_ASPECT_RATIO, aspect_ratio));
        if let Err(e) = published {
            if let Err(restore) = Self::write_slots(&mut self.surface, &self.slots) {
                log::warn!("[publish] restoring previous slots failed: {}", restore);
            }
            return Err(e);
        }
        self.slots = staged;
        log::debug!(
            "[click] slot {} uv=({:.3},{:.3}) t={:.3} aspect={:.3}",
            slot,
            uv.x,
            uv.y,
            current_time,
            aspect_ratio
        );
        Ok(RippleHit {
            slot,
            uv,
            aspect_ratio,
        })
    }

    /// Republish slot arrays and, when the rect is usable, the aspect ratio.
    pub fn publish(&mut self) -> Result<(), RippleError> {
        self.publish_slots()?;
        if let Ok(rect) = self.effective_rect() {
            self.surface.set_float(UNIFORM_ASPECT_RATIO, rect.aspect_ratio())?;
        }
        Ok(())
    }

    fn publish_slots(&mut self) -> Result<(), RippleError> {
        Self::write_slots(&mut self.surface, &self.slots)
    }

    fn write_slots(surface: &mut S, slots: &RippleSlots) -> Result<(), RippleError> {
        log::trace!("[publish] next slot {}", slots.next_index());
        surface.set_vector_array(UNIFORM_RIPPLE_CENTERS, slots.centers())?;
        surface.set_float_array(UNIFORM_RIPPLE_START_TIMES, slots.start_times())
    }

    fn effective_rect(&self) -> Result<Rect, RippleError> {
        if !self.rect.is_degenerate() {
            return Ok(self.rect);
        }
        let rejected = RippleError::DegenerateRect {
            width: self.rect.width,
            height: self.rect.height,
        };
        match self.params.degenerate_rect {
            DegenerateRectPolicy::Skip => Err(rejected),
            DegenerateRectPolicy::Clamp { min_extent } => {
                let clamped = self.rect.with_min_extent(min_extent);
                // a zero, negative or NaN minimum cannot repair the rect
                if clamped.is_degenerate() {
                    Err(rejected)
                } else {
                    Ok(clamped)
                }
            }
        }
    }

    /// Element geometry changed (layout pass, window resize).
    pub fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            log::debug!(
                "[resize] element rect {:.1}x{:.1} at ({:.1},{:.1})",
                rect.width,
                rect.height,
                rect.x,
                rect.y
            );
        }
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn params(&self) -> &RippleParams {
        &self.params
    }

    pub fn slots(&self) -> &RippleSlots {
        &self.slots
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
