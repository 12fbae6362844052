use glam::Vec2;

/// Axis-aligned rectangle in an element's local coordinate space.
///
/// `x`/`y` are the minimum corner, so a centred pivot gives negative values
/// (e.g. a 200x100 element centred on its origin is `(-100, -50, 200, 100)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect with its minimum corner at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when either extent is zero, negative or not finite.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Same origin with each extent raised to at least `min_extent`.
    pub fn with_min_extent(&self, min_extent: f32) -> Self {
        let fix = |v: f32| if v.is_finite() { v.max(min_extent) } else { min_extent };
        Self::new(self.x, self.y, fix(self.width), fix(self.height))
    }

    /// Map a local point to unit range: `(local - min) / size`.
    ///
    /// Points on the edges land exactly on 0.0 or 1.0; points outside the rect
    /// are not clamped.
    #[inline]
    pub fn normalize(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            (local.x - self.x) / self.width,
            (local.y - self.y) / self.height,
        )
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}
