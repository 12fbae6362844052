//! Screen-space to element-local coordinate mapping.
//!
//! Plays the role of the "press camera" of a UI hit: given where an element
//! sits on screen, convert a pointer position into the element's own space.

use crate::rect::Rect;
use glam::{Affine2, Mat2, Vec2};

/// Direction of increasing Y in screen space. Element-local space is Y-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenYAxis {
    #[default]
    Down,
    Up,
}

pub trait ScreenToLocal {
    /// `None` when the point cannot be expressed in local space.
    fn screen_to_local(&self, screen: Vec2) -> Option<Vec2>;
}

impl<F> ScreenToLocal for F
where
    F: Fn(Vec2) -> Option<Vec2>,
{
    fn screen_to_local(&self, screen: Vec2) -> Option<Vec2> {
        self(screen)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenProjection {
    screen_to_local: Affine2,
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScreenProjection {
    /// Screen and local spaces coincide.
    pub fn identity() -> Self {
        Self {
            screen_to_local: Affine2::IDENTITY,
        }
    }

    pub fn from_affine(screen_to_local: Affine2) -> Self {
        Self { screen_to_local }
    }

    /// Build the mapping for an element drawn over `screen_bounds` whose local
    /// geometry is `local`.
    ///
    /// `screen_bounds.x/y` is the top-left corner for [`ScreenYAxis::Down`] and
    /// the bottom-left corner for [`ScreenYAxis::Up`]. Returns `None` if the
    /// on-screen bounds have no area.
    pub fn from_bounds(screen_bounds: Rect, local: Rect, y_axis: ScreenYAxis) -> Option<Self> {
        if screen_bounds.is_degenerate() {
            return None;
        }
        let scale = local.size() / screen_bounds.size();
        let (diag, translation) = match y_axis {
            ScreenYAxis::Up => (
                Vec2::new(scale.x, scale.y),
                local.min() - screen_bounds.min() * scale,
            ),
            ScreenYAxis::Down => (
                Vec2::new(scale.x, -scale.y),
                Vec2::new(
                    local.x - screen_bounds.x * scale.x,
                    local.y + (screen_bounds.y + screen_bounds.height) * scale.y,
                ),
            ),
        };
        Some(Self::from_affine(Affine2::from_mat2_translation(
            Mat2::from_diagonal(diag),
            translation,
        )))
    }

    #[inline]
    pub fn affine(&self) -> Affine2 {
        self.screen_to_local
    }
}

impl ScreenToLocal for ScreenProjection {
    fn screen_to_local(&self, screen: Vec2) -> Option<Vec2> {
        let p = self.screen_to_local.transform_point2(screen);
        p.is_finite().then_some(p)
    }
}
