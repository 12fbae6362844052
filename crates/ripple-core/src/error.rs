use thiserror::Error;

/// Failures surfaced by the ripple tracker and material instances.
///
/// A click that fails leaves the slot ring untouched, and any partial publish
/// is written back to the previous arrays, so callers can log and carry on
/// with the previous state intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RippleError {
    #[error("degenerate element rect {width}x{height}")]
    DegenerateRect { width: f32, height: f32 },

    #[error("clock reading is not finite: {0}")]
    NonFiniteTime(f32),

    #[error("screen point ({x}, {y}) does not map into element space")]
    Unmappable { x: f32, y: f32 },

    #[error("material has no uniform named {0:?}")]
    UnknownUniform(String),

    #[error("uniform {name:?} written with the wrong kind")]
    UniformKindMismatch { name: String },

    #[error("uniform {name:?} expects {expected} elements, got {got}")]
    UniformLengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}
