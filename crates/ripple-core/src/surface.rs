use crate::error::RippleError;
use glam::Vec4;

/// Shape of a named uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    FloatArray,
    VectorArray,
}

/// Named-uniform sink the tracker publishes into.
///
/// Implementations own the storage; the tracker is the only writer.
pub trait RippleSurface {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) -> Result<(), RippleError>;
    fn set_float_array(&mut self, name: &str, values: &[f32]) -> Result<(), RippleError>;
    fn set_float(&mut self, name: &str, value: f32) -> Result<(), RippleError>;

    /// Whether a write of `kind` with `len` elements to `name` would be accepted.
    ///
    /// Surfaces without a fixed layout accept everything.
    fn check_uniform(&self, _name: &str, _kind: UniformKind, _len: usize) -> Result<(), RippleError> {
        Ok(())
    }
}

impl<S: RippleSurface + ?Sized> RippleSurface for &mut S {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) -> Result<(), RippleError> {
        (**self).set_vector_array(name, values)
    }

    fn set_float_array(&mut self, name: &str, values: &[f32]) -> Result<(), RippleError> {
        (**self).set_float_array(name, values)
    }

    fn set_float(&mut self, name: &str, value: f32) -> Result<(), RippleError> {
        (**self).set_float(name, value)
    }

    fn check_uniform(&self, name: &str, kind: UniformKind, len: usize) -> Result<(), RippleError> {
        (**self).check_uniform(name, kind, len)
    }
}
