//! Shared material templates and their per-element instances.
//!
//! A [`RippleMaterial`] declares which uniforms exist, their kind, their array
//! length and default value. [`RippleMaterial::instantiate`] copies that
//! layout into a [`MaterialInstance`], which is what a tracker writes to.
//! Writes are validated against the declared layout and never reach the
//! template or sibling instances.

use crate::constants::{
    center_origin_vec4, DEFAULT_ASPECT_RATIO, INACTIVE_START_TIME, RIPPLE_SLOTS,
    UNIFORM_ASPECT_RATIO, UNIFORM_RIPPLE_AMPLITUDE, UNIFORM_RIPPLE_CENTERS,
    UNIFORM_RIPPLE_DECAY, UNIFORM_RIPPLE_FREQUENCY, UNIFORM_RIPPLE_SPEED,
    UNIFORM_RIPPLE_START_TIMES,
};
use crate::error::RippleError;
use crate::params::WaveParams;
use crate::surface::{RippleSurface, UniformKind};
use glam::Vec4;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    FloatArray(Vec<f32>),
    VectorArray(Vec<Vec4>),
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::FloatArray(_) => UniformKind::FloatArray,
            UniformValue::VectorArray(_) => UniformKind::VectorArray,
        }
    }

    fn len(&self) -> usize {
        match self {
            UniformValue::Float(_) => 1,
            UniformValue::FloatArray(v) => v.len(),
            UniformValue::VectorArray(v) => v.len(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RippleMaterial {
    label: String,
    shader_source: &'static str,
    defaults: BTreeMap<String, UniformValue>,
}

impl RippleMaterial {
    pub fn new(label: impl Into<String>, shader_source: &'static str) -> Self {
        Self {
            label: label.into(),
            shader_source,
            defaults: BTreeMap::new(),
        }
    }

    pub fn with_uniform(mut self, name: impl Into<String>, value: UniformValue) -> Self {
        self.defaults.insert(name.into(), value);
        self
    }

    /// Layout expected by the bundled ripple shader.
    pub fn ripple(wave: &WaveParams) -> Self {
        Self::new("ripple_material", crate::RIPPLE_WGSL)
            .with_uniform(
                UNIFORM_RIPPLE_CENTERS,
                UniformValue::VectorArray(vec![center_origin_vec4(); RIPPLE_SLOTS]),
            )
            .with_uniform(
                UNIFORM_RIPPLE_START_TIMES,
                UniformValue::FloatArray(vec![INACTIVE_START_TIME; RIPPLE_SLOTS]),
            )
            .with_uniform(UNIFORM_ASPECT_RATIO, UniformValue::Float(DEFAULT_ASPECT_RATIO))
            .with_uniform(UNIFORM_RIPPLE_SPEED, UniformValue::Float(wave.speed))
            .with_uniform(UNIFORM_RIPPLE_FREQUENCY, UniformValue::Float(wave.frequency))
            .with_uniform(UNIFORM_RIPPLE_DECAY, UniformValue::Float(wave.decay))
            .with_uniform(UNIFORM_RIPPLE_AMPLITUDE, UniformValue::Float(wave.amplitude))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shader_source(&self) -> &'static str {
        self.shader_source
    }

    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.defaults.get(name)
    }

    pub fn instantiate(&self) -> MaterialInstance {
        log::debug!("[material] instantiating {}", self.label);
        MaterialInstance {
            label: format!("{} (instance)", self.label),
            shader_source: self.shader_source,
            values: self.defaults.clone(),
            dirty: true,
        }
    }
}

/// Per-element copy of a [`RippleMaterial`].
///
/// Starts dirty so the first frame uploads it; afterwards only writes that
/// change a value mark it dirty again.
#[derive(Clone, Debug)]
pub struct MaterialInstance {
    label: String,
    shader_source: &'static str,
    values: BTreeMap<String, UniformValue>,
    dirty: bool,
}

impl MaterialInstance {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shader_source(&self) -> &'static str {
        self.shader_source
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name)? {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn float_array(&self, name: &str) -> Option<&[f32]> {
        match self.values.get(name)? {
            UniformValue::FloatArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn vector_array(&self, name: &str) -> Option<&[Vec4]> {
        match self.values.get(name)? {
            UniformValue::VectorArray(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn write(&mut self, name: &str, value: UniformValue) -> Result<(), RippleError> {
        self.check_uniform(name, value.kind(), value.len())?;
        if let Some(slot) = self.values.get_mut(name) {
            if *slot != value {
                *slot = value;
                self.dirty = true;
            }
        }
        Ok(())
    }
}

impl RippleSurface for MaterialInstance {
    fn set_vector_array(&mut self, name: &str, values: &[Vec4]) -> Result<(), RippleError> {
        self.write(name, UniformValue::VectorArray(values.to_vec()))
    }

    fn set_float_array(&mut self, name: &str, values: &[f32]) -> Result<(), RippleError> {
        self.write(name, UniformValue::FloatArray(values.to_vec()))
    }

    fn set_float(&mut self, name: &str, value: f32) -> Result<(), RippleError> {
        self.write(name, UniformValue::Float(value))
    }

    fn check_uniform(&self, name: &str, kind: UniformKind, len: usize) -> Result<(), RippleError> {
        let declared = self
            .values
            .get(name)
            .ok_or_else(|| RippleError::UnknownUniform(name.to_string()))?;
        if declared.kind() != kind {
            return Err(RippleError::UniformKindMismatch {
                name: name.to_string(),
            });
        }
        if declared.len() != len {
            return Err(RippleError::UniformLengthMismatch {
                name: name.to_string(),
                expected: declared.len(),
                got: len,
            });
        }
        Ok(())
    }
}
