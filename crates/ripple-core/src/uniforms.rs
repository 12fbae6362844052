use crate::constants::{
    CENTER_ORIGIN, DEFAULT_ASPECT_RATIO, INACTIVE_START_TIME, RIPPLE_SLOTS,
    UNIFORM_ASPECT_RATIO, UNIFORM_RIPPLE_AMPLITUDE, UNIFORM_RIPPLE_CENTERS,
    UNIFORM_RIPPLE_DECAY, UNIFORM_RIPPLE_FREQUENCY, UNIFORM_RIPPLE_SPEED,
    UNIFORM_RIPPLE_START_TIMES,
};
use crate::material::MaterialInstance;

/// GPU layout of the ripple uniform block (`RippleUniforms` in ripple.wgsl).
///
/// Start times are packed into one vec4 because uniform arrays of scalars
/// need a 16-byte stride in WGSL. `wave` is `(speed, frequency, decay, amplitude)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RippleUniforms {
    pub centers: [[f32; 4]; RIPPLE_SLOTS],
    pub start_times: [f32; RIPPLE_SLOTS],
    pub resolution: [f32; 2],
    pub time: f32,
    pub aspect_ratio: f32,
    pub wave: [f32; 4],
}

impl RippleUniforms {
    /// Snapshot `material` for upload. Missing or mis-sized entries fall back
    /// to the idle defaults.
    pub fn pack(material: &MaterialInstance, time: f32, resolution: [f32; 2]) -> Self {
        let mut centers = [CENTER_ORIGIN; RIPPLE_SLOTS];
        if let Some(src) = material.vector_array(UNIFORM_RIPPLE_CENTERS) {
            for (dst, c) in centers.iter_mut().zip(src) {
                *dst = c.to_array();
            }
        }
        let mut start_times = [INACTIVE_START_TIME; RIPPLE_SLOTS];
        if let Some(src) = material.float_array(UNIFORM_RIPPLE_START_TIMES) {
            for (dst, t) in start_times.iter_mut().zip(src) {
                *dst = *t;
            }
        }
        let f = |name: &str| material.float(name).unwrap_or(0.0);
        Self {
            centers,
            start_times,
            resolution,
            time,
            aspect_ratio: material
                .float(UNIFORM_ASPECT_RATIO)
                .unwrap_or(DEFAULT_ASPECT_RATIO),
            wave: [
                f(UNIFORM_RIPPLE_SPEED),
                f(UNIFORM_RIPPLE_FREQUENCY),
                f(UNIFORM_RIPPLE_DECAY),
                f(UNIFORM_RIPPLE_AMPLITUDE),
            ],
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Byte offset and bytes of the per-frame fields (`resolution`, `time`).
    ///
    /// Lets a renderer refresh the clock every frame and re-upload the whole
    /// block only when the material changed.
    pub fn frame_bytes(&self) -> (u64, &[u8]) {
        let start = std::mem::offset_of!(RippleUniforms, resolution);
        let end = std::mem::offset_of!(RippleUniforms, aspect_ratio);
        (start as u64, &self.as_bytes()[start..end])
    }
}
