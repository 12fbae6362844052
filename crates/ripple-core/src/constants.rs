use glam::Vec4;

// Shared ripple tuning constants used by both web and native frontends.

// Slot ring
pub const RIPPLE_SLOTS: usize = 4; // max concurrent ripples; oldest is overwritten
pub const INACTIVE_START_TIME: f32 = -1000.0; // far past, so the shader treats the slot as long expired
pub const CENTER_ORIGIN: [f32; 4] = [0.5, 0.5, 0.0, 0.0]; // neutral origin for unused slots

// Uniform names written on the material instance
pub const UNIFORM_RIPPLE_CENTERS: &str = "_RippleCenters";
pub const UNIFORM_RIPPLE_START_TIMES: &str = "_RippleStartTimes";
pub const UNIFORM_ASPECT_RATIO: &str = "_AspectRatio";
pub const UNIFORM_RIPPLE_SPEED: &str = "_RippleSpeed";
pub const UNIFORM_RIPPLE_FREQUENCY: &str = "_RippleFrequency";
pub const UNIFORM_RIPPLE_DECAY: &str = "_RippleDecay";
pub const UNIFORM_RIPPLE_AMPLITUDE: &str = "_RippleAmplitude";

// Default wave shape consumed by the bundled shader
pub const DEFAULT_RIPPLE_SPEED: f32 = 0.6; // uv units per second
pub const DEFAULT_RIPPLE_FREQUENCY: f32 = 40.0; // radians per uv unit
pub const DEFAULT_RIPPLE_DECAY: f32 = 1.8; // exponential falloff per second
pub const DEFAULT_RIPPLE_AMPLITUDE: f32 = 0.012; // peak uv displacement
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

// Geometry
pub const MIN_RECT_EXTENT: f32 = 1.0; // smallest width/height accepted by the clamp policy

#[inline]
pub fn center_origin_vec4() -> Vec4 {
    Vec4::from_array(CENTER_ORIGIN)
}
