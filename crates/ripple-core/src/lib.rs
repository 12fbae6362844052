pub mod clock;
pub mod constants;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod material;
pub mod params;
pub mod projection;
pub mod rect;
pub mod slots;
pub mod surface;
pub mod tracker;
pub mod uniforms;

pub static RIPPLE_WGSL: &str = include_str!("../shaders/ripple.wgsl");

pub use clock::*;
pub use constants::*;
pub use error::RippleError;
pub use material::*;
pub use params::*;
pub use projection::*;
pub use rect::Rect;
pub use slots::*;
pub use surface::{RippleSurface, UniformKind};
pub use tracker::*;
pub use uniforms::RippleUniforms;
