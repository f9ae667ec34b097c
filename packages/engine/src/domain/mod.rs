//! Field domain: particles, the occluding planet, the pointer, and tuning.

pub mod config;
pub mod frame;
pub mod occluder;
pub mod palette;
pub mod particle;
pub mod pointer;

pub use config::{FieldConfig, OccluderConfig};
pub use frame::FrameContext;
pub use occluder::Occluder;
pub use palette::Rgb;
pub use particle::{Particle, Visibility};
pub use pointer::Pointer;
