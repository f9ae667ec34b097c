use crate::core::geometry::Vec2;

use super::config::FieldConfig;
use super::occluder::Occluder;
use super::pointer::Pointer;

/// Everything a particle reads during one frame.
///
/// Built by the driver once per tick from the current surface, pointer and
/// occluder; input events landing mid-frame are seen on the next tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub width: f64,
    pub height: f64,
    pub pointer: Pointer,
    pub occluder: Occluder,
    pub repulsion_step: f64,
    pub edge_dead_zone_factor: f64,
    pub particle_alpha: f64,
}

impl FrameContext {
    pub fn new(width: f64, height: f64, pointer: Pointer, occluder: Occluder, config: &FieldConfig) -> Self {
        Self {
            width,
            height,
            pointer,
            occluder,
            repulsion_step: config.repulsion_step,
            edge_dead_zone_factor: config.edge_dead_zone_factor,
            particle_alpha: config.particle_alpha,
        }
    }

    /// Default tuning, pointer absent, occluder parked far off-surface.
    pub fn unobstructed(width: f64, height: f64) -> Self {
        let config = FieldConfig::default();
        let far = Occluder::new(Vec2::new(-1.0e9, -1.0e9), 0.0);
        Self::new(width, height, Pointer::default(), far, &config)
    }
}
