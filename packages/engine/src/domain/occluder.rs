use crate::core::geometry::{circle_contains, Vec2};

use super::config::OccluderConfig;

/// The "planet": a static disc that hides every particle inside it.
///
/// Always rebuilt wholesale from the surface size; never patched in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occluder {
    pub center: Vec2,
    pub radius: f64,
}

impl Occluder {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn for_surface(width: f64, height: f64, config: &OccluderConfig) -> Self {
        Self {
            center: Vec2::new(width * config.center_x_ratio, height * config.center_y_ratio),
            radius: height * config.radius_ratio,
        }
    }

    #[inline]
    pub fn hides(&self, point: Vec2) -> bool {
        circle_contains(self.center, self.radius, point)
    }
}
