//! Field tuning.
//!
//! Every field has a default, so hosts may pass partial JSON such as
//! `{"density_divisor": 8000}`.

use serde::{Deserialize, Serialize};

use crate::core::trail::TRAIL_CAPACITY;
use crate::error::EngineError;

use super::palette::{Rgb, DEFAULT_PALETTE};

const MAX_TRAIL_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccluderConfig {
    pub center_x_ratio: f64,
    pub center_y_ratio: f64,
    /// Relative to surface height
    pub radius_ratio: f64,
}

impl Default for OccluderConfig {
    fn default() -> Self {
        Self {
            center_x_ratio: 0.86,
            center_y_ratio: 0.5,
            radius_ratio: 0.85,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface area per particle
    pub density_divisor: f64,
    pub trail_capacity: usize,
    pub size_min: f64,
    pub size_max: f64,
    pub velocity_x_min: f64,
    pub velocity_x_max: f64,
    pub velocity_y_min: f64,
    pub velocity_y_max: f64,
    /// Seeding keeps `size * margin_factor` away from every edge
    pub margin_factor: f64,
    pub repulsion_step: f64,
    /// Repulsion is suppressed within `size * edge_dead_zone_factor` of an edge
    pub edge_dead_zone_factor: f64,
    pub pointer_radius_divisor: f64,
    pub occluder: OccluderConfig,
    pub particle_alpha: f64,
    pub palette: Vec<Rgb>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: 15000.0,
            trail_capacity: TRAIL_CAPACITY,
            size_min: 1.0,
            size_max: 3.0,
            velocity_x_min: -0.5,
            velocity_x_max: -0.1,
            velocity_y_min: -0.2,
            velocity_y_max: 0.2,
            margin_factor: 2.0,
            repulsion_step: 2.0,
            edge_dead_zone_factor: 10.0,
            pointer_radius_divisor: 110.0,
            occluder: OccluderConfig::default(),
            particle_alpha: 0.8,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let finite = [
            ("density_divisor", self.density_divisor),
            ("size_min", self.size_min),
            ("size_max", self.size_max),
            ("velocity_x_min", self.velocity_x_min),
            ("velocity_x_max", self.velocity_x_max),
            ("velocity_y_min", self.velocity_y_min),
            ("velocity_y_max", self.velocity_y_max),
            ("margin_factor", self.margin_factor),
            ("repulsion_step", self.repulsion_step),
            ("edge_dead_zone_factor", self.edge_dead_zone_factor),
            ("pointer_radius_divisor", self.pointer_radius_divisor),
            ("occluder.center_x_ratio", self.occluder.center_x_ratio),
            ("occluder.center_y_ratio", self.occluder.center_y_ratio),
            ("occluder.radius_ratio", self.occluder.radius_ratio),
            ("particle_alpha", self.particle_alpha),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(EngineError::Config(format!("{} must be finite", name)));
            }
        }

        if self.density_divisor <= 0.0 {
            return Err(EngineError::Config("density_divisor must be positive".into()));
        }
        if self.pointer_radius_divisor <= 0.0 {
            return Err(EngineError::Config("pointer_radius_divisor must be positive".into()));
        }
        if self.trail_capacity == 0 || self.trail_capacity > MAX_TRAIL_CAPACITY {
            return Err(EngineError::Config(format!(
                "trail_capacity must be in 1..={}",
                MAX_TRAIL_CAPACITY
            )));
        }
        if self.size_min <= 0.0 {
            return Err(EngineError::Config("size_min must be positive".into()));
        }
        let ranges = [
            ("size", self.size_min, self.size_max),
            ("velocity_x", self.velocity_x_min, self.velocity_x_max),
            ("velocity_y", self.velocity_y_min, self.velocity_y_max),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(EngineError::Config(format!("{}_min exceeds {}_max", name, name)));
            }
        }
        if self.palette.is_empty() {
            return Err(EngineError::Config("palette must not be empty".into()));
        }
        Ok(())
    }

    /// Particle count for a surface: floor(area / divisor), never negative.
    pub fn particle_count_for(&self, width: f64, height: f64) -> usize {
        let n = (width * height / self.density_divisor).floor();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Pointer influence radius: (h / d) * (w / d)
    pub fn pointer_radius_for(&self, width: f64, height: f64) -> f64 {
        (height / self.pointer_radius_divisor) * (width / self.pointer_radius_divisor)
    }
}
