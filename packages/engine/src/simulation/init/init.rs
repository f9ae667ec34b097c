use crate::core::random::Xorshift32;
use crate::domain::{FieldConfig, Occluder, Pointer};

use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn create_field_core(width: u32, height: u32, config: FieldConfig, rng: Xorshift32) -> FieldCore {
    let (w, h) = (width as f64, height as f64);
    let mut field = FieldCore {
        pointer: Pointer::new(config.pointer_radius_for(w, h)),
        occluder: Occluder::for_surface(w, h, &config.occluder),
        config,
        width,
        height,
        particles: Vec::new(),
        frame: 0,
        rng,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    super::seed::seed(&mut field);
    field
}
