use crate::domain::FieldConfig;
use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn enable_perf_metrics(field: &mut FieldCore, enabled: bool) {
    field.perf_enabled = enabled;
    if !enabled {
        field.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(field: &FieldCore) -> PerfStats {
    field.perf_stats.clone()
}

/// A rejected config leaves the running field untouched.
pub(super) fn load_config_json(field: &mut FieldCore, json: &str) -> Result<(), EngineError> {
    let config = FieldConfig::from_json(json)?;
    field.config = config;
    super::resize::recompute_geometry(field);
    super::seed::seed(field);
    log::info!("field config loaded ({} particles)", field.particles.len());
    Ok(())
}
