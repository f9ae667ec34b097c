use crate::domain::Occluder;

use super::FieldCore;

/// Full stop and restart: no particle survives a resize. The pointer
/// position is kept; only its radius follows the new size.
pub(super) fn resize(field: &mut FieldCore, width: u32, height: u32) {
    field.width = width;
    field.height = height;
    recompute_geometry(field);
    super::seed::seed(field);
    log::debug!(
        "resized to {}x{}, occluder r={:.1}, pointer r={:.1}",
        width,
        height,
        field.occluder.radius,
        field.pointer.radius
    );
}

/// Pointer radius and occluder are pure functions of surface size + config.
pub(super) fn recompute_geometry(field: &mut FieldCore) {
    let (w, h) = (field.width as f64, field.height as f64);
    field.pointer.radius = field.config.pointer_radius_for(w, h);
    field.occluder = Occluder::for_surface(w, h, &field.config.occluder);
}
