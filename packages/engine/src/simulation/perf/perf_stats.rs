use wasm_bindgen::prelude::*;

/// Metrics for the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) update_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) particle_count: u32,
    pub(super) particles_updated: u32,
    pub(super) particles_drawn: u32,
    pub(super) particles_occluded: u32,
    pub(super) draw_calls: u32,
    pub(super) draw_failures: u32,
    pub(super) skipped_non_finite: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn particles_updated(&self) -> u32 { self.particles_updated }
    #[wasm_bindgen(getter)]
    pub fn particles_drawn(&self) -> u32 { self.particles_drawn }
    #[wasm_bindgen(getter)]
    pub fn particles_occluded(&self) -> u32 { self.particles_occluded }
    #[wasm_bindgen(getter)]
    pub fn draw_calls(&self) -> u32 { self.draw_calls }
    #[wasm_bindgen(getter)]
    pub fn draw_failures(&self) -> u32 { self.draw_failures }
    #[wasm_bindgen(getter)]
    pub fn skipped_non_finite(&self) -> u32 { self.skipped_non_finite }
}
