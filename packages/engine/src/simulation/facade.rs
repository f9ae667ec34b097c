use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::render::CanvasSurface;

use super::perf_stats::PerfStats;
use super::FieldCore;

/// JS handle for hosts that run their own event wiring and frame loop.
/// `mount` does both for a plain page.
#[wasm_bindgen]
pub struct Starfield {
    core: FieldCore,
}

#[wasm_bindgen]
impl Starfield {
    /// Create a seeded field for a surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: FieldCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self {
            core: FieldCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn pointer_radius(&self) -> f64 { self.core.pointer().radius }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Replace tuning with (possibly partial) JSON and reseed
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json)?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.get_config_json()
    }

    /// Mouse move handler
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(x, y);
    }

    /// Mouse leave handler
    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Resize handler. Call between frames; all particles are regenerated.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn seed(&mut self) {
        self.core.seed();
    }

    /// Advance particle state without drawing
    pub fn update(&mut self) {
        self.core.update();
    }

    /// One full frame onto a 2D canvas context
    pub fn tick(&mut self, ctx: &CanvasRenderingContext2d) {
        let mut surface = CanvasSurface::new(ctx.clone());
        self.core.tick(&mut surface);
    }
}

impl Starfield {
    pub fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }
}
