//! Field driver
//!
//! `FieldCore` owns the particle collection and the shared per-frame state
//! (surface size, pointer, occluder). Work is split the same way as the
//! frame itself:
//! - init/     - construction, seeding, settings
//! - step/     - frame tick (update pass, draw pass)
//! - commands/ - pointer input
//! - resize/   - surface resize and derived geometry
//! - perf/     - opt-in frame metrics

use crate::core::random::Xorshift32;
use crate::domain::{FieldConfig, FrameContext, Occluder, Particle, Pointer};
use crate::error::EngineError;
use crate::render::DrawSurface;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/seed.rs"]
mod seed;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "resize/resize.rs"]
mod resize;
mod facade;

pub use facade::Starfield;
pub use perf_stats::PerfStats;

/// The particle field
pub struct FieldCore {
    config: FieldConfig,

    // Surface
    width: u32,
    height: u32,

    // Shared state read by every particle
    pointer: Pointer,
    occluder: Occluder,

    // State
    particles: Vec<Particle>,
    frame: u64,
    rng: Xorshift32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FieldCore {
    /// Create a seeded field for a surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        init::create_field_core(width, height, FieldConfig::default(), Xorshift32::from_entropy())
    }

    /// Same as `new`, with a reproducible particle layout
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_field_core(width, height, FieldConfig::default(), Xorshift32::new(seed))
    }

    pub fn with_config(width: u32, height: u32, config: FieldConfig, seed: u32) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_field_core(width, height, config, Xorshift32::new(seed)))
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn pointer(&self) -> &Pointer { &self.pointer }

    pub fn occluder(&self) -> &Occluder { &self.occluder }

    pub fn config(&self) -> &FieldConfig { &self.config }

    /// Snapshot of the shared state for one frame
    pub fn frame_context(&self) -> FrameContext {
        FrameContext::new(
            self.width as f64,
            self.height as f64,
            self.pointer,
            self.occluder,
            &self.config,
        )
    }

    /// Replace tuning from JSON, then rebuild geometry and particles
    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_config_json(self, json)
    }

    pub fn get_config_json(&self) -> String {
        self.config.to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Discard every particle and generate a fresh collection
    pub fn seed(&mut self) {
        seed::seed(self);
    }

    /// Pointer moved to (x, y)
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        commands::pointer_move(self, x, y);
    }

    /// Pointer left the surface
    pub fn pointer_leave(&mut self) {
        commands::pointer_leave(self);
    }

    /// Surface resized: recompute pointer radius and occluder, then reseed
    pub fn resize(&mut self, width: u32, height: u32) {
        resize::resize(self, width, height);
    }

    /// Update pass only: one state transition for every particle.
    /// Perf stats then describe this pass alone.
    pub fn update(&mut self) {
        step::update(self);
    }

    /// Clear the surface and draw every particle, without advancing state.
    /// Perf stats then describe this pass alone.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        step::render(self, surface);
    }

    /// One frame: clear, update every particle, draw every particle.
    /// Scheduling the next frame is the host's job.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        step::tick(self, surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
