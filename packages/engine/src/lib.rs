//! Starfield Engine - drifting particle field rendered to a 2D canvas from WASM
//!
//! Architecture:
//! - core/       - geometry, trail ring buffer, random source
//! - domain/     - particles, planet occluder, pointer, tuning
//! - render/     - drawing surface seam (canvas + recording)
//! - simulation/ - field driver: seeding, frame tick, input, resize
//! - host/       - browser wiring (wasm32 only)

pub mod core;
pub mod domain;
pub mod error;
pub mod render;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
pub mod host;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logger
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("starfield engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{FieldConfig, Particle, Rgb};
pub use error::EngineError;
pub use render::{DrawCommand, DrawSurface, RecordingSurface};
pub use simulation::{FieldCore, PerfStats, Starfield};

#[cfg(target_arch = "wasm32")]
pub use host::mount;
