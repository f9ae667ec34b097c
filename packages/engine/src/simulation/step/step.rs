#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{FrameContext, Particle, Visibility};
use crate::render::DrawSurface;

use super::FieldCore;

/// Milliseconds for phase timing: `Date.now()` in the browser, time since
/// first call natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Phase start stamp, only taken while perf is on.
#[inline]
fn phase_start(field: &FieldCore) -> Option<f64> {
    field.perf_enabled.then(now_ms)
}

#[inline]
fn phase_ms(start: f64) -> f64 {
    (now_ms() - start).max(0.0)
}

#[derive(Default)]
struct DrawTally {
    drawn: u32,
    calls: u32,
    failures: u32,
    skipped: u32,
}

/// Start a fresh perf snapshot so no counter carries over from an earlier pass.
fn begin_stats(field: &mut FieldCore) {
    if field.perf_enabled {
        field.perf_stats.reset();
        field.perf_stats.particle_count = field.particles.len() as u32;
    }
}

pub(super) fn tick<S: DrawSurface + ?Sized>(field: &mut FieldCore, surface: &mut S) {
    begin_stats(field);
    let frame_start = phase_start(field);

    clear(field, surface);
    update_pass(field);
    draw_pass(field, surface);
    field.frame += 1;

    if let Some(t0) = frame_start {
        field.perf_stats.frame_ms = phase_ms(t0);
    }
}

/// Standalone update pass
pub(super) fn update(field: &mut FieldCore) {
    begin_stats(field);
    update_pass(field);
}

/// Clear + draw without touching particle state
pub(super) fn render<S: DrawSurface + ?Sized>(field: &mut FieldCore, surface: &mut S) {
    begin_stats(field);
    clear(field, surface);
    draw_pass(field, surface);
}

fn clear<S: DrawSurface + ?Sized>(field: &FieldCore, surface: &mut S) {
    if let Err(e) = surface.clear(field.width as f64, field.height as f64) {
        log::warn!("surface clear failed: {}", e);
    }
}

/// Particles only read the frame snapshot, so order does not matter here;
/// with `parallel` the pass runs on the rayon pool.
fn update_pass(field: &mut FieldCore) {
    let ctx = field.frame_context();
    let t0 = phase_start(field);

    let occluded = update_all(&mut field.particles, &ctx);

    if let Some(t0) = t0 {
        field.perf_stats.update_ms = phase_ms(t0);
        field.perf_stats.particles_updated = field.particles.len() as u32;
        field.perf_stats.particles_occluded = occluded;
    }
}

#[cfg(feature = "parallel")]
fn update_all(particles: &mut [Particle], ctx: &FrameContext) -> u32 {
    particles
        .par_iter_mut()
        .map(|p| (p.update(ctx) == Visibility::Occluded) as u32)
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn update_all(particles: &mut [Particle], ctx: &FrameContext) -> u32 {
    particles
        .iter_mut()
        .map(|p| (p.update(ctx) == Visibility::Occluded) as u32)
        .sum()
}

/// Index order. One bad particle never stops the rest of the frame.
fn draw_pass<S: DrawSurface + ?Sized>(field: &mut FieldCore, surface: &mut S) {
    let ctx = field.frame_context();
    let t0 = phase_start(field);

    let mut tally = DrawTally::default();
    let mut first_error = None;
    for particle in &field.particles {
        if !particle.is_finite() {
            tally.skipped += 1;
            continue;
        }
        match particle.draw(surface, &ctx) {
            Ok(0) => {}
            Ok(calls) => {
                tally.drawn += 1;
                tally.calls += calls as u32;
            }
            Err(e) => {
                tally.failures += 1;
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        log::warn!("{} particle draw(s) failed this frame, first: {}", tally.failures, e);
    }

    if let Some(t0) = t0 {
        let stats = &mut field.perf_stats;
        stats.draw_ms = phase_ms(t0);
        stats.particles_drawn = tally.drawn;
        stats.draw_calls = tally.calls;
        stats.draw_failures = tally.failures;
        stats.skipped_non_finite = tally.skipped;
    }
}
