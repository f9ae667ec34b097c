use crate::core::geometry::Vec2;
use crate::core::random::Xorshift32;
use crate::domain::{FieldConfig, Particle};

use super::FieldCore;

/// Replace the whole collection with floor(area / divisor) new particles.
pub(super) fn seed(field: &mut FieldCore) {
    let (w, h) = (field.width as f64, field.height as f64);
    let count = field.config.particle_count_for(w, h);

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(spawn_particle(&mut field.rng, &field.config, w, h));
    }
    field.particles = particles;

    log::debug!("seeded {} particles for {}x{}", count, field.width, field.height);
}

/// Random size first; the position margin depends on it.
fn spawn_particle(rng: &mut Xorshift32, config: &FieldConfig, width: f64, height: f64) -> Particle {
    let size = rng.range(config.size_min, config.size_max);
    let margin = size * config.margin_factor;
    let x = axis_position(rng, margin, width);
    let y = axis_position(rng, margin, height);
    let dx = rng.range(config.velocity_x_min, config.velocity_x_max);
    let dy = rng.range(config.velocity_y_min, config.velocity_y_max);
    let color = config.palette[rng.index(config.palette.len())];

    Particle::new(Vec2::new(x, y), Vec2::new(dx, dy), size, color, config.trail_capacity)
}

/// Uniform in [margin, extent - margin). An axis narrower than both margins
/// collapses to its midpoint; the draw is still consumed.
fn axis_position(rng: &mut Xorshift32, margin: f64, extent: f64) -> f64 {
    let mid = extent.max(0.0) / 2.0;
    rng.range(margin.min(mid), (extent - margin).max(mid))
}
