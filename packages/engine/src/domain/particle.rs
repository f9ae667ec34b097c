//! A single drifting point with a fading trail.
//!
//! `update` is the whole state transition for one frame (reflection,
//! pointer repulsion, drift, trail, occlusion); `draw` only reads.

use crate::core::geometry::Vec2;
use crate::core::trail::TrailBuffer;
use crate::error::EngineError;
use crate::render::DrawSurface;

use super::frame::FrameContext;
use super::palette::Rgb;

/// Outcome of one `update`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Behind the occluder this frame; trail was dropped.
    Occluded,
}

#[derive(Clone, Debug)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    size: f64,
    color: Rgb,
    trail: TrailBuffer,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f64, color: Rgb, trail_capacity: usize) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            trail: TrailBuffer::new(trail_capacity),
        }
    }

    pub fn position(&self) -> Vec2 { self.position }

    pub fn velocity(&self) -> Vec2 { self.velocity }

    pub fn size(&self) -> f64 { self.size }

    pub fn color(&self) -> Rgb { self.color }

    pub fn trail(&self) -> &TrailBuffer { &self.trail }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Advance one frame.
    pub fn update(&mut self, ctx: &FrameContext) -> Visibility {
        self.reflect(ctx.width, ctx.height);
        self.repel(ctx);

        // Drift applies on top of any repulsion nudge.
        self.position += self.velocity;
        self.trail.push(self.position);

        if ctx.occluder.hides(self.position) {
            self.trail.clear();
            Visibility::Occluded
        } else {
            Visibility::Visible
        }
    }

    /// Flip velocity sign when outside the surface. Position is not clamped,
    /// so a particle may overshoot before it drifts back in.
    fn reflect(&mut self, width: f64, height: f64) {
        if self.position.x > width || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > height || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Push away from the pointer, one fixed step per axis. A step that would
    /// land within `size * edge_dead_zone_factor` of an edge is dropped for
    /// that axis only.
    fn repel(&mut self, ctx: &FrameContext) {
        let Some(pointer) = ctx.pointer.position else {
            return;
        };
        if pointer.distance(self.position) >= ctx.pointer.radius + self.size {
            return;
        }

        let step = ctx.repulsion_step;
        let margin = self.size * ctx.edge_dead_zone_factor;
        let pos = &mut self.position;

        if pointer.x < pos.x && pos.x + step <= ctx.width - margin {
            pos.x += step;
        }
        if pointer.x > pos.x && pos.x - step >= margin {
            pos.x -= step;
        }
        if pointer.y < pos.y && pos.y + step <= ctx.height - margin {
            pos.y += step;
        }
        if pointer.y > pos.y && pos.y - step >= margin {
            pos.y -= step;
        }
    }

    /// Paint trail (oldest first, growing and brightening) then the head.
    /// Returns the number of circles filled; nothing is drawn while hidden.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, ctx: &FrameContext) -> Result<usize, EngineError> {
        if ctx.occluder.hides(self.position) {
            return Ok(0);
        }

        let len = self.trail.len() as f64;
        let mut calls = 0;
        for (i, p) in self.trail.iter().enumerate() {
            let t = i as f64 / len;
            surface.fill_circle(p.x, p.y, self.size * t, self.color, t)?;
            calls += 1;
        }

        surface.fill_circle(self.position.x, self.position.y, self.size, self.color, ctx.particle_alpha)?;
        Ok(calls + 1)
    }
}
