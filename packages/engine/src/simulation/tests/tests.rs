use super::*;
use crate::core::geometry::Vec2;
use crate::domain::palette::DEFAULT_PALETTE;
use crate::domain::Rgb;
use crate::render::{DrawCommand, RecordingSurface};

#[test]
fn seeding_density_bounds_and_palette() {
    let field = FieldCore::with_seed(1500, 1000, 7);
    assert_eq!(field.particle_count(), 100);

    for p in field.particles() {
        let size = p.size();
        assert!((1.0..3.0).contains(&size));
        let margin = size * 2.0;
        let pos = p.position();
        assert!(pos.x > margin && pos.x < 1500.0 - margin, "x out of range: {:?}", pos);
        assert!(pos.y > margin && pos.y < 1000.0 - margin, "y out of range: {:?}", pos);

        let v = p.velocity();
        assert!((-0.5..-0.1).contains(&v.x));
        assert!((-0.2..0.2).contains(&v.y));

        assert!(DEFAULT_PALETTE.contains(&p.color()));
        assert!(p.trail().is_empty());
    }
}

#[test]
fn seeding_is_reproducible_per_seed() {
    let a = FieldCore::with_seed(800, 600, 99);
    let b = FieldCore::with_seed(800, 600, 99);
    let pa: Vec<_> = a.particles().iter().map(|p| p.position()).collect();
    let pb: Vec<_> = b.particles().iter().map(|p| p.position()).collect();
    assert_eq!(pa, pb);
}

#[test]
fn palette_pick_favors_white() {
    let field = FieldCore::with_seed(3000, 3000, 3);
    let white = Rgb::new(255, 255, 255);
    let whites = field.particles().iter().filter(|p| p.color() == white).count();
    let n = field.particle_count();
    assert_eq!(n, 600);
    // Expect ~50%; generous bounds.
    assert!(whites > n * 35 / 100 && whites < n * 65 / 100, "whites = {}", whites);
}

#[test]
fn empty_surface_gives_empty_animation() {
    let mut field = FieldCore::with_seed(0, 0, 1);
    assert_eq!(field.particle_count(), 0);

    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    assert_eq!(surface.commands, vec![DrawCommand::Clear { width: 0.0, height: 0.0 }]);
    assert_eq!(field.frame(), 1);
}

#[test]
fn narrow_surface_keeps_particles_inside() {
    let field = FieldCore::with_seed(5, 40000, 9);
    assert_eq!(field.particle_count(), 13);
    for p in field.particles() {
        let pos = p.position();
        let margin = p.size() * 2.0;
        assert!(pos.x > 0.0 && pos.x < 5.0, "x off surface: {:?}", pos);
        if margin >= 2.5 {
            assert_eq!(pos.x, 2.5);
        }
        assert!(pos.y >= margin && pos.y < 40000.0 - margin, "y out of range: {:?}", pos);
    }
}

#[test]
fn derived_geometry_from_surface() {
    let field = FieldCore::with_seed(1100, 550, 1);
    assert_eq!(field.pointer().radius, 50.0);
    assert!(field.pointer().position.is_none());
    assert_eq!(field.occluder().center, Vec2::new(1100.0 * 0.86, 275.0));
    assert_eq!(field.occluder().radius, 550.0 * 0.85);
}

#[test]
fn tick_clears_first_then_draws_visible_particles() {
    let mut field = FieldCore::with_seed(1500, 1000, 11);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);

    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.commands[0], DrawCommand::Clear { width: 1500.0, height: 1000.0 });

    // First frame: every visible particle has a one-entry trail + head.
    let occluder = *field.occluder();
    let visible = field
        .particles()
        .iter()
        .filter(|p| !occluder.hides(p.position()))
        .count();
    assert_eq!(surface.fill_count(), visible * 2);
}

#[test]
fn occluded_particles_lose_trail() {
    let mut field = FieldCore::with_seed(1500, 1000, 5);
    let mut surface = RecordingSurface::new();
    for _ in 0..30 {
        field.tick(&mut surface);
    }
    let occluder = *field.occluder();
    for p in field.particles() {
        if occluder.hides(p.position()) {
            assert!(p.trail().is_empty());
        } else {
            assert!(p.trail().len() <= 20);
        }
    }
}

#[test]
fn pointer_events_round_trip() {
    let mut field = FieldCore::with_seed(400, 400, 1);
    field.pointer_move(12.5, 40.0);
    assert_eq!(field.pointer().position, Some(Vec2::new(12.5, 40.0)));
    assert_eq!(field.frame_context().pointer.position, Some(Vec2::new(12.5, 40.0)));
    field.pointer_leave();
    assert!(field.pointer().position.is_none());
}

#[test]
fn pointer_repels_particle_within_reach() {
    let mut field = FieldCore::with_seed(1000, 1000, 1);
    field.particles = vec![Particle::new(
        Vec2::new(300.0, 300.0),
        Vec2::zero(),
        2.0,
        Rgb::new(255, 255, 255),
        20,
    )];
    field.pointer_move(290.0, 310.0);
    field.update();
    assert_eq!(field.particles()[0].position(), Vec2::new(302.0, 298.0));

    field.pointer_leave();
    field.update();
    assert_eq!(field.particles()[0].position(), Vec2::new(302.0, 298.0));
}

#[test]
fn resize_discards_everything_and_reseeds() {
    let mut field = FieldCore::with_seed(1500, 1000, 21);
    let mut surface = RecordingSurface::new();
    for _ in 0..5 {
        field.tick(&mut surface);
    }
    field.pointer_move(10.0, 10.0);
    let before: Vec<_> = field.particles().iter().map(|p| p.position()).collect();

    field.resize(3000, 500);
    assert_eq!(field.width(), 3000);
    assert_eq!(field.height(), 500);
    assert_eq!(field.particle_count(), 100);
    assert!(field.particles().iter().all(|p| p.trail().is_empty()));
    assert!(field.particles().iter().all(|p| !before.contains(&p.position())));

    assert_eq!(field.pointer().radius, (500.0 / 110.0) * (3000.0 / 110.0));
    assert_eq!(field.pointer().position, Some(Vec2::new(10.0, 10.0)));
    assert_eq!(field.occluder().center, Vec2::new(3000.0 * 0.86, 250.0));
    assert_eq!(field.occluder().radius, 500.0 * 0.85);

    field.resize(600, 400);
    assert_eq!(field.particle_count(), 16);
}

#[test]
fn load_config_reseeds_with_new_tuning() {
    let mut field = FieldCore::with_seed(1500, 1000, 2);
    field
        .load_config_json(r#"{"density_divisor": 30000, "trail_capacity": 5, "palette": [{"r": 1, "g": 2, "b": 3}]}"#)
        .expect("valid config");
    assert_eq!(field.particle_count(), 50);
    assert!(field.particles().iter().all(|p| p.color() == Rgb::new(1, 2, 3)));
    assert!(field.particles().iter().all(|p| p.trail().capacity() == 5));
}

#[test]
fn rejected_config_keeps_running_field() {
    let mut field = FieldCore::with_seed(1500, 1000, 2);
    let before = field.config().clone();
    assert!(field.load_config_json(r#"{"trail_capacity": 0}"#).is_err());
    assert_eq!(field.config(), &before);
    assert_eq!(field.particle_count(), 100);
}

#[test]
fn with_config_validates() {
    let mut config = FieldConfig::default();
    config.palette.clear();
    assert!(FieldCore::with_config(100, 100, config, 1).is_err());
}

#[test]
fn draw_failures_are_isolated_per_particle() {
    let mut field = FieldCore::with_seed(1000, 1000, 1);
    let color = Rgb::new(255, 255, 255);
    field.particles = (0..3)
        .map(|i| Particle::new(Vec2::new(10.0 + i as f64 * 10.0, 100.0), Vec2::zero(), 2.0, color, 20))
        .collect();
    field.enable_perf_metrics(true);

    // Only the very first fill succeeds; every particle is still visited.
    let mut surface = RecordingSurface::failing_after(1);
    field.tick(&mut surface);
    let stats = field.get_perf_stats();
    assert_eq!(stats.draw_failures(), 3);
    assert_eq!(surface.fill_count(), 1);
    assert_eq!(stats.particles_updated(), 3);
    assert_eq!(field.frame(), 1);
}

#[test]
fn non_finite_particles_are_skipped() {
    let mut field = FieldCore::with_seed(1000, 1000, 1);
    let color = Rgb::new(255, 255, 255);
    field.particles = vec![
        Particle::new(Vec2::new(f64::NAN, 100.0), Vec2::zero(), 2.0, color, 20),
        Particle::new(Vec2::new(100.0, 100.0), Vec2::zero(), 2.0, color, 20),
    ];
    field.enable_perf_metrics(true);

    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    let stats = field.get_perf_stats();
    assert_eq!(stats.skipped_non_finite(), 1);
    assert_eq!(stats.particles_drawn(), 1);
    assert_eq!(surface.fill_count(), 2);
}

#[test]
fn perf_stats_zero_when_disabled() {
    let mut field = FieldCore::with_seed(1500, 1000, 1);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    assert_eq!(field.get_perf_stats(), PerfStats::default());

    field.enable_perf_metrics(true);
    field.tick(&mut surface);
    let stats = field.get_perf_stats();
    assert_eq!(stats.particle_count(), 100);
    assert_eq!(stats.particles_updated(), 100);
    assert_eq!(
        stats.particles_drawn() + stats.particles_occluded(),
        100
    );
    assert!(stats.frame_ms() >= 0.0);

    field.enable_perf_metrics(false);
    assert_eq!(field.get_perf_stats(), PerfStats::default());
}

#[test]
fn standalone_passes_start_fresh_perf_snapshots() {
    let mut field = FieldCore::with_seed(1500, 1000, 1);
    field.enable_perf_metrics(true);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    assert!(field.get_perf_stats().draw_calls() > 0);

    field.update();
    let stats = field.get_perf_stats();
    assert_eq!(stats.particles_updated(), 100);
    assert_eq!(stats.draw_calls(), 0);
    assert_eq!(stats.particles_drawn(), 0);
    assert_eq!(stats.draw_ms(), 0.0);

    field.render(&mut surface);
    let stats = field.get_perf_stats();
    assert!(stats.draw_calls() > 0);
    assert_eq!(stats.particles_updated(), 0);
    assert_eq!(stats.update_ms(), 0.0);
}

#[test]
fn render_does_not_advance_state() {
    let mut field = FieldCore::with_seed(1500, 1000, 4);
    let before: Vec<_> = field.particles().iter().map(|p| p.position()).collect();
    let mut surface = RecordingSurface::new();
    field.render(&mut surface);
    let after: Vec<_> = field.particles().iter().map(|p| p.position()).collect();
    assert_eq!(before, after);
    assert_eq!(field.frame(), 0);
    assert_eq!(surface.clear_count(), 1);
}
