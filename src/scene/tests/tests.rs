use super::*;
use crate::domain::config::{SceneConfig, Tuning};
use crate::sprite::{force_strength, Sprite, Vec2};

fn single_sprite_scene(width: f32, height: f32) -> SceneCore {
    let config = SceneConfig {
        assets: vec!["a.png".to_string()],
        ..SceneConfig::default()
    };
    SceneCore::with_config(config, width, height)
}

fn park(scene: &mut SceneCore, pos: Vec2) {
    scene.sprites[0].pos = pos;
    scene.sprites[0].velocity = Vec2::zero();
    scene.sprites[0].spin = 0.0;
}

#[test]
fn force_strength_falls_off_linearly_and_clamps() {
    assert_eq!(force_strength(0.0, 200.0), 1.0);
    assert_eq!(force_strength(100.0, 200.0), 0.5);
    assert_eq!(force_strength(200.0, 200.0), 0.0);
    assert_eq!(force_strength(350.0, 200.0), 0.0);
}

#[test]
fn wall_bounce_reflects_and_scales_velocity() {
    let tuning = Tuning::default();
    let mut sprite = Sprite::new(
        "a.png".to_string(),
        Vec2::new(0.0, 50.0),
        Vec2::new(-1.0, 0.0),
        0.0,
        0.0,
        100.0,
    );

    sprite.update(800.0, 600.0, &tuning);

    // Bounce (x0.8) then friction (x0.9), position clamped to the wall
    assert_eq!(sprite.pos.x, 0.0);
    assert!((sprite.velocity.x - 0.72).abs() < 1e-6);
    assert_eq!(sprite.pos.y, 50.0);
}

#[test]
fn corner_hit_resolves_both_axes_in_one_frame() {
    let tuning = Tuning::default();
    let mut sprite = Sprite::new(
        "a.png".to_string(),
        Vec2::new(0.0, 0.0),
        Vec2::new(-2.0, -3.0),
        0.0,
        0.0,
        100.0,
    );

    sprite.update(800.0, 600.0, &tuning);

    assert_eq!(sprite.pos.x, 0.0);
    assert_eq!(sprite.pos.y, 0.0);
    assert!((sprite.velocity.x - 2.0 * 0.8 * 0.9).abs() < 1e-6);
    assert!((sprite.velocity.y - 3.0 * 0.8 * 0.9).abs() < 1e-6);
}

#[test]
fn damping_decays_velocity_and_spin_geometrically() {
    let tuning = Tuning::default();
    let mut sprite = Sprite::new(
        "a.png".to_string(),
        Vec2::new(900.0, 900.0),
        Vec2::new(0.5, -0.4),
        0.0,
        2.0,
        100.0,
    );

    let mut prev_speed = sprite.velocity.length();
    let mut prev_spin = sprite.spin.abs();
    for _ in 0..10 {
        // Viewport big enough that no bounce interferes
        sprite.update(2000.0, 2000.0, &tuning);
        let speed = sprite.velocity.length();
        let spin = sprite.spin.abs();
        assert!(speed < prev_speed);
        assert!(spin < prev_spin);
        prev_speed = speed;
        prev_spin = spin;
    }

    assert!((sprite.velocity.x - 0.5 * 0.9f32.powi(10)).abs() < 1e-5);
    assert!((sprite.spin - 2.0 * 0.99f32.powi(10)).abs() < 1e-5);
}

#[test]
fn force_at_or_beyond_radius_is_a_velocity_noop() {
    let tuning = Tuning::default();
    let mut sprite = Sprite::new(
        "a.png".to_string(),
        Vec2::new(400.0, 300.0),
        Vec2::new(0.25, -0.5),
        0.0,
        0.0,
        100.0,
    );

    sprite.apply_force(Vec2::new(1.0, 0.0), 200.0, &tuning);
    assert_eq!(sprite.velocity.x, 0.25);
    assert_eq!(sprite.velocity.y, -0.5);

    sprite.apply_force(Vec2::new(0.0, 1.0), 450.0, &tuning);
    assert_eq!(sprite.velocity.x, 0.25);
    assert_eq!(sprite.velocity.y, -0.5);
}

#[test]
fn tick_pushes_sprites_toward_the_cursor() {
    let mut scene = single_sprite_scene(2000.0, 2000.0);
    park(&mut scene, Vec2::new(400.0, 300.0));

    // Center is (450, 350); 150px straight to the right of it
    scene.pointer_moved(600.0, 350.0);
    scene.tick();

    // strength 0.25, force_scale 0.5, friction 0.9
    let sprite = &scene.sprites[0];
    assert!((sprite.velocity.x - 0.25 * 0.5 * 0.9).abs() < 1e-6);
    assert_eq!(sprite.velocity.y, 0.0);
    assert!((sprite.pos.x - 400.125).abs() < 1e-4);
    // Jitter lands on spin, bounded by strength and damped once
    assert!(sprite.spin.abs() <= 0.25 * 0.99 + 1e-6);
}

#[test]
fn tick_updates_sprites_outside_the_influence_radius() {
    let mut scene = single_sprite_scene(2000.0, 2000.0);
    park(&mut scene, Vec2::new(400.0, 300.0));
    scene.sprites[0].velocity = Vec2::new(1.0, 0.0);

    scene.pointer_moved(1900.0, 1900.0);
    scene.tick();

    let sprite = &scene.sprites[0];
    assert_eq!(sprite.pos.x, 401.0);
    assert!((sprite.velocity.x - 0.9).abs() < 1e-6);
    assert_eq!(sprite.spin, 0.0);
}

#[test]
fn cursor_on_sprite_center_keeps_velocity_finite() {
    let mut scene = single_sprite_scene(2000.0, 2000.0);
    park(&mut scene, Vec2::new(400.0, 300.0));

    scene.pointer_moved(450.0, 350.0);
    scene.tick();

    let sprite = &scene.sprites[0];
    // Degenerate direction collapses to zero: no velocity change, no NaN
    assert!(sprite.velocity.x.is_finite());
    assert!(sprite.velocity.y.is_finite());
    assert_eq!(sprite.velocity.x, 0.0);
    assert_eq!(sprite.velocity.y, 0.0);
    // Spin jitter still fires at full strength
    assert!(sprite.spin.abs() <= 0.99 + 1e-6);
}

#[test]
fn positions_stay_in_bounds_under_cursor_pressure() {
    let mut scene = SceneCore::new(800.0, 600.0);

    for frame in 0..500u32 {
        // Sweep the cursor across the viewport to keep forces landing
        let x = (frame % 80) as f32 * 10.0;
        let y = (frame % 60) as f32 * 10.0;
        scene.pointer_moved(x, y);
        scene.tick();

        for sprite in scene.sprites() {
            assert!(sprite.pos.x >= 0.0 && sprite.pos.x <= 700.0);
            assert!(sprite.pos.y >= 0.0 && sprite.pos.y <= 500.0);
        }
    }
    assert_eq!(scene.frame(), 500);
}

#[test]
fn same_seed_replays_the_same_initial_state() {
    let a = SceneCore::new(800.0, 600.0);
    let b = SceneCore::new(800.0, 600.0);

    assert_eq!(a.sprite_count(), 12);
    for (sa, sb) in a.sprites().iter().zip(b.sprites().iter()) {
        assert_eq!(sa.pos.x, sb.pos.x);
        assert_eq!(sa.pos.y, sb.pos.y);
        assert_eq!(sa.velocity.x, sb.velocity.x);
        assert_eq!(sa.velocity.y, sb.velocity.y);
        assert_eq!(sa.rotation, sb.rotation);
        assert_eq!(sa.spin, sb.spin);
    }
}

#[test]
fn different_seeds_diverge() {
    let config = SceneConfig {
        seed: 777,
        ..SceneConfig::default()
    };
    let a = SceneCore::new(800.0, 600.0);
    let b = SceneCore::with_config(config, 800.0, 600.0);

    let differs = a
        .sprites()
        .iter()
        .zip(b.sprites().iter())
        .any(|(sa, sb)| sa.pos.x != sb.pos.x || sa.pos.y != sb.pos.y);
    assert!(differs);
}

#[test]
fn resize_clamps_positions_but_not_velocity() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.tick();

    let velocities: Vec<(f32, f32)> = scene
        .sprites()
        .iter()
        .map(|s| (s.velocity.x, s.velocity.y))
        .collect();

    scene.viewport_resized(300.0, 200.0);

    assert_eq!(scene.width(), 300.0);
    assert_eq!(scene.height(), 200.0);
    for (sprite, (vx, vy)) in scene.sprites().iter().zip(velocities) {
        assert!(sprite.pos.x <= 200.0);
        assert!(sprite.pos.y <= 100.0);
        assert_eq!(sprite.velocity.x, vx);
        assert_eq!(sprite.velocity.y, vy);
    }
}

#[test]
fn pointer_moved_is_last_write_wins() {
    let mut scene = SceneCore::new(800.0, 600.0);

    scene.pointer_moved(10.0, 20.0);
    scene.pointer_moved(333.0, 444.0);

    assert_eq!(scene.cursor(), (333.0, 444.0));
}

#[test]
fn perf_stats_populate_when_enabled() {
    let mut scene = SceneCore::new(800.0, 600.0);
    scene.enable_perf_metrics(true);

    scene.pointer_moved(400.0, 300.0);
    scene.tick();

    let stats = scene.get_perf_stats();
    assert_eq!(stats.sprite_count(), 12);
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.sprites_affected() <= 12);
}
