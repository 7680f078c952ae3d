use crate::sprite::{force_strength, Vec2};

use super::{forces, random, PerfTimer, SceneCore};

/// One frame: cursor forces first, then integration, for every sprite.
///
/// Two passes over the same collection are equivalent to the per-sprite
/// force-then-update order because sprites never interact with each other;
/// the split exists so each phase can be timed separately.
pub(super) fn tick(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.sprite_count = scene.sprites.len() as u32;
        scene.perf_stats.frame = scene.frame;
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let cursor = Vec2::new(scene.cursor_x, scene.cursor_y);

    // === FORCE PASS ===
    if perf_on {
        let t0 = PerfTimer::start();
        let affected = apply_cursor_forces(scene, cursor);
        scene.perf_stats.forces_ms = t0.elapsed_ms();
        scene.perf_stats.sprites_affected = affected;
    } else {
        apply_cursor_forces(scene, cursor);
    }

    // === INTEGRATE PASS ===
    // Runs for every sprite, whether or not a force landed this frame
    if perf_on {
        let t0 = PerfTimer::start();
        integrate(scene);
        scene.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate(scene);
    }

    if perf_on {
        if let Some(start) = tick_start {
            scene.perf_stats.tick_ms = start.elapsed_ms();
        }
    }

    scene.frame += 1;
}

/// Push every sprite within the influence radius away from / toward the
/// cursor. Returns how many sprites were affected.
fn apply_cursor_forces(scene: &mut SceneCore, cursor: Vec2) -> u32 {
    let tuning = scene.tuning;
    let mut affected = 0u32;

    for sprite in scene.sprites.iter_mut() {
        let (dir, distance) = forces::cursor_delta(cursor, sprite.center());
        if distance < tuning.influence_radius {
            sprite.apply_force(dir, distance, &tuning);

            // Rotational jitter scales with force strength; drawn from the
            // scene RNG so a fixed seed replays the whole run
            let strength = force_strength(distance, tuning.influence_radius);
            let jitter = random::rand_symmetric(&mut scene.rng_state) * strength;
            sprite.apply_spin_jitter(jitter);

            affected += 1;
        }
    }

    affected
}

fn integrate(scene: &mut SceneCore) {
    let tuning = scene.tuning;
    let (width, height) = (scene.width, scene.height);

    for sprite in scene.sprites.iter_mut() {
        sprite.update(width, height, &tuning);
    }
}
