//! Per-step scene advance
//!
//! One `tick` runs the phases in a fixed order: integrate positions, resolve
//! collisions (ascending pair order), bounce off walls, advance wobble phases,
//! rebuild outlines. Exploding scenes skip physics entirely and only animate
//! the grow-and-fade transition. Deterministic given the seed and dt sequence.

use super::collision;
use super::ease;
use super::state::{BlobState, ScenePhase, SceneState};
use crate::consts::{EXPLOSION_MAX_SCALE, EXPLOSION_MIN_SCALE, FADE_IN_DURATION, SPAWN_OPACITY};

/// Advance the scene by `dt` seconds
///
/// `dt` is whatever small positive step the external driver supplies; an idle
/// scene seeds itself on the first call.
pub fn tick(scene: &mut SceneState, dt: f32) {
    if scene.phase == ScenePhase::Idle {
        scene.seed_scene();
    }
    scene.time += dt;
    match scene.phase {
        ScenePhase::Populating => step_simulation(scene, dt),
        ScenePhase::Exploding => step_explosion(scene, dt),
        // Idle was seeded above; Resetting never survives a call
        ScenePhase::Idle | ScenePhase::Resetting => {}
    }
}

fn step_simulation(scene: &mut SceneState, dt: f32) {
    // Integrate
    for blob in &mut scene.blobs {
        blob.center += blob.vel * dt;
    }
    // Resolve pairwise overlap, then contain in the arena
    collision::resolve_pairs(&mut scene.blobs);
    for blob in &mut scene.blobs {
        collision::bounce_walls(blob, &scene.config.arena);
    }
    // Fade-in and wobble
    for blob in &mut scene.blobs {
        blob.age += dt;
        let t = (blob.age / FADE_IN_DURATION).min(1.0);
        blob.opacity = SPAWN_OPACITY * ease::quad_out(t);
        blob.wobble.advance(dt, blob.min_radius, blob.max_radius);
    }
    refresh_outlines(scene);
    // Normally tripped by spawn(); covers seed counts at or above the limit
    if scene.blobs.len() >= scene.config.population_limit {
        scene.trigger_explosion();
    }
}

fn step_explosion(scene: &mut SceneState, dt: f32) {
    scene.explosion_timer += dt;
    let t = (scene.explosion_timer / scene.config.explosion_duration).min(1.0);
    let grow = ease::expo_out(t);
    let fade = ease::cubic_in(t);
    let target_min = scene.config.arena.width * EXPLOSION_MIN_SCALE;
    let target_max = scene.config.arena.width * EXPLOSION_MAX_SCALE;

    for blob in &mut scene.blobs {
        if let BlobState::Exploding {
            from_min,
            from_max,
            from_opacity,
        } = blob.state
        {
            blob.min_radius = from_min + (target_min - from_min) * grow;
            blob.max_radius = from_max + (target_max - from_max) * grow;
            blob.opacity = from_opacity * (1.0 - fade);
            blob.wobble.advance(dt, blob.min_radius, blob.max_radius);
        }
    }
    refresh_outlines(scene);

    if scene.explosion_timer >= scene.config.explosion_duration {
        scene.reset();
    }
}

fn refresh_outlines(scene: &mut SceneState) {
    let tension = scene.config.tension;
    for blob in &mut scene.blobs {
        blob.refresh_outline(tension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::{Arena, SimConfig};

    fn small_config() -> SimConfig {
        SimConfig {
            arena: Arena::new(600.0, 600.0),
            population_limit: 5,
            seed_count: 3,
            min_radius: 20.0,
            max_radius: 30.0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_first_tick_seeds_idle_scene() {
        let mut scene = SceneState::new(small_config(), 1);
        tick(&mut scene, SIM_DT);
        assert_eq!(scene.phase, ScenePhase::Populating);
        assert_eq!(scene.blobs.len(), 3);
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = SceneState::new(small_config(), 77);
        let mut b = SceneState::new(small_config(), 77);
        for step in 0..240 {
            if step == 60 {
                a.spawn(300.0, 300.0);
                b.spawn(300.0, 300.0);
            }
            tick(&mut a, SIM_DT);
            tick(&mut b, SIM_DT);
        }
        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_blobs_stay_inside_arena() {
        let mut scene = SceneState::new(small_config(), 5);
        for _ in 0..600 {
            tick(&mut scene, SIM_DT);
        }
        for blob in &scene.blobs {
            assert!(scene.config.arena.contains_disk(blob.center, blob.max_radius));
        }
    }

    #[test]
    fn test_radii_stay_within_bounds_every_step() {
        let mut scene = SceneState::new(small_config(), 8);
        for _ in 0..300 {
            tick(&mut scene, SIM_DT);
            for blob in &scene.blobs {
                assert!(blob.min_radius < blob.max_radius);
                for point in blob.wobble.points() {
                    assert!(point.radius >= blob.min_radius - 1e-3);
                    assert!(point.radius <= blob.max_radius + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_fade_in_reaches_target_and_holds() {
        let mut scene = SceneState::new(small_config(), 2);
        for _ in 0..60 {
            tick(&mut scene, SIM_DT);
        }
        for blob in &scene.blobs {
            assert!((blob.opacity - SPAWN_OPACITY).abs() < 1e-4);
        }
    }

    #[test]
    fn test_outlines_are_closed_every_step() {
        let mut scene = SceneState::new(small_config(), 6);
        for _ in 0..120 {
            tick(&mut scene, SIM_DT);
        }
        for blob in &scene.blobs {
            assert!(blob.outline.is_closed());
        }
    }

    fn explode(scene: &mut SceneState) {
        tick(scene, SIM_DT);
        scene.spawn(200.0, 200.0);
        scene.spawn(400.0, 400.0);
        assert_eq!(scene.phase, ScenePhase::Exploding);
    }

    #[test]
    fn test_exploding_blobs_stop_moving_and_grow() {
        let mut scene = SceneState::new(small_config(), 9);
        explode(&mut scene);
        let centers: Vec<_> = scene.blobs.iter().map(|b| b.center).collect();
        tick(&mut scene, SIM_DT);
        tick(&mut scene, SIM_DT);
        for (blob, center) in scene.blobs.iter().zip(&centers) {
            assert_eq!(blob.center, *center);
            assert!(blob.max_radius > 30.0);
            assert!(blob.min_radius < blob.max_radius);
            assert!(blob.opacity < SPAWN_OPACITY);
        }
    }

    #[test]
    fn test_explosion_completes_and_reseeds() {
        let mut scene = SceneState::new(small_config(), 9);
        explode(&mut scene);
        let max_id = scene.blobs.iter().map(|b| b.id).max().unwrap();
        let steps = (scene.config.explosion_duration / SIM_DT).ceil() as u32 + 1;
        for _ in 0..steps {
            tick(&mut scene, SIM_DT);
        }
        assert_eq!(scene.phase, ScenePhase::Populating);
        assert_eq!(scene.blobs.len(), scene.config.seed_count);
        for blob in &scene.blobs {
            assert!(blob.id > max_id);
            assert!(matches!(blob.state, BlobState::Active));
        }
    }

    #[test]
    fn test_explosion_runs_to_completion_despite_spawns() {
        let mut scene = SceneState::new(small_config(), 9);
        explode(&mut scene);
        tick(&mut scene, SIM_DT);
        assert!(!scene.spawn(100.0, 100.0));
        assert_eq!(scene.phase, ScenePhase::Exploding);
        assert_eq!(scene.blobs.len(), 5);
    }
}
