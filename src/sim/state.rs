//! Scene state and entity types
//!
//! All per-run state lives here: the blob collection, the lifecycle state
//! machine, the palette cursor and the seeded RNG. One scene per run, owned by
//! the driver; `reset()` is the only way back to a fresh population.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spline::{CurvePath, cardinal};
use super::wobble::Wobble;
use crate::config::SimConfig;
use crate::polar_to_cartesian;

/// Lifecycle phase of the whole scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// No entities yet; the first tick (or an explicit seed) populates
    Idle,
    /// Normal simulation; spawns accepted until the population limit
    Populating,
    /// Timed grow-and-fade transition; physics stopped, spawns refused
    Exploding,
    /// Transient: entities cleared, reseed in progress
    Resetting,
}

/// Per-blob lifecycle tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BlobState {
    /// Moving, colliding, wobbling
    Active,
    /// Detached from physics; radius bounds and opacity animate from the
    /// captured start values toward the explosion targets
    Exploding {
        from_min: f32,
        from_max: f32,
        from_opacity: f32,
    },
}

/// A soft circular entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    pub id: u32,
    pub center: Vec2,
    pub vel: Vec2,
    /// Boundary radius when fully contracted
    pub min_radius: f32,
    /// Boundary radius when fully inflated; also the collision radius
    pub max_radius: f32,
    /// Palette index assigned at spawn
    pub color: usize,
    /// Fill opacity signal for the renderer (0 = invisible)
    pub opacity: f32,
    /// Seconds since spawn, drives the fade-in
    pub age: f32,
    pub state: BlobState,
    pub wobble: Wobble,
    /// Outline for the renderer, recomputed every tick
    #[serde(skip)]
    pub outline: CurvePath,
}

impl Blob {
    pub fn new(
        id: u32,
        center: Vec2,
        vel: Vec2,
        color: usize,
        config: &SimConfig,
        rng: &mut Pcg32,
    ) -> Self {
        let wobble = Wobble::new(
            rng,
            config.points_per_blob,
            config.min_radius,
            config.max_radius,
            config.min_duration,
            config.max_duration,
        );
        let mut blob = Self {
            id,
            center,
            vel,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            color,
            opacity: 0.0,
            age: 0.0,
            state: BlobState::Active,
            wobble,
            outline: CurvePath::default(),
        };
        blob.refresh_outline(config.tension);
        blob
    }

    /// Current world-space boundary ring
    pub fn boundary_ring(&self) -> Vec<Vec2> {
        self.wobble.ring(self.center)
    }

    /// Rebuild the drawable outline from the current ring
    pub fn refresh_outline(&mut self, tension: f32) {
        self.outline = cardinal(&self.boundary_ring(), true, tension);
    }
}

/// Complete scene state (deterministic given seed and tick sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned generator; every stochastic decision flows through it
    pub rng: Pcg32,
    pub config: SimConfig,
    pub phase: ScenePhase,
    /// Spawn order; pairwise collision iterates in this order
    pub blobs: Vec<Blob>,
    /// Seconds since the explosion started (meaningful while Exploding)
    pub explosion_timer: f32,
    /// Previous palette pick, never repeated back-to-back
    pub last_color: Option<usize>,
    /// Total simulated seconds
    pub time: f32,
    /// Next entity ID
    next_id: u32,
}

impl SceneState {
    /// Create an idle scene with the given tuning and seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: ScenePhase::Idle,
            blobs: Vec::new(),
            explosion_timer: 0.0,
            last_color: None,
            time: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform palette pick that never repeats the previous pick
    fn next_color(&mut self) -> usize {
        let len = self.config.palette.len().max(1);
        let mut pick = self.rng.random_range(0..len);
        while len > 1 && Some(pick) == self.last_color {
            pick = self.rng.random_range(0..len);
        }
        self.last_color = Some(pick);
        pick
    }

    /// Append one blob at the given position with a random velocity
    ///
    /// The direction is uniform over the circle, the speed uniform over the
    /// configured range. Accepted only while `Populating`; any other phase is
    /// a defined no-op returning `false`. Reaching the population limit
    /// triggers the explosion.
    pub fn spawn(&mut self, x: f32, y: f32) -> bool {
        if self.phase != ScenePhase::Populating {
            log::debug!("spawn at ({x:.1}, {y:.1}) refused during {:?}", self.phase);
            return false;
        }
        let angle = self.rng.random_range(0.0..TAU);
        let speed = self
            .rng
            .random_range(self.config.min_speed..self.config.max_speed);
        let color = self.next_color();
        let id = self.next_entity_id();
        let blob = Blob::new(
            id,
            Vec2::new(x, y),
            polar_to_cartesian(speed, angle),
            color,
            &self.config,
            &mut self.rng,
        );
        self.blobs.push(blob);
        log::debug!("spawned blob {id}, population {}", self.blobs.len());
        if self.blobs.len() >= self.config.population_limit {
            self.trigger_explosion();
        }
        true
    }

    /// Initial population: `seed_count` blobs at uniform positions fully
    /// inside the arena
    pub fn seed_scene(&mut self) {
        self.phase = ScenePhase::Populating;
        let margin = self.config.max_radius;
        for _ in 0..self.config.seed_count {
            let x = self
                .rng
                .random_range(margin..self.config.arena.width - margin);
            let y = self
                .rng
                .random_range(margin..self.config.arena.height - margin);
            self.spawn(x, y);
        }
        log::info!("seeded scene with {} blobs", self.blobs.len());
    }

    /// Destroy all entities and run the seed spawn again
    pub fn reset(&mut self) {
        self.phase = ScenePhase::Resetting;
        self.blobs.clear();
        self.explosion_timer = 0.0;
        log::info!("scene reset at t={:.2}s", self.time);
        self.seed_scene();
    }

    /// Enter the explosion: capture per-blob animation start values and detach
    /// every blob from physics. Idempotent while already exploding; runs to
    /// completion once started.
    pub fn trigger_explosion(&mut self) {
        if self.phase == ScenePhase::Exploding {
            return;
        }
        log::info!(
            "population limit {} reached, exploding",
            self.config.population_limit
        );
        self.phase = ScenePhase::Exploding;
        self.explosion_timer = 0.0;
        for blob in &mut self.blobs {
            blob.state = BlobState::Exploding {
                from_min: blob.min_radius,
                from_max: blob.max_radius,
                from_opacity: blob.opacity,
            };
        }
    }
}
