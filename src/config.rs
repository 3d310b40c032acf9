//! Construction-time configuration
//!
//! Everything tunable is fixed when the scene is built; nothing here changes
//! mid-run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed rectangular arena bounds, immutable for the run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a disk of `radius` around `center` lies fully inside the bounds
    pub fn contains_disk(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }
}

/// Scene tuning, consumed once at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena bounds
    pub arena: Arena,
    /// Population count that triggers the explosion
    pub population_limit: usize,
    /// Blobs spawned by the initial seed (and after every reset)
    pub seed_count: usize,
    /// Boundary points per blob outline
    pub points_per_blob: usize,
    /// Boundary-point radius when fully contracted
    pub min_radius: f32,
    /// Boundary-point radius when fully inflated; also the collision radius
    pub max_radius: f32,
    /// Shortest wobble period in seconds (one min-to-max sweep)
    pub min_duration: f32,
    /// Longest wobble period in seconds
    pub max_duration: f32,
    /// Slowest spawn speed in px/s
    pub min_speed: f32,
    /// Fastest spawn speed in px/s
    pub max_speed: f32,
    /// Seconds the explosion transition takes
    pub explosion_duration: f32,
    /// Cardinal spline tension for the outline
    pub tension: f32,
    /// Fill colors handed to the renderer, drawn without back-to-back repeats
    pub palette: Vec<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: Arena::new(1500.0, 350.0),
            population_limit: 10,
            seed_count: 3,
            points_per_blob: 8,
            min_radius: 100.0,
            max_radius: 140.0,
            min_duration: 2.0,
            max_duration: 4.0,
            min_speed: 180.0,
            max_speed: 360.0,
            explosion_duration: 0.6,
            tension: 1.0,
            palette: ["#ff1400", "#ffc300", "#17f3af", "#03cfec", "#6e19e6", "#ff5801"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
