//! Blob Drift - a bounded-arena blob simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wobble, splines, collisions, scene lifecycle)
//! - `config`: Construction-time tuning (arena, population, radii, palette)
//!
//! The engine is renderer-agnostic: every tick it exposes, per blob, a closed
//! outline curve, the current radius bounds, a palette index and an opacity
//! scalar. Drawing, pointer input and the frame clock are external
//! collaborators; the engine only advances inside [`sim::tick`].

pub mod config;
pub mod sim;

pub use config::{Arena, SimConfig};

use glam::Vec2;

/// Engine constants
pub mod consts {
    /// Fixed demo timestep (60 Hz, the cadence the scene is tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Fill opacity a freshly spawned blob fades toward
    pub const SPAWN_OPACITY: f32 = 0.8;
    /// Seconds for the spawn fade-in
    pub const FADE_IN_DURATION: f32 = 0.5;

    /// Explosion radius targets as fractions of the arena width
    pub const EXPLOSION_MIN_SCALE: f32 = 0.6;
    pub const EXPLOSION_MAX_SCALE: f32 = 0.8;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
