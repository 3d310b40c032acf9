//! Boundary-point radius oscillation
//!
//! Each blob outline is a ring of points whose radii breathe independently
//! between the blob's radius bounds: an infinite sine-eased yoyo per point,
//! with per-point period and phase offset so the silhouette never moves in
//! lockstep. Bounds are passed in at every advance, so animating the bounds
//! (during the explosion) rescales the whole silhouette.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ease;
use crate::polar_to_cartesian;

/// A single outline point: fixed angle, oscillating radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// Fixed angle around the blob center (radians)
    pub angle: f32,
    /// Current radius, within the bounds last passed to [`Wobble::advance`]
    pub radius: f32,
    /// Seconds for one min-to-max sweep
    period: f32,
    /// Phase clock; starts at a random offset so points are out of step
    elapsed: f32,
}

impl BoundaryPoint {
    fn sample(&mut self, min_radius: f32, max_radius: f32) {
        let wave = ease::sine_in_out(ease::triangle(self.elapsed / self.period));
        self.radius = min_radius + (max_radius - min_radius) * wave;
    }
}

/// The full oscillating ring for one blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wobble {
    points: Vec<BoundaryPoint>,
}

impl Wobble {
    /// Lay out `count` points evenly spaced around a random start angle, each
    /// with an independent period in `[min_duration, max_duration)` and a
    /// phase offset in `[0, period)`
    pub fn new(
        rng: &mut Pcg32,
        count: usize,
        min_radius: f32,
        max_radius: f32,
        min_duration: f32,
        max_duration: f32,
    ) -> Self {
        let start_angle = rng.random_range(0.0..TAU);
        let slice = TAU / count as f32;
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let period = rng.random_range(min_duration..max_duration);
            let mut point = BoundaryPoint {
                angle: start_angle + i as f32 * slice,
                radius: min_radius,
                period,
                elapsed: rng.random_range(0.0..period),
            };
            point.sample(min_radius, max_radius);
            points.push(point);
        }
        Self { points }
    }

    /// Advance every point's phase by `dt` and resample radii against the
    /// current bounds. Never terminates; direction reverses at each extremum.
    pub fn advance(&mut self, dt: f32, min_radius: f32, max_radius: f32) {
        for point in &mut self.points {
            point.elapsed += dt;
            point.sample(min_radius, max_radius);
        }
    }

    /// World-space ring positions around `center`, in angular order
    pub fn ring(&self, center: Vec2) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|p| center + polar_to_cartesian(p.radius, p.angle))
            .collect()
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }
}
