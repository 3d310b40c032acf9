//! Closed-form easing curves
//!
//! Every curve is an explicit function of normalized time, sampled on demand
//! and restartable at any phase; no tween engine or retained timeline state.

use std::f32::consts::PI;

/// Smooth ease-in/ease-out: 0 to 1 with zero slope at both ends
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    (1.0 - (PI * t).cos()) / 2.0
}

/// Fast start, long decelerating tail; exactly 1 from t = 1 onward
#[inline]
pub fn expo_out(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// Slow start, accelerating finish
#[inline]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

/// Fast start, decelerating finish
#[inline]
pub fn quad_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Infinite yoyo ramp: rises 0 to 1 over [0, 1], falls back over [1, 2], repeats
#[inline]
pub fn triangle(t: f32) -> f32 {
    let u = t.rem_euclid(2.0);
    if u <= 1.0 { u } else { 2.0 - u }
}
