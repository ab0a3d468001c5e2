//! Frame-rate independent spring helpers.
//!
//! Both helpers integrate in whole milliseconds so the result of one 16 ms
//! step matches sixteen 1 ms steps. Frame deltas above
//! [`MAX_SPRING_STEP_SEC`] are clamped so a stalled frame cannot overshoot.

use crate::constants::MAX_SPRING_STEP_SEC;
use glam::Vec3;

#[inline]
fn step_millis(dt_sec: f32) -> i32 {
    (dt_sec.clamp(0.0, MAX_SPRING_STEP_SEC) * 1000.0).round() as i32
}

/// Fraction of the remaining distance covered by a spring of `strength` in `dt_sec`.
#[inline]
pub fn spring_fraction(strength: f32, dt_sec: f32) -> f32 {
    let per_ms = (strength * 0.001).clamp(0.0, 1.0);
    1.0 - (1.0 - per_ms).powi(step_millis(dt_sec))
}

/// Exponential approach from `from` toward `to`.
#[inline]
pub fn spring_lerp(from: f32, to: f32, strength: f32, dt_sec: f32) -> f32 {
    from + (to - from) * spring_fraction(strength, dt_sec)
}

#[inline]
pub fn spring_lerp_vec3(from: Vec3, to: Vec3, strength: f32, dt_sec: f32) -> Vec3 {
    from + (to - from) * spring_fraction(strength, dt_sec)
}

/// Decays `velocity` in place and returns the displacement travelled meanwhile.
///
/// The displacement is the integral of the decaying velocity over the step,
/// expressed in the same per-frame units the velocity was accumulated in.
pub fn spring_dampen(velocity: &mut Vec3, strength: f32, dt_sec: f32) -> Vec3 {
    let ms = step_millis(dt_sec);
    let factor = 1.0 - strength * 0.001;
    if factor <= 0.0 {
        *velocity = Vec3::ZERO;
        return Vec3::ZERO;
    }
    if factor >= 1.0 {
        // undamped: the limit of (f^ms - 1) / ln f as f -> 1 is ms
        return *velocity * ms as f32 * 0.06;
    }
    let total = factor.powi(ms);
    let travelled = *velocity * ((total - 1.0) / factor.ln());
    *velocity *= total;
    travelled * 0.06
}
