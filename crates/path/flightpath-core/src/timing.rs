//! Time math: wrap elapsed time into a loop and turn it into a travel fraction.

use crate::config::{Easing, TimeNormalization};
use crate::interp::ease;

/// Floating modulo with the sign of `b` (result in `[0, b)` for `b > 0`).
pub fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 || !b.is_finite() || !a.is_finite() {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Normalized loop time for elapsed `t` and loop length `tmax`.
/// Non-positive or non-finite `tmax` yields 0.
pub fn loop_fraction(t: f32, tmax: f32, normalization: TimeNormalization) -> f32 {
    if !tmax.is_finite() || tmax <= 0.0 {
        return 0.0;
    }
    let wrapped = fmod(t, tmax);
    let denom = match normalization {
        TimeNormalization::Period => tmax,
        TimeNormalization::PaddedPeriod => tmax + 1.0,
    };
    (wrapped / denom).clamp(0.0, 1.0)
}

/// Eased travel fraction in `[0, 1]` for elapsed `t`.
#[inline]
pub fn travel_fraction(t: f32, tmax: f32, normalization: TimeNormalization, easing: Easing) -> f32 {
    ease(easing, loop_fraction(t, tmax, normalization))
}

/// Rotor angle in radians after `t` seconds at `rev_per_sec`, wrapped to one turn.
pub fn rotor_angle(t: f32, rev_per_sec: f32) -> f32 {
    let turns = fmod(t * rev_per_sec, 1.0);
    turns * std::f32::consts::TAU
}
