use glam::{Quat, Vec4};

use crate::config::Easing;

/// Squared length below which a blended quaternion is treated as zero.
pub const MIN_QUAT_LENGTH_SQUARED: f32 = 1e-12;

#[inline]
fn follow(prev: Quat, q: Quat) -> Quat {
    if prev.dot(q) < 0.0 {
        -q
    } else {
        q
    }
}

/// Flip each quaternion onto the hemisphere of its (already corrected)
/// predecessor. The first element is kept as-is.
pub fn align_hemispheres(qs: &[Quat]) -> Vec<Quat> {
    qs.iter()
        .scan(None::<Quat>, |prev, &q| {
            let q = prev.map_or(q, |p| follow(p, q));
            *prev = Some(q);
            Some(q)
        })
        .collect()
}

/// Fixed-size form of [`align_hemispheres`] for a segment window.
#[inline]
pub fn align_window(qs: [Quat; 4]) -> [Quat; 4] {
    let q0 = qs[0];
    let q1 = follow(q0, qs[1]);
    let q2 = follow(q1, qs[2]);
    let q3 = follow(q2, qs[3]);
    [q0, q1, q2, q3]
}

/// Normalize a raw 4-vector into a unit quaternion, or return `fallback`
/// when it is too short or not finite.
#[inline]
pub fn normalize_or(raw: Vec4, fallback: Quat) -> Quat {
    let len2 = raw.length_squared();
    if !len2.is_finite() || len2 < MIN_QUAT_LENGTH_SQUARED {
        return fallback;
    }
    Quat::from_vec4(raw / len2.sqrt())
}

/// Ease a fraction in `[0, 1]`. Input is clamped.
#[inline]
pub fn ease(easing: Easing, x: f32) -> f32 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    match easing {
        Easing::Linear => x,
        Easing::Smoothstep => x * x * (3.0 - 2.0 * x),
        Easing::Smootherstep => x * x * x * (x * (6.0 * x - 15.0) + 10.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dot_flips_later_quaternion() {
        let q1 = Quat::from_xyzw(0.0, 0.0, 0.0, 1.0);
        let q2 = Quat::from_xyzw(0.0, 0.0, 0.14, -0.99);
        assert!(q1.dot(q2) < 0.0);
        let out = align_hemispheres(&[q1, q2]);
        assert_eq!(out[0], q1);
        assert_eq!(out[1], -q2);
        assert!(out[0].dot(out[1]) > 0.0);
    }

    #[test]
    fn correction_chains_through_flipped_predecessor() {
        let a = Quat::IDENTITY;
        let b = -Quat::from_rotation_z(0.2);
        // c is close to b's original sign, so after b flips c must flip too
        let c = -Quat::from_rotation_z(0.4);
        let out = align_hemispheres(&[a, b, c]);
        assert!(out[0].dot(out[1]) > 0.0);
        assert!(out[1].dot(out[2]) > 0.0);
        assert_eq!(out[2], -c);
    }

    #[test]
    fn window_matches_slice_form() {
        let qs = [
            Quat::IDENTITY,
            -Quat::from_rotation_x(0.3),
            Quat::from_rotation_x(0.6),
            -Quat::from_rotation_x(0.9),
        ];
        assert_eq!(align_window(qs).to_vec(), align_hemispheres(&qs));
    }

    #[test]
    fn input_is_not_mutated() {
        let qs = vec![Quat::IDENTITY, -Quat::IDENTITY];
        let _ = align_hemispheres(&qs);
        assert_eq!(qs[1], -Quat::IDENTITY);
    }

    #[test]
    fn zero_vector_uses_fallback() {
        let fb = Quat::from_rotation_y(1.0);
        assert_eq!(normalize_or(Vec4::ZERO, fb), fb);
        assert_eq!(normalize_or(Vec4::splat(f32::NAN), fb), fb);
        let q = normalize_or(Vec4::new(0.0, 0.0, 0.0, 2.0), fb);
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn easing_endpoints_and_symmetry() {
        for e in [Easing::Linear, Easing::Smoothstep, Easing::Smootherstep] {
            assert_eq!(ease(e, 0.0), 0.0);
            assert!((ease(e, 1.0) - 1.0).abs() < 1e-6);
            assert!((ease(e, 0.5) - 0.5).abs() < 1e-6);
            assert!((ease(e, 0.2) + ease(e, 0.8) - 1.0).abs() < 1e-5);
        }
        assert!(ease(Easing::Smootherstep, 0.1) < ease(Easing::Smoothstep, 0.1));
        assert_eq!(ease(Easing::Linear, 2.0), 1.0);
    }
}
