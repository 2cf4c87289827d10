//! Path data model: keyed poses and how they close into a curve.
//!
//! A key's position doubles as the spline control point, so there is no
//! separate control-point list to keep in step with the keyframes.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::interp::align_hemispheres;

/// Keys a cubic segment blends.
pub const SEGMENT_WIDTH: usize = 4;

fn default_orientation() -> Quat {
    Quat::IDENTITY
}

/// An authored pose at one control point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub position: Vec3,
    /// Unit quaternion, serialized as `[x, y, z, w]`.
    #[serde(default = "default_orientation")]
    pub orientation: Quat,
}

impl Keyframe {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Key with identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

impl From<Vec3> for Keyframe {
    fn from(position: Vec3) -> Self {
        Self::at(position)
    }
}

/// Whether the curve returns to its first key.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Closure {
    /// Segment `i` blends keys `i..i+3`; the curve runs from key 1 to key N-2.
    #[default]
    Open,
    /// Segment `i` blends keys `i..i+3` modulo N; N segments form a loop.
    Closed,
}

/// Ordered keys plus closure. Immutable once handed to a `PathAnimation`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlPath {
    keys: Vec<Keyframe>,
    #[serde(default)]
    closure: Closure,
}

impl ControlPath {
    pub fn new(keys: Vec<Keyframe>, closure: Closure) -> Self {
        Self { keys, closure }
    }

    pub fn open(keys: Vec<Keyframe>) -> Self {
        Self::new(keys, Closure::Open)
    }

    pub fn closed(keys: Vec<Keyframe>) -> Self {
        Self::new(keys, Closure::Closed)
    }

    /// Open path with the first `pad` keys repeated at the end, the manual
    /// way of faking a loop.
    pub fn with_wraparound(mut keys: Vec<Keyframe>, pad: usize) -> Self {
        let n = keys.len();
        for i in 0..pad.min(n) {
            keys.push(keys[i]);
        }
        Self::open(keys)
    }

    /// Build from bare positions with identity orientations.
    pub fn from_positions<I>(positions: I, closure: Closure) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        Self::new(positions.into_iter().map(Keyframe::at).collect(), closure)
    }

    #[inline]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    #[inline]
    pub fn closure(&self) -> Closure {
        self.closure
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether at least one segment can be evaluated.
    #[inline]
    pub fn is_evaluable(&self) -> bool {
        self.keys.len() >= SEGMENT_WIDTH
    }

    /// Number of cubic segments; 0 when degenerate.
    pub fn segment_count(&self) -> usize {
        let n = self.keys.len();
        if n < SEGMENT_WIDTH {
            return 0;
        }
        match self.closure {
            Closure::Open => n - (SEGMENT_WIDTH - 1),
            Closure::Closed => n,
        }
    }

    /// The four keys blended by segment `segment`.
    ///
    /// Returns `None` for a degenerate path or an out-of-range segment.
    pub fn segment_window(&self, segment: usize) -> Option<[Keyframe; SEGMENT_WIDTH]> {
        if segment >= self.segment_count() {
            return None;
        }
        let n = self.keys.len();
        let at = |k: usize| match self.closure {
            Closure::Open => self.keys[segment + k],
            Closure::Closed => self.keys[(segment + k) % n],
        };
        Some([at(0), at(1), at(2), at(3)])
    }

    /// Same path with every orientation sign-aligned to its predecessor, so
    /// neighbouring segments blend from consistently signed quaternions.
    /// Rotations are unchanged.
    pub fn with_aligned_orientations(&self) -> Self {
        let orientations: Vec<Quat> = self.keys.iter().map(|k| k.orientation).collect();
        let keys = self
            .keys
            .iter()
            .zip(align_hemispheres(&orientations))
            .map(|(k, orientation)| Keyframe::new(k.position, orientation))
            .collect();
        Self::new(keys, self.closure)
    }

    /// Check the key count and that every key is finite.
    pub fn validate(&self) -> Result<(), PathError> {
        if !self.is_evaluable() {
            return Err(PathError::DegenerateInput {
                keys: self.keys.len(),
                min: SEGMENT_WIDTH,
                closure: self.closure,
            });
        }
        if let Some(index) = self.keys.iter().position(|k| !k.is_finite()) {
            return Err(PathError::NonFinite { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Keyframe> {
        (0..n).map(|i| Keyframe::at(Vec3::X * i as f32)).collect()
    }

    #[test]
    fn segment_counts() {
        assert_eq!(ControlPath::open(line(3)).segment_count(), 0);
        assert_eq!(ControlPath::open(line(4)).segment_count(), 1);
        assert_eq!(ControlPath::open(line(7)).segment_count(), 4);
        assert_eq!(ControlPath::closed(line(3)).segment_count(), 0);
        assert_eq!(ControlPath::closed(line(5)).segment_count(), 5);
    }

    #[test]
    fn closed_window_matches_manual_padding() {
        let keys = line(5);
        let closed = ControlPath::closed(keys.clone());
        let padded = ControlPath::with_wraparound(keys, 3);
        assert_eq!(padded.len(), 8);
        assert_eq!(closed.segment_count(), padded.segment_count());
        for seg in 0..closed.segment_count() {
            assert_eq!(closed.segment_window(seg), padded.segment_window(seg));
        }
        assert!(closed.segment_window(5).is_none());
    }

    #[test]
    fn validate_reports_degenerate_and_non_finite() {
        let err = ControlPath::open(line(2)).validate().unwrap_err();
        assert_eq!(
            err,
            PathError::DegenerateInput {
                keys: 2,
                min: 4,
                closure: Closure::Open
            }
        );

        let mut keys = line(4);
        keys[2].position.y = f32::NAN;
        let err = ControlPath::open(keys).validate().unwrap_err();
        assert_eq!(err, PathError::NonFinite { index: 2 });
    }

    #[test]
    fn aligned_orientations_keep_rotations() {
        let q = Quat::from_rotation_y(0.4);
        let path = ControlPath::open(vec![
            Keyframe::new(Vec3::ZERO, Quat::IDENTITY),
            Keyframe::new(Vec3::X, -q),
            Keyframe::new(Vec3::Y, q),
            Keyframe::new(Vec3::Z, Quat::IDENTITY),
        ]);
        let aligned = path.with_aligned_orientations();
        let out: Vec<Quat> = aligned.keys().iter().map(|k| k.orientation).collect();
        assert_eq!(out, vec![Quat::IDENTITY, q, q, Quat::IDENTITY]);
        assert_eq!(aligned.keys()[2].position, Vec3::Y);
    }

    #[test]
    fn orientation_defaults_to_identity_in_json() {
        let key: Keyframe = serde_json::from_str(r#"{ "position": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(key.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(key.orientation, Quat::IDENTITY);
    }
}
