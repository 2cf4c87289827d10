//! Pose sampling at a global curve parameter.
//!
//! `u` splits into a segment index (`floor(u)`) and a local parameter
//! (`frac(u)`). Position and orientation are blended over the same four keys
//! with the same basis; orientations are sign-aligned first so the blend takes
//! the short way round, then normalized.

use glam::Vec3;
use log::trace;

use crate::config::Config;
use crate::data::ControlPath;
use crate::interp::{align_window, normalize_or};
use crate::outputs::Pose;
use crate::spline::{evaluate_point, evaluate_quat_raw, evaluate_tangent, BasisMatrix};

/// Segment index and local parameter for a global parameter, clamped to the
/// path. `None` when the path has no segments.
pub fn locate(path: &ControlPath, u: f32) -> Option<(usize, f32)> {
    let segments = path.segment_count();
    if segments == 0 {
        return None;
    }
    let u = if u.is_finite() { u } else { 0.0 };
    let u = u.clamp(0.0, segments as f32);
    let seg = u.floor() as usize;
    if seg >= segments {
        return Some((segments - 1, 1.0));
    }
    Some((seg, u - seg as f32))
}

/// Pose of the path at global parameter `u`.
///
/// A degenerate path yields the first key's pose, or identity when empty.
pub fn sample_pose(path: &ControlPath, basis: &BasisMatrix, u: f32) -> Pose {
    let Some((window, local)) =
        locate(path, u).and_then(|(seg, local)| Some((path.segment_window(seg)?, local)))
    else {
        trace!("sample_pose on degenerate path, using first key");
        return path
            .keys()
            .first()
            .map_or(Pose::IDENTITY, |k| Pose::new(k.position, k.orientation));
    };

    let translation = evaluate_point(basis, window.map(|k| k.position), local);
    let orientations = align_window(window.map(|k| k.orientation));
    let raw = evaluate_quat_raw(basis, orientations, local);
    let rotation = normalize_or(raw, orientations[1]);
    Pose::new(translation, rotation)
}

/// Position only, without the orientation blend.
pub fn sample_position(path: &ControlPath, basis: &BasisMatrix, u: f32) -> Option<Vec3> {
    let (seg, local) = locate(path, u)?;
    let window = path.segment_window(seg)?;
    Some(evaluate_point(basis, window.map(|k| k.position), local))
}

/// dP/du at global parameter `u`.
pub fn sample_tangent(path: &ControlPath, basis: &BasisMatrix, u: f32) -> Option<Vec3> {
    let (seg, local) = locate(path, u)?;
    let window = path.segment_window(seg)?;
    Some(evaluate_tangent(basis, window.map(|k| k.position), local))
}

/// The curve as a connected polyline, `step` apart in local parameter,
/// including both ends of every segment.
pub fn sample_polyline(path: &ControlPath, basis: &BasisMatrix, step: f32) -> Vec<Vec3> {
    let segments = path.segment_count();
    if segments == 0 {
        return Vec::new();
    }
    let per_segment = Config::samples_per_segment(step);
    let mut points = Vec::with_capacity(segments.saturating_mul(per_segment).saturating_add(1));
    for seg in 0..segments {
        let Some(window) = path.segment_window(seg) else {
            break;
        };
        let positions = window.map(|k| k.position);
        if seg == 0 {
            points.push(evaluate_point(basis, positions, 0.0));
        }
        for k in 1..=per_segment {
            let u = k as f32 / per_segment as f32;
            points.push(evaluate_point(basis, positions, u));
        }
    }
    points
}

/// The authored pose at every key.
pub fn sample_keyframe_markers(path: &ControlPath) -> Vec<Pose> {
    path.keys()
        .iter()
        .map(|k| Pose::new(k.position, k.orientation))
        .collect()
}
