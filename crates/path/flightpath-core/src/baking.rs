//! Baking API: sample a `PathAnimation` at a fixed frame rate over a time window.

use serde::{Deserialize, Serialize};

use crate::engine::PathAnimation;
use crate::outputs::Pose;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time (seconds).
    pub start_time: f32,
    /// End time (seconds); if None, one loop after `start_time`.
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            start_time: 0.0,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedPath {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    /// Curve parameter per frame.
    pub params: Vec<f32>,
    pub poses: Vec<Pose>,
}

impl BakedPath {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.poses.len()
    }
}

/// Bake poses for every frame in `[start, end]`, end inclusive.
pub fn bake_poses(anim: &PathAnimation, cfg: &BakingConfig) -> BakedPath {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        60.0
    };
    let sr = sr.max(1.0);
    let start = if cfg.start_time.is_finite() {
        cfg.start_time.max(0.0)
    } else {
        0.0
    };
    let loop_end = start + anim.config().loop_duration.max(0.0);
    let end = cfg
        .end_time
        .filter(|e| e.is_finite())
        .unwrap_or(loop_end)
        .max(start);
    let span = end - start;
    let frame_count = (span * sr).ceil() as usize + 1;

    let mut params = Vec::with_capacity(frame_count);
    let mut poses = Vec::with_capacity(frame_count);
    for f in 0..frame_count {
        let t = (start + f as f32 / sr).min(end);
        let (_, u) = anim.param_at_time(t);
        params.push(u);
        poses.push(anim.pose_at_param(u));
    }

    BakedPath {
        frame_rate: sr,
        start_time: start,
        end_time: end,
        params,
        poses,
    }
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedPath) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
