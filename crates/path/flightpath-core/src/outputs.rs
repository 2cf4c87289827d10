//! Output contracts from the path engine.
//!
//! A frame carries the authoritative pose of the animated body plus, when
//! requested, the debug geometry a line renderer can draw. Adapters apply the
//! pose to their host transform type.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid-body transform: rotation then translation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Column-major model matrix.
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * p + self.translation
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Which debug layers to produce this frame.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebugFlags {
    /// Sampled curve as a connected polyline.
    pub polyline: bool,
    /// Pose at every key.
    pub markers: bool,
}

impl DebugFlags {
    pub const NONE: Self = Self {
        polyline: false,
        markers: false,
    };
    pub const ALL: Self = Self {
        polyline: true,
        markers: true,
    };

    #[inline]
    pub fn any(&self) -> bool {
        self.polyline || self.markers
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugOverlay {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polyline: Vec<Vec3>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Pose>,
}

/// Everything the render collaborator needs for one frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrameOutput {
    /// Elapsed time the frame was computed for.
    pub time: f32,
    /// Travel fraction in `[0, 1]` after easing.
    pub fraction: f32,
    /// Resolved global curve parameter.
    pub param: f32,
    pub pose: Pose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugOverlay>,
}
