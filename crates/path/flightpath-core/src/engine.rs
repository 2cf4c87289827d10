//! `PathAnimation`: owns the keyed path, its config, and derived tables, and
//! turns elapsed time into a pose.
//!
//! Methods:
//! - new / try_new, set_keys / set_config (rebuild derived data)
//! - param_at_length (s -> u), pose_at_param, pose_at_distance
//! - heading_at_param (unit tangent for heading display)
//! - pose_at / frame (time -> pose, optional debug overlay)

use glam::Vec3;
use log::debug;

use crate::arc_length::ArcLengthTable;
use crate::config::{Config, TimingMode};
use crate::data::ControlPath;
use crate::error::PathError;
use crate::outputs::{DebugFlags, DebugOverlay, FrameOutput, Pose};
use crate::sampling::{sample_keyframe_markers, sample_polyline, sample_pose, sample_tangent};
use crate::spline::BasisMatrix;
use crate::timing::{fmod, rotor_angle, travel_fraction};

#[derive(Clone, Debug)]
pub struct PathAnimation {
    path: ControlPath,
    cfg: Config,
    basis: BasisMatrix,

    // Derived from the fields above; rebuilt by every mutator.
    table: ArcLengthTable,
    polyline: Vec<Vec3>,
}

impl PathAnimation {
    /// Build without validation. A degenerate path produces an empty table
    /// and a stationary pose.
    pub fn new(path: ControlPath, cfg: Config) -> Self {
        let mut anim = Self {
            path,
            cfg,
            basis: BasisMatrix::default(),
            table: ArcLengthTable::default(),
            polyline: Vec::new(),
        };
        anim.rebuild();
        anim
    }

    /// Build after checking the key count, key values, and config.
    pub fn try_new(path: ControlPath, cfg: Config) -> Result<Self, PathError> {
        path.validate()?;
        cfg.validate()?;
        Ok(Self::new(path, cfg))
    }

    /// Swap the basis matrix.
    pub fn with_basis(mut self, basis: BasisMatrix) -> Self {
        self.basis = basis;
        self.rebuild();
        self
    }

    pub fn set_keys(&mut self, path: ControlPath) {
        self.path = path;
        self.rebuild();
    }

    pub fn set_config(&mut self, cfg: Config) {
        self.cfg = cfg;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.path = self.path.with_aligned_orientations();
        self.table = ArcLengthTable::build(&self.path, &self.basis, self.cfg.arc_length_step);
        self.polyline = sample_polyline(&self.path, &self.basis, self.cfg.polyline_step);
        debug!(
            "path rebuilt: {} keys, {} segments, length {}",
            self.path.len(),
            self.path.segment_count(),
            self.table.total_length()
        );
    }

    /// The owned path, orientations sign-aligned key to key.
    #[inline]
    pub fn path(&self) -> &ControlPath {
        &self.path
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn basis(&self) -> &BasisMatrix {
        &self.basis
    }

    #[inline]
    pub fn table(&self) -> &ArcLengthTable {
        &self.table
    }

    /// `sMax`.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.table.total_length()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.path.segment_count()
    }

    /// Cached debug polyline at `Config::polyline_step`.
    #[inline]
    pub fn debug_polyline(&self) -> &[Vec3] {
        &self.polyline
    }

    /// Curve parameter at arc length `s`, honoring `Config::out_of_range`.
    #[inline]
    pub fn param_at_length(&self, s: f32) -> f32 {
        self.table.length_to_param(s, self.cfg.out_of_range)
    }

    #[inline]
    pub fn pose_at_param(&self, u: f32) -> Pose {
        sample_pose(&self.path, &self.basis, u)
    }

    /// Unit direction of travel at `u`. `None` on a degenerate path or where
    /// the curve is stationary.
    pub fn heading_at_param(&self, u: f32) -> Option<Vec3> {
        sample_tangent(&self.path, &self.basis, u)?.try_normalize()
    }

    /// Pose at a normalized travel distance in `[0, 1]`.
    pub fn pose_at_distance(&self, fraction: f32) -> Pose {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.pose_at_param(self.param_at_length(self.total_length() * fraction))
    }

    /// Travel fraction and curve parameter for elapsed time `t`.
    pub fn param_at_time(&self, t: f32) -> (f32, f32) {
        match self.cfg.timing {
            TimingMode::ArcLengthEased => {
                let fraction = travel_fraction(
                    t,
                    self.cfg.loop_duration,
                    self.cfg.time_normalization,
                    self.cfg.easing,
                );
                (fraction, self.param_at_length(self.total_length() * fraction))
            }
            TimingMode::ParameterUniform => {
                let segments = self.segment_count() as f32;
                if segments == 0.0 {
                    return (0.0, 0.0);
                }
                let u = fmod(t, segments);
                (u / segments, u)
            }
        }
    }

    #[inline]
    pub fn pose_at(&self, t: f32) -> Pose {
        self.pose_at_param(self.param_at_time(t).1)
    }

    /// Pose for elapsed time `t` plus the debug layers selected by `flags`.
    pub fn frame(&self, t: f32, flags: DebugFlags) -> FrameOutput {
        let (fraction, param) = self.param_at_time(t);
        let debug = flags.any().then(|| DebugOverlay {
            polyline: if flags.polyline {
                self.polyline.clone()
            } else {
                Vec::new()
            },
            markers: if flags.markers {
                sample_keyframe_markers(&self.path)
            } else {
                Vec::new()
            },
        });
        FrameOutput {
            time: t,
            fraction,
            param,
            pose: self.pose_at_param(param),
            debug,
        }
    }

    /// Rotor angle in radians for articulated parts at time `t`.
    #[inline]
    pub fn rotor_angle(&self, t: f32) -> f32 {
        rotor_angle(t, self.cfg.rotor_rev_per_sec)
    }
}
