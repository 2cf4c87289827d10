//! Core configuration for flightpath-core.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// How wall-clock time advances along the path.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Eased travel fraction mapped through the arc-length table.
    #[default]
    ArcLengthEased,
    /// One curve-parameter unit per second; speed varies with segment length.
    ParameterUniform,
}

/// Easing polynomial applied to the normalized loop time.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic `3x^2 - 2x^3`.
    Smoothstep,
    /// Quintic `6x^5 - 15x^4 + 10x^3`.
    #[default]
    Smootherstep,
}

/// How `t mod tmax` is normalized before easing.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeNormalization {
    /// `(t mod tmax) / tmax`, reaches the path end once per loop.
    #[default]
    Period,
    /// `(t mod tmax) / (tmax + 1)`, never quite reaches the path end.
    PaddedPeriod,
}

/// Result of an arc-length query at or past the last table row.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Return the path's end parameter.
    #[default]
    ClampToEnd,
    /// Return parameter 0 (legacy lookup-miss behaviour).
    Zero,
}

/// Tunables for table construction, debug sampling, and the time driver.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Local-parameter step used when sampling each segment for the arc-length table.
    pub arc_length_step: f32,
    /// Local-parameter step for the debug polyline.
    pub polyline_step: f32,
    /// Seconds per loop (`tmax`).
    pub loop_duration: f32,
    pub easing: Easing,
    pub time_normalization: TimeNormalization,
    pub timing: TimingMode,
    pub out_of_range: OutOfRangePolicy,
    /// Rotor revolutions per second for articulated parts.
    pub rotor_rev_per_sec: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arc_length_step: 0.2,
            polyline_step: 0.01,
            loop_duration: 5.0,
            easing: Easing::default(),
            time_normalization: TimeNormalization::default(),
            timing: TimingMode::default(),
            out_of_range: OutOfRangePolicy::default(),
            rotor_rev_per_sec: 1.0,
        }
    }
}

/// Upper bound on samples taken per segment for tables and polylines.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;

fn check_step(field: &'static str, step: f32) -> Result<(), PathError> {
    let min = 1.0 / MAX_SAMPLES_PER_SEGMENT as f32;
    if !step.is_finite() || step < min || step > 1.0 {
        return Err(PathError::InvalidConfig {
            field,
            reason: format!("step must be in [{min}, 1], got {step}"),
        });
    }
    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<(), PathError> {
        check_step("arc_length_step", self.arc_length_step)?;
        check_step("polyline_step", self.polyline_step)?;
        if !self.loop_duration.is_finite() || self.loop_duration <= 0.0 {
            return Err(PathError::InvalidConfig {
                field: "loop_duration",
                reason: format!("must be a positive number of seconds, got {}", self.loop_duration),
            });
        }
        if !self.rotor_rev_per_sec.is_finite() {
            return Err(PathError::InvalidConfig {
                field: "rotor_rev_per_sec",
                reason: "must be finite".into(),
            });
        }
        Ok(())
    }

    /// Number of samples per segment for a local-parameter step.
    /// Rounded so the final sample lands on the segment boundary, and kept
    /// within `1..=MAX_SAMPLES_PER_SEGMENT`.
    #[inline]
    pub fn samples_per_segment(step: f32) -> usize {
        if !step.is_finite() || step <= 0.0 {
            return 1;
        }
        ((1.0 / step).round() as usize).clamp(1, MAX_SAMPLES_PER_SEGMENT)
    }
}
