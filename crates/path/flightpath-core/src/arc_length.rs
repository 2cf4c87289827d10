//! Piecewise-linear arc-length parametrization of a keyed path.
//!
//! The table maps the global curve parameter (`segment + local u`) to the
//! cumulative chord length of the sampled curve. It starts at `(0, 0)`, the
//! parameter column is strictly increasing and the length column is
//! non-decreasing. A degenerate path yields an empty table, and every lookup
//! on it returns parameter 0.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{Config, OutOfRangePolicy};
use crate::data::ControlPath;
use crate::spline::{evaluate_point, BasisMatrix};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArcLengthRow {
    /// Global curve parameter.
    pub param: f32,
    /// Cumulative length from the start of the path.
    pub length: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ArcLengthTable {
    rows: Vec<ArcLengthRow>,
}

impl ArcLengthTable {
    /// Sample every segment at `step` in local parameter and accumulate the
    /// distance between consecutive samples.
    pub fn build(path: &ControlPath, basis: &BasisMatrix, step: f32) -> Self {
        let segments = path.segment_count();
        if segments == 0 {
            warn!(
                "arc-length table left empty: {} keys cannot form a {:?} segment",
                path.len(),
                path.closure()
            );
            return Self::default();
        }

        let per_segment = Config::samples_per_segment(step);
        let mut rows = Vec::with_capacity(segments.saturating_mul(per_segment).saturating_add(1));
        rows.push(ArcLengthRow {
            param: 0.0,
            length: 0.0,
        });

        let mut total = 0.0f32;
        for seg in 0..segments {
            let Some(window) = path.segment_window(seg) else {
                break;
            };
            let points = window.map(|k| k.position);
            let mut prev = evaluate_point(basis, points, 0.0);
            for k in 1..=per_segment {
                let u = k as f32 / per_segment as f32;
                let p = evaluate_point(basis, points, u);
                total += (p - prev).length();
                rows.push(ArcLengthRow {
                    param: seg as f32 + u,
                    length: total,
                });
                prev = p;
            }
        }

        debug!(
            "arc-length table built: {} segments, {} rows, total length {}",
            segments,
            rows.len(),
            total
        );
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[ArcLengthRow] {
        &self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total sampled arc length (`sMax`); 0 for an empty table.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.rows.last().map_or(0.0, |r| r.length)
    }

    /// Global parameter of the last row; 0 for an empty table.
    #[inline]
    pub fn end_param(&self) -> f32 {
        self.rows.last().map_or(0.0, |r| r.param)
    }

    /// Invert `s -> u`.
    ///
    /// Finds the first row whose length exceeds `s` and interpolates linearly
    /// from its predecessor. When no row exceeds `s` the result follows
    /// `policy`. Lengths at or below the first row map to its parameter,
    /// even when leading rows have zero length. Empty tables, NaN and
    /// infinite queries return 0.
    pub fn length_to_param(&self, s: f32, policy: OutOfRangePolicy) -> f32 {
        if self.rows.is_empty() || !s.is_finite() {
            return 0.0;
        }
        if s <= self.rows[0].length {
            return self.rows[0].param;
        }
        let idx = self.rows.partition_point(|r| r.length <= s);
        if idx == self.rows.len() {
            return match policy {
                OutOfRangePolicy::ClampToEnd => self.end_param(),
                OutOfRangePolicy::Zero => 0.0,
            };
        }
        let lo = self.rows[idx - 1];
        let hi = self.rows[idx];
        let denom = hi.length - lo.length;
        if denom <= 0.0 {
            return lo.param;
        }
        let alpha = (s - lo.length) / denom;
        (1.0 - alpha) * lo.param + alpha * hi.param
    }

    /// Forward mapping `u -> s`, clamped to the table's parameter range.
    pub fn param_to_length(&self, u: f32) -> f32 {
        if self.rows.is_empty() || u.is_nan() {
            return 0.0;
        }
        let u = u.clamp(0.0, self.end_param());
        let idx = self.rows.partition_point(|r| r.param <= u);
        if idx == 0 {
            return self.rows[0].length;
        }
        if idx == self.rows.len() {
            return self.total_length();
        }
        let lo = self.rows[idx - 1];
        let hi = self.rows[idx];
        let alpha = (u - lo.param) / (hi.param - lo.param);
        lo.length + alpha * (hi.length - lo.length)
    }
}
