//! Flightpath Core (engine-agnostic)
//!
//! Moves and orients a rigid body along a Catmull-Rom curve through keyed
//! poses. Travel speed is decoupled from the curve parameter through an
//! arc-length table, and orientations are blended over the same segments with
//! shortest-arc sign correction. Hosts call [`PathAnimation::frame`] once per
//! frame and apply the returned [`Pose`].

pub mod arc_length;
pub mod baking;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod interp;
pub mod outputs;
pub mod sampling;
pub mod spline;
pub mod stored_path;
pub mod timing;

// Re-exports for consumers (adapters)
pub use arc_length::{ArcLengthRow, ArcLengthTable};
pub use baking::{bake_poses, BakedPath, BakingConfig};
pub use config::{
    Config, Easing, OutOfRangePolicy, TimeNormalization, TimingMode, MAX_SAMPLES_PER_SEGMENT,
};
pub use data::{Closure, ControlPath, Keyframe};
pub use engine::PathAnimation;
pub use error::PathError;
pub use outputs::{DebugFlags, DebugOverlay, FrameOutput, Pose};
pub use sampling::sample_pose;
pub use spline::BasisMatrix;
pub use stored_path::{parse_path_json, BasisKind, PathDefinition};

pub use glam;
