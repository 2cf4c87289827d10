//! Stored path format: parse a JSON path definition into a validated `ControlPath` and `Config`.

use glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{Closure, ControlPath, Keyframe};
use crate::engine::PathAnimation;
use crate::error::PathError;
use crate::interp::normalize_or;
use crate::spline::BasisMatrix;

/// Named basis selector for stored paths.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BasisKind {
    #[default]
    CatmullRom,
    BSpline,
}

impl From<BasisKind> for BasisMatrix {
    fn from(kind: BasisKind) -> Self {
        match kind {
            BasisKind::CatmullRom => BasisMatrix::CATMULL_ROM,
            BasisKind::BSpline => BasisMatrix::B_SPLINE,
        }
    }
}

/// A path as authored on disk, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDefinition {
    pub name: String,
    pub path: ControlPath,
    pub config: Config,
    pub basis: BasisKind,
}

impl PathDefinition {
    pub fn into_animation(self) -> PathAnimation {
        PathAnimation::new(self.path, self.config).with_basis(self.basis.into())
    }
}

#[derive(Deserialize)]
struct StoredPath {
    #[serde(default)]
    name: String,
    #[serde(default)]
    closure: Closure,
    #[serde(default)]
    basis: BasisKind,
    keys: Vec<StoredKey>,
    #[serde(default)]
    config: Config,
}

#[derive(Deserialize)]
struct StoredKey {
    position: [f32; 3],
    /// `[x, y, z, w]`; need not be unit length.
    #[serde(default)]
    orientation: Option<[f32; 4]>,
}

/// Parse a stored path:
///
/// ```json
/// { "name": "loop", "closure": "closed",
///   "keys": [{ "position": [0, 0, 0], "orientation": [0, 0, 0, 1] }, ...],
///   "config": { "loop_duration": 8.0 } }
/// ```
///
/// Orientations default to identity and are normalized; the result passes
/// `ControlPath::validate` and `Config::validate`.
pub fn parse_path_json(s: &str) -> Result<PathDefinition, PathError> {
    let stored: StoredPath = serde_json::from_str(s)?;

    let mut keys = Vec::with_capacity(stored.keys.len());
    for (index, k) in stored.keys.into_iter().enumerate() {
        let position = Vec3::from_array(k.position);
        let orientation = match k.orientation {
            None => Quat::IDENTITY,
            Some(raw) => {
                let raw = Vec4::from_array(raw);
                if !raw.is_finite() || raw.length_squared() == 0.0 {
                    return Err(PathError::NonFinite { index });
                }
                normalize_or(raw, Quat::IDENTITY)
            }
        };
        keys.push(Keyframe::new(position, orientation));
    }

    let path = ControlPath::new(keys, stored.closure);
    path.validate()?;
    stored.config.validate()?;

    Ok(PathDefinition {
        name: stored.name,
        path,
        config: stored.config,
        basis: stored.basis,
    })
}
