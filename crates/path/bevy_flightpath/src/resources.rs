use bevy::prelude::*;
use flightpath_core::DebugFlags;

/// Animation time shared by every `FlightPath`, advanced from `Time` unless paused.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PathClock {
    pub elapsed: f32,
    pub speed: f32,
    pub paused: bool,
}

impl Default for PathClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            speed: 1.0,
            paused: false,
        }
    }
}

impl PathClock {
    /// A paused clock pinned at `elapsed`.
    pub fn frozen_at(elapsed: f32) -> Self {
        Self {
            elapsed,
            speed: 1.0,
            paused: true,
        }
    }
}

/// Which debug layers are drawn, and the keys that flip them.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugToggles {
    pub flags: DebugFlags,
    /// Path polyline plus keyframe markers.
    pub path_key: KeyCode,
    pub polyline_key: KeyCode,
    pub pause_key: KeyCode,
}

impl Default for DebugToggles {
    fn default() -> Self {
        Self {
            flags: DebugFlags::NONE,
            path_key: KeyCode::KeyK,
            polyline_key: KeyCode::KeyP,
            pause_key: KeyCode::Space,
        }
    }
}
