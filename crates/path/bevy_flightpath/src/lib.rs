use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{FlightPath, Rotor};
pub use flightpath_core;
pub use resources::{DebugToggles, PathClock};
pub use systems::apply_pose;

/// Ordering for the path systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightPathSet {
    Clock,
    Apply,
}

/// Advances a shared `PathClock` and poses every `FlightPath` entity and its rotors.
pub struct FlightPathPlugin;

impl Plugin for FlightPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PathClock>()
            .configure_sets(Update, (FlightPathSet::Clock, FlightPathSet::Apply).chain())
            .add_systems(
                Update,
                systems::advance_clock_system.in_set(FlightPathSet::Clock),
            )
            .add_systems(
                Update,
                (
                    systems::apply_path_pose_system,
                    systems::spin_rotors_system,
                )
                    .in_set(FlightPathSet::Apply),
            );
    }
}

/// Keyboard toggles and gizmo drawing for the path overlay. Needs the gizmo
/// and input plugins from `DefaultPlugins`.
pub struct FlightPathDebugPlugin;

impl Plugin for FlightPathDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugToggles>()
            .init_resource::<PathClock>()
            .add_systems(
                Update,
                (
                    systems::toggle_debug_system.before(FlightPathSet::Clock),
                    systems::draw_path_gizmos_system.after(FlightPathSet::Apply),
                ),
            );
    }
}
