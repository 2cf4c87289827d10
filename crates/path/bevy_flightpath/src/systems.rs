use bevy::prelude::*;
use flightpath_core::{DebugOverlay, PathAnimation, Pose};

use crate::components::{FlightPath, Rotor};
use crate::resources::{DebugToggles, PathClock};

/// Copies a core pose into a Bevy transform, leaving scale untouched.
pub fn apply_pose(pose: &Pose, tf: &mut Transform) {
    tf.translation = pose.translation;
    tf.rotation = pose.rotation;
}

pub fn advance_clock_system(time: Res<Time>, mut clock: ResMut<PathClock>) {
    if clock.paused {
        return;
    }
    clock.elapsed += time.delta_seconds() * clock.speed;
}

/// Poses every `FlightPath` entity at the current clock time.
pub fn apply_path_pose_system(
    clock: Res<PathClock>,
    mut q: Query<(&FlightPath, &mut Transform), Without<Rotor>>,
) {
    for (path, mut tf) in q.iter_mut() {
        apply_pose(&path.0.pose_at(clock.elapsed), &mut tf);
    }
}

/// Spins rotors using the rate configured on the nearest `FlightPath` ancestor.
pub fn spin_rotors_system(
    clock: Res<PathClock>,
    paths: Query<&FlightPath>,
    parents: Query<&Parent>,
    mut rotors: Query<(Entity, &Rotor, &mut Transform)>,
) {
    for (entity, rotor, mut tf) in rotors.iter_mut() {
        let Some(path) = parents
            .iter_ancestors(entity)
            .find_map(|a| paths.get(a).ok())
        else {
            continue;
        };
        let spun = rotor.transform_at(path.0.rotor_angle(clock.elapsed));
        tf.translation = spun.translation;
        tf.rotation = spun.rotation;
    }
}

pub fn toggle_debug_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut toggles: ResMut<DebugToggles>,
    mut clock: ResMut<PathClock>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(toggles.path_key) {
        let on = !(toggles.flags.polyline && toggles.flags.markers);
        toggles.flags.polyline = on;
        toggles.flags.markers = on;
        debug!("flightpath: path overlay {}", if on { "on" } else { "off" });
    }
    if keys.just_pressed(toggles.polyline_key) {
        toggles.flags.polyline = !toggles.flags.polyline;
    }
    if keys.just_pressed(toggles.pause_key) {
        clock.paused = !clock.paused;
    }
}

/// Draws the enabled overlay layers in world space.
pub fn draw_path_gizmos_system(
    toggles: Res<DebugToggles>,
    clock: Res<PathClock>,
    paths: Query<(&FlightPath, Option<&Parent>)>,
    globals: Query<&GlobalTransform>,
    mut gizmos: Gizmos,
) {
    if !toggles.flags.any() {
        return;
    }
    for (path, parent) in paths.iter() {
        let frame = path.0.frame(clock.elapsed, toggles.flags);
        let Some(overlay) = frame.debug else {
            continue;
        };
        let space = parent
            .and_then(|p| globals.get(p.get()).ok())
            .copied()
            .unwrap_or(GlobalTransform::IDENTITY);
        draw_overlay(&mut gizmos, &overlay, &space);
        if toggles.flags.markers {
            if let Some(ray) = heading_ray(&path.0, frame.param) {
                gizmos.ray(
                    space.transform_point(frame.pose.translation),
                    space.affine().transform_vector3(ray),
                    Color::srgb(0.2, 1.0, 0.3),
                );
            }
        }
    }
}

/// Direction-of-travel ray drawn from the current pose, `HEADING_RAY_LENGTH` long.
pub fn heading_ray(anim: &PathAnimation, param: f32) -> Option<Vec3> {
    anim.heading_at_param(param).map(|h| h * HEADING_RAY_LENGTH)
}

const HEADING_RAY_LENGTH: f32 = 0.75;

fn draw_overlay(gizmos: &mut Gizmos, overlay: &DebugOverlay, space: &GlobalTransform) {
    if !overlay.polyline.is_empty() {
        gizmos.linestrip(
            overlay.polyline.iter().map(|p| space.transform_point(*p)),
            Color::srgb(1.0, 0.4, 0.0),
        );
    }
    for marker in &overlay.markers {
        let at = space.transform_point(marker.translation);
        let rotation = space.compute_transform().rotation * marker.rotation;
        gizmos.sphere(at, rotation, 0.1, Color::WHITE);
        gizmos.ray(at, rotation * Vec3::NEG_Z * 0.4, Color::srgb(0.2, 0.6, 1.0));
    }
}
