//! Flies a box-and-rotor helicopter around the stored loop.
//! K toggles the path overlay, P the polyline alone, Space pauses.

use bevy::prelude::*;
use bevy_flightpath::{
    flightpath_core::parse_path_json, FlightPath, FlightPathDebugPlugin, FlightPathPlugin, Rotor,
};

const LOOP_JSON: &str = include_str!("../../../../fixtures/paths/helicopter_loop.json");

#[derive(Resource)]
struct LoadedPath(FlightPath);

fn main() -> anyhow::Result<()> {
    let def = parse_path_json(LOOP_JSON)?;
    let summary = format!("loaded path '{}' with {} keys", def.name, def.path.len());

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((FlightPathPlugin, FlightPathDebugPlugin))
        .insert_resource(LoadedPath(FlightPath(def.into_animation())))
        .add_systems(Startup, (setup, move || info!("{summary}")))
        .run();
    Ok(())
}

fn setup(
    mut commands: Commands,
    loaded: Res<LoadedPath>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body = commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Cuboid::new(0.6, 0.3, 1.0)),
                material: materials.add(Color::srgb(0.8, 0.2, 0.2)),
                ..default()
            },
            loaded.0.clone(),
        ))
        .id();

    let blade = meshes.add(Cuboid::new(1.4, 0.02, 0.08));
    let blade_mat = materials.add(Color::srgb(0.15, 0.15, 0.15));
    for (offset, rotor) in [
        (Vec3::new(0.0, 0.2, 0.0), Rotor::new(Vec3::ZERO, Vec3::Y)),
        (Vec3::new(0.1, 0.1, 0.9), Rotor::new(Vec3::ZERO, Vec3::X).reversed()),
    ] {
        let blade_entity = commands
            .spawn((
                PbrBundle {
                    mesh: blade.clone(),
                    material: blade_mat.clone(),
                    ..default()
                },
                rotor,
            ))
            .id();
        let mount = commands
            .spawn(SpatialBundle::from_transform(Transform::from_translation(offset)))
            .add_child(blade_entity)
            .id();
        commands.entity(body).add_child(mount);
    }

    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, 6.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
}
