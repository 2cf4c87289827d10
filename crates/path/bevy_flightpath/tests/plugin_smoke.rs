use bevy::prelude::*;
use bevy_flightpath::{
    flightpath_core::{parse_path_json, DebugFlags, PathAnimation},
    systems::{heading_ray, toggle_debug_system},
    DebugToggles, FlightPath, FlightPathPlugin, PathClock, Rotor,
};

fn helicopter() -> PathAnimation {
    let json = flightpath_test_fixtures::paths::json("helicopter-loop").expect("fixture json");
    parse_path_json(&json).expect("valid path").into_animation()
}

fn app_frozen_at(t: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(FlightPathPlugin);
    app.insert_resource(PathClock::frozen_at(t));
    app
}

#[test]
fn plugin_inserts_clock_resource() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(FlightPathPlugin);
    let clock = app.world().get_resource::<PathClock>().expect("clock");
    assert_eq!(clock.elapsed, 0.0);
    assert!(!clock.paused);
}

#[test]
fn follower_transform_matches_core_pose() {
    let anim = helicopter();
    let expected = anim.pose_at(2.75);
    let mut app = app_frozen_at(2.75);
    let e = app
        .world_mut()
        .spawn((FlightPath(anim), Transform::from_scale(Vec3::splat(2.0))))
        .id();

    app.update();

    let tf = app.world().get::<Transform>(e).expect("transform");
    assert_eq!(tf.translation, expected.translation);
    assert_eq!(tf.rotation, expected.rotation);
    // scale is left to the user
    assert_eq!(tf.scale, Vec3::splat(2.0));
}

#[test]
fn running_clock_advances_from_time() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(FlightPathPlugin);
    app.insert_resource(PathClock {
        elapsed: 1.0,
        speed: 0.0,
        paused: false,
    });
    app.update();
    app.update();
    // zero speed keeps the clock still even though Time moved
    assert_eq!(app.world().resource::<PathClock>().elapsed, 1.0);
}

#[test]
fn rotor_children_spin_about_their_pivot() {
    let anim = helicopter();
    let t = 0.2;
    let angle = anim.rotor_angle(t);
    let mut app = app_frozen_at(t);
    let body = app
        .world_mut()
        .spawn((FlightPath(anim), Transform::default()))
        .id();
    let pivot = Vec3::new(0.0, 0.5, 0.0);
    let rotor = Rotor::new(pivot, Vec3::Y);
    let blade = app
        .world_mut()
        .spawn((rotor, Transform::default()))
        .set_parent(body)
        .id();

    app.update();

    let tf = *app.world().get::<Transform>(blade).expect("transform");
    let want = Quat::from_axis_angle(Vec3::Y, angle);
    assert!(tf.rotation.angle_between(want) < 1e-4);
    // the pivot itself does not move
    assert!((tf.transform_point(pivot) - pivot).length() < 1e-5);
}

#[test]
fn reversed_rotor_spins_the_other_way() {
    let rotor = Rotor::new(Vec3::ZERO, Vec3::Z).reversed();
    let tf = rotor.transform_at(0.5);
    let want = Quat::from_axis_angle(Vec3::Z, -0.5);
    assert!(tf.rotation.angle_between(want) < 1e-5);
    assert_eq!(Rotor::new(Vec3::ONE, Vec3::ZERO).transform_at(1.0), Transform::IDENTITY);
}

#[test]
fn keys_toggle_overlay_and_pause() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<DebugToggles>()
        .init_resource::<PathClock>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, toggle_debug_system);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyK);
    app.update();
    let flags = app.world().resource::<DebugToggles>().flags;
    assert!(flags.polyline && flags.markers);

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.release(KeyCode::KeyK);
        keys.press(KeyCode::KeyP);
        keys.press(KeyCode::Space);
    }
    app.update();
    let flags = app.world().resource::<DebugToggles>().flags;
    assert!(!flags.polyline && flags.markers);
    assert!(app.world().resource::<PathClock>().paused);
}

#[test]
fn heading_ray_points_along_travel() {
    let anim = helicopter();
    let frame = anim.frame(1.0, DebugFlags::ALL);
    let ray = heading_ray(&anim, frame.param).expect("moving path has a heading");
    assert!((ray.length() - 0.75).abs() < 1e-4);
    // a small step forward along the curve moves roughly along the ray
    let ahead = anim.pose_at_param(frame.param + 0.01).translation - frame.pose.translation;
    assert!(ahead.normalize().dot(ray.normalize()) > 0.99);
}
