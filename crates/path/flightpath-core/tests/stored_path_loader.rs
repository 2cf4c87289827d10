use flightpath_core::{
    baking::export_baked_json, bake_poses, glam::Vec3, parse_path_json, BakingConfig, BasisKind,
    Closure, Easing, OutOfRangePolicy, TimeNormalization,
};

#[test]
fn every_fixture_loads_into_an_animation() {
    for name in flightpath_test_fixtures::paths::keys() {
        let json = flightpath_test_fixtures::paths::json(&name).expect("fixture json");
        let def = parse_path_json(&json).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(def.name, name);
        let anim = def.into_animation();
        assert!(anim.total_length() > 0.0, "{name}");
        assert!(!anim.debug_polyline().is_empty(), "{name}");
    }
}

#[test]
fn helicopter_loop_is_closed_with_five_segments() {
    let json = flightpath_test_fixtures::paths::json("helicopter-loop").unwrap();
    let def = parse_path_json(&json).unwrap();
    assert_eq!(def.path.closure(), Closure::Closed);
    assert_eq!(def.path.segment_count(), 5);
    assert_eq!(def.config.loop_duration, 8.0);
    assert_eq!(def.path.keys()[1].position, Vec3::new(-1.5, 1.0, 1.0));

    // closed: the polyline ends where it starts
    let anim = def.into_animation();
    let line = anim.debug_polyline();
    assert!((line[0] - line[line.len() - 1]).length() < 1e-4);
}

#[test]
fn spiral_config_overrides_are_applied() {
    let json = flightpath_test_fixtures::paths::json("spiral-climb").unwrap();
    let def = parse_path_json(&json).unwrap();
    assert_eq!(def.basis, BasisKind::CatmullRom);
    assert_eq!(def.config.easing, Easing::Smoothstep);
    assert_eq!(def.config.time_normalization, TimeNormalization::PaddedPeriod);
    assert_eq!(def.config.out_of_range, OutOfRangePolicy::Zero);
    assert_eq!(def.config.arc_length_step, 0.05);
    let anim = def.into_animation();
    // 20 samples per segment over 5 segments, plus the origin row
    assert_eq!(anim.table().rows().len(), 5 * 20 + 1);
}

#[test]
fn baked_fixture_round_trips_through_json() {
    let json = flightpath_test_fixtures::paths::json("helicopter-loop").unwrap();
    let anim = parse_path_json(&json).unwrap().into_animation();
    let baked = bake_poses(
        &anim,
        &BakingConfig {
            frame_rate: 30.0,
            ..BakingConfig::default()
        },
    );
    assert_eq!(baked.frame_count(), 8 * 30 + 1);
    let value = export_baked_json(&baked);
    let back: flightpath_core::BakedPath = serde_json::from_value(value).expect("baked json");
    assert_eq!(back, baked);
}
