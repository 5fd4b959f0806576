/// Integration-Tests: GPX → Strasse → Fahrzeug
use gpx_road_viewer::{
    geo_points_from_track, project_route, simplify_path, BikeController, GeoPoint, RoadGenerator,
    RoadOptions, Scene, SceneObject, TrackedObject,
};

fn sample_coordinates() -> Vec<GeoPoint> {
    let gpx = gpx_track::parse_gpx(include_str!("fixtures/sample.gpx")).unwrap();
    geo_points_from_track(&gpx.first_track_points())
}

#[test]
fn test_fixture_parses() {
    let gpx = gpx_track::parse_gpx(include_str!("fixtures/sample.gpx")).unwrap();
    assert_eq!(gpx.name.as_deref(), Some("Tour de la Croix-Rousse"));
    assert_eq!(gpx.tracks[0].name.as_deref(), Some("Boucle matinale"));
    assert_eq!(gpx.first_track_points().len(), 41);
}

#[test]
fn test_project_and_simplify_keep_endpoints() {
    let coords = sample_coordinates();
    let projected = project_route(&coords, 100_000.0);
    assert_eq!(projected.len(), coords.len());

    for min_distance in [0.0, 10.0, 70.0, 500.0, 1.0e6] {
        let path = simplify_path(&projected, min_distance);
        assert_eq!(path.first(), projected.first());
        assert_eq!(path.last(), projected.last());
        assert!(path.len() <= projected.len());
        assert_eq!(simplify_path(&path, min_distance), path);
    }

    assert_eq!(simplify_path(&projected, 0.0), projected);
}

#[test]
fn test_duplicate_points_collapse_scenario() {
    let coords = [
        GeoPoint::new(40.0, -74.0),
        GeoPoint::new(40.0, -74.0),
        GeoPoint::new(40.1, -74.0),
    ];
    let projected = project_route(&coords, 1000.0);
    let path = simplify_path(&projected, 70.0);
    assert_eq!(path.len(), 2);
}

#[test]
fn test_full_pipeline_on_fixture() {
    let coords = sample_coordinates();
    let options = RoadOptions::default();
    let mut scene = Scene::new();
    let mut generator = RoadGenerator::new();

    let curve = generator
        .generate_road(&mut scene, &coords, &options)
        .expect("Strasse erwartet");
    // Doppelter Startpunkt fällt weg, alle anderen liegen > 70 Einheiten auseinander
    assert_eq!(curve.control_points().len(), 40);

    let samples = options.sample_count(40);
    let mesh = generator
        .road_mesh()
        .and_then(|h| scene.get(h))
        .and_then(SceneObject::as_road_mesh)
        .expect("Mesh erwartet");
    assert_eq!(mesh.vertices.len(), 4 * (samples - 1));
    assert_eq!(mesh.indices.len(), 6 * (samples - 1));
    assert!(mesh.vertices.iter().all(|v| v.normal[1] > 0.99));

    // Zweite Erzeugung ersetzt die erste
    generator
        .generate_road(&mut scene, &coords, &options)
        .expect("Strasse erwartet");
    assert_eq!(scene.mesh_count(), 1);
    assert_eq!(scene.line_count(), 1);
}

#[test]
fn test_bike_loops_over_fixture_road() {
    let coords = sample_coordinates();
    let mut scene = Scene::new();
    let mut generator = RoadGenerator::new();
    generator
        .generate_road(&mut scene, &coords, &RoadOptions::default())
        .expect("Strasse erwartet");

    let speed = 0.0007;
    let mut controller = BikeController::new();
    controller.set_speed(speed);
    controller.start_moving();
    let mut bike = TrackedObject::default();

    let ticks = (1.0f64 / speed).ceil() as usize;
    let mut wrapped = false;
    for _ in 0..ticks {
        controller.update(&generator, &mut bike);
        wrapped |= controller.progress() < speed;
    }
    assert!(wrapped);
    assert_eq!(controller.laps(), 1);

    let path = generator.path_points();
    let start = generator.bike_transform(0.0).expect("Transform erwartet");
    assert!((start.position.x - path[0].x).abs() < 1e-2);
    assert!((start.position.z - path[0].z).abs() < 1e-2);
}
