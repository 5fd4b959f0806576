//! GPX Road Viewer (Headless-Lauf).
//!
//! Lädt einen GPX-Track, erzeugt daraus Strasse und Mittellinie und lässt das
//! Fahrzeug eine feste Anzahl Frames fahren. Das Ergebnis wird als JSON auf
//! stdout ausgegeben.
//!
//! Aufruf: `GPX-Road-Viewer [GPX-DATEI] [OPTIONEN.toml]`

use anyhow::{bail, Context, Result};
use gpx_road_viewer::{
    geo_points_from_track, route_centroid, BikeController, GeoPoint, RoadGenerator, Scene,
    SceneObject, TrackedObject, ViewerOptions,
};
use serde::Serialize;
use std::path::PathBuf;

fn main() -> Result<()> {
    AppRunner::run()
}

/// Kennzahlen eines Laufs.
#[derive(Debug, Serialize)]
struct RunSummary {
    track_name: Option<String>,
    input_points: usize,
    path_points: usize,
    origin: Option<GeoPoint>,
    road_length: f32,
    vertex_count: usize,
    triangle_count: usize,
    center_line_points: usize,
    gpu_bytes: usize,
    frames: u32,
    laps: u32,
    final_progress: f64,
    final_position: [f32; 3],
    final_heading_deg: f32,
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("GPX Road Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut args = std::env::args().skip(1);
        let gpx_arg = args.next();
        let config_path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(ViewerOptions::config_path);

        let options = ViewerOptions::load_from_file(&config_path);
        let Some(gpx_path) = gpx_arg.or_else(|| options.gpx_path.clone()) else {
            bail!("Keine GPX-Datei angegeben (Argument oder `gpx_path` in den Optionen)");
        };

        let gpx = gpx_track::load_gpx(&gpx_path)?;
        let track_name = gpx.tracks.first().and_then(|t| t.name.clone());
        let coordinates = geo_points_from_track(&gpx.primary_points());

        let mut scene = Scene::new();
        let mut generator = RoadGenerator::new();
        let road_length = {
            let curve = generator
                .generate_road(&mut scene, &coordinates, &options.road)
                .with_context(|| format!("Strasse aus {} nicht erzeugbar", gpx_path))?;
            curve.approximate_length(options.road.sample_count(curve.control_points().len()))
        };

        let mut controller = BikeController::with_options(&options.motion);
        let mut bike = TrackedObject::default();
        if let Some(start) = generator.bike_transform(0.0) {
            bike.position = start.position;
            bike.heading = start.heading;
        }
        if options.motion.autostart {
            controller.start_moving();
        }

        for _ in 0..options.frames {
            controller.update(&generator, &mut bike);
        }

        let mesh = generator
            .road_mesh()
            .and_then(|h| scene.get(h))
            .and_then(SceneObject::as_road_mesh);
        let line = generator
            .center_line()
            .and_then(|h| scene.get(h))
            .and_then(SceneObject::as_center_line);

        let summary = RunSummary {
            track_name,
            input_points: coordinates.len(),
            path_points: generator.path_points().len(),
            origin: route_centroid(&coordinates),
            road_length,
            vertex_count: mesh.map_or(0, |m| m.vertices.len()),
            triangle_count: mesh.map_or(0, |m| m.triangle_count()),
            center_line_points: line.map_or(0, |l| l.len()),
            gpu_bytes: mesh.map_or(0, |m| m.vertex_bytes().len() + m.index_bytes().len())
                + line.map_or(0, |l| bytemuck::cast_slice::<_, u8>(&l.vertices()).len()),
            frames: options.frames,
            laps: controller.laps(),
            final_progress: controller.progress(),
            final_position: bike.position.to_array(),
            final_heading_deg: bike.heading.to_degrees(),
        };

        log::info!(
            "Lauf beendet: {} Frames, Fortschritt {:.4}, {} Runde(n)",
            summary.frames,
            summary.final_progress,
            summary.laps
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
