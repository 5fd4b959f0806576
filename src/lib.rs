//! GPX Road Viewer Library.
//! Strassen-Erzeugung aus GPS-Tracks und Pfad-Verfolgung als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use crate::core::{project_route, route_centroid, simplify_path, GeoPoint, RoadCurve};
pub use app::{
    BikeController, MotionState, Movable, RoadError, RoadGenerator, TrackedObject, Transform,
};
pub use render::{
    LineGeometry, RibbonMesh, RoadVertex, Scene, SceneGraph, SceneHandle, SceneObject,
};
pub use shared::{MotionOptions, RoadOptions, ViewerOptions};

/// Wandelt GPX-Trackpunkte in Geo-Koordinaten für den Generator.
pub fn geo_points_from_track(points: &[gpx_track::TrackPoint]) -> Vec<GeoPoint> {
    points
        .iter()
        .map(|p| GeoPoint::new(p.latitude, p.longitude))
        .collect()
}
