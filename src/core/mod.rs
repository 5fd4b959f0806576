//! Core-Domänentypen: Geo-Koordinaten, Pfad-Vereinfachung, Strassenkurve.

pub mod curve;
pub mod geo;
pub mod path;

pub use curve::RoadCurve;
pub use geo::{project_point, project_route, route_centroid, GeoPoint};
pub use path::simplify_path;
