//! Geografische Koordinaten und lokale Projektion in Szenen-Koordinaten.
//!
//! Die Projektion ist eine lokale equirektanguläre Näherung um den
//! Schwerpunkt der Route: `x` nach Osten, `z` nach Süden, `y = 0`.
//! Für Strecken innerhalb einer Stadt/Region ausreichend genau, über grosse
//! Breitengrad-Spannen oder nahe den Polen nicht.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geografischer Punkt in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Arithmetisches Mittel aller Breiten- und Längengrade.
///
/// `None` bei leerer Eingabe.
pub fn route_centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let lng = points.iter().map(|p| p.longitude).sum::<f64>() / n;
    Some(GeoPoint::new(lat, lng))
}

/// Projiziert einen einzelnen Punkt relativ zu `center`.
pub fn project_point(point: GeoPoint, center: GeoPoint, scale: f64) -> Vec3 {
    let x = (point.longitude - center.longitude) * scale * center.latitude.to_radians().cos();
    let z = (center.latitude - point.latitude) * scale;
    Vec3::new(x as f32, 0.0, z as f32)
}

/// Projiziert eine komplette Route um ihren Schwerpunkt.
///
/// Gibt eine leere Liste zurück wenn weniger als 2 Punkte vorliegen;
/// der Aufrufer muss das prüfen.
pub fn project_route(points: &[GeoPoint], scale: f64) -> Vec<Vec3> {
    if points.len() < 2 {
        return Vec::new();
    }
    let Some(center) = route_centroid(points) else {
        return Vec::new();
    };
    points
        .iter()
        .map(|&p| project_point(p, center, scale))
        .collect()
}
