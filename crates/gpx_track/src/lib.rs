//! `gpx_track` — Liest Tracks und Routen aus GPX-Dateien (GPX 1.0 / 1.1).
//!
//! Es werden nur die Teile des Formats gelesen, die für die Strassen-Erzeugung
//! gebraucht werden: Track-/Routen-Namen, Trackpunkte mit Lat/Lon sowie
//! optional Höhe und Zeitstempel.
//!
//! # Beispiel
//! ```no_run
//! let gpx = gpx_track::load_gpx("static/gpx/sample.gpx")?;
//! let coords: Vec<(f64, f64)> = gpx
//!     .first_track_points()
//!     .iter()
//!     .map(|p| p.lat_lng())
//!     .collect();
//! # Ok::<(), anyhow::Error>(())
//! ```

mod parser;

use anyhow::{Context, Result};
use std::path::Path;

pub use parser::parse_gpx;

/// Einzelner Punkt eines Tracks oder einer Route.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Breitengrad in Grad
    pub latitude: f64,
    /// Längengrad in Grad
    pub longitude: f64,
    /// Höhe über NN in Metern (`<ele>`)
    pub elevation: Option<f64>,
    /// Zeitstempel als Rohtext (`<time>`)
    pub time: Option<String>,
}

impl TrackPoint {
    /// Erstellt einen Punkt ohne Höhe und Zeit.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
            time: None,
        }
    }

    /// Gibt `(lat, lon)` zurück.
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Zusammenhängender Abschnitt eines Tracks (`<trkseg>`).
#[derive(Debug, Clone, Default)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// Aufgezeichneter Track (`<trk>`).
#[derive(Debug, Clone, Default)]
pub struct Track {
    pub name: Option<String>,
    pub segments: Vec<TrackSegment>,
}

impl Track {
    /// Alle Punkte aller Segmente in Dateireihenfolge.
    pub fn points(&self) -> impl Iterator<Item = &TrackPoint> {
        self.segments.iter().flat_map(|s| s.points.iter())
    }

    /// Gesamtzahl der Punkte über alle Segmente.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

/// Geplante Route (`<rte>`).
#[derive(Debug, Clone, Default)]
pub struct Route {
    pub name: Option<String>,
    pub points: Vec<TrackPoint>,
}

/// Inhalt einer GPX-Datei.
#[derive(Debug, Clone, Default)]
pub struct Gpx {
    /// Name aus `<metadata>` (GPX 1.1) bzw. Wurzel-`<name>` (GPX 1.0)
    pub name: Option<String>,
    pub tracks: Vec<Track>,
    pub routes: Vec<Route>,
}

impl Gpx {
    /// Punkte des ersten Tracks, Segmente aneinandergehängt.
    ///
    /// Leer wenn die Datei keinen Track enthält.
    pub fn first_track_points(&self) -> Vec<TrackPoint> {
        self.tracks
            .first()
            .map(|t| t.points().cloned().collect())
            .unwrap_or_default()
    }

    /// Punkte des ersten Tracks, ersatzweise der ersten Route.
    pub fn primary_points(&self) -> Vec<TrackPoint> {
        let points = self.first_track_points();
        if !points.is_empty() {
            return points;
        }
        self.routes
            .first()
            .map(|r| r.points.clone())
            .unwrap_or_default()
    }
}

/// Lädt und parst eine GPX-Datei von der Festplatte.
pub fn load_gpx(path: impl AsRef<Path>) -> Result<Gpx> {
    let path = path.as_ref();
    log::info!("Lade GPX-Datei: {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("GPX-Datei konnte nicht gelesen werden: {}", path.display()))?;
    let gpx = parse_gpx(&content)
        .with_context(|| format!("GPX-Datei fehlerhaft: {}", path.display()))?;

    log::info!(
        "GPX geladen: {} Track(s), {} Route(n)",
        gpx.tracks.len(),
        gpx.routes.len()
    );
    Ok(gpx)
}
