//! Zentrale Konfiguration für den GPX Road Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Strasse ─────────────────────────────────────────────────────────

/// Strassenbreite in Szenen-Einheiten.
pub const ROAD_WIDTH: f32 = 10.0;
/// Höhe der Strassenoberfläche über dem Boden.
pub const ROAD_HEIGHT: f32 = 0.3;
/// Projektions-Faktor Grad → Szenen-Einheiten.
pub const PROJECTION_SCALE: f64 = 100_000.0;
/// Catmull-Rom-Tension der Strassenkurve.
pub const ROAD_SMOOTHNESS: f32 = 0.1;
/// Mindestabstand zwischen zwei behaltenen Pfadpunkten.
pub const MIN_POINT_SPACING: f32 = 70.0;
/// Kurven-Samples je (vereinfachtem) Pfadpunkt.
pub const SAMPLES_PER_PATH_POINT: usize = 20;
/// Abstand der Mittellinie über der Strassenoberfläche (gegen Z-Fighting).
pub const CENTER_LINE_OFFSET: f32 = 0.6;
/// Höhe des Fahrers über der Kurve.
pub const RIDER_HEIGHT: f32 = 1.0;

// ── Bewegung ────────────────────────────────────────────────────────

/// Fortschritt je Frame (Anteil der Gesamtstrecke).
pub const BIKE_SPEED: f64 = 0.0002;
/// Anzahl simulierter Frames im Headless-Lauf.
pub const DEFAULT_FRAMES: u32 = 600;

/// Parameter für die Strassen-Erzeugung.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoadOptions {
    /// Strassenbreite in Szenen-Einheiten
    pub road_width: f32,
    /// Anhebung der Strassenoberfläche
    pub road_height: f32,
    /// Projektions-Faktor (Grad → Einheiten)
    pub scale: f64,
    /// Kurven-Tension
    pub smoothness: f32,
    /// Mindestabstand der Pfadpunkte nach der Vereinfachung
    pub min_point_spacing: f32,
    /// Kurven-Samples je Pfadpunkt
    pub samples_per_point: usize,
    /// Anhebung der Mittellinie über den Kurvenpunkten
    pub center_line_offset: f32,
    /// Anhebung des Fahrzeugs über den Kurvenpunkten
    pub rider_height: f32,
}

impl Default for RoadOptions {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            road_height: ROAD_HEIGHT,
            scale: PROJECTION_SCALE,
            smoothness: ROAD_SMOOTHNESS,
            min_point_spacing: MIN_POINT_SPACING,
            samples_per_point: SAMPLES_PER_PATH_POINT,
            center_line_offset: CENTER_LINE_OFFSET,
            rider_height: RIDER_HEIGHT,
        }
    }
}

impl RoadOptions {
    /// Anzahl der Kurven-Samples für einen Pfad mit `path_len` Punkten.
    pub fn sample_count(&self, path_len: usize) -> usize {
        path_len
            .saturating_mul(self.samples_per_point.max(1))
            .saturating_add(1)
    }
}

/// Parameter für den Motion-Controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionOptions {
    /// Fortschritt je Frame
    pub speed: f64,
    /// Bewegung direkt nach dem Erzeugen der Strasse starten
    pub autostart: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            speed: BIKE_SPEED,
            autostart: true,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `gpx_road_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    /// Standard-GPX-Datei, falls kein Pfad übergeben wird
    pub gpx_path: Option<String>,
    /// Anzahl simulierter Frames
    pub frames: u32,
    pub road: RoadOptions,
    pub motion: MotionOptions,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            gpx_path: None,
            frames: DEFAULT_FRAMES,
            road: RoadOptions::default(),
            motion: MotionOptions::default(),
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fallback auf Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("gpx_road_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gpx_road_viewer.toml")
    }
}
