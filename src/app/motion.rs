//! Motion-Controller: bewegt ein Objekt pro Frame entlang der Strasse.

use super::road_generator::{RoadGenerator, Transform};
use crate::shared::MotionOptions;
use glam::Vec3;

/// Bewegungszustand des Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Stopped,
    Moving,
}

/// Objekt, dessen Position/Ausrichtung der Controller setzt.
pub trait Movable {
    fn apply_transform(&mut self, transform: &Transform);
}

/// Minimales bewegliches Objekt (z.B. Platzhalter für das Fahrrad-Modell).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedObject {
    pub position: Vec3,
    pub heading: f32,
}

impl Movable for TrackedObject {
    fn apply_transform(&mut self, transform: &Transform) {
        self.position = transform.position;
        self.heading = transform.heading;
    }
}

/// Fortschritt entlang der Strasse mit Endlos-Schleife.
///
/// Fortschritt und Geschwindigkeit werden in `f64` akkumuliert; erst die
/// Abfrage der Kurve arbeitet mit `f32`.
#[derive(Debug, Clone)]
pub struct BikeController {
    progress: f64,
    speed: f64,
    state: MotionState,
    laps: u32,
}

impl Default for BikeController {
    fn default() -> Self {
        Self::with_options(&MotionOptions::default())
    }
}

impl BikeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit Geschwindigkeit aus den Optionen.
    ///
    /// `autostart` wird hier nicht ausgewertet; das entscheidet der Aufrufer
    /// nach dem Erzeugen der Strasse.
    pub fn with_options(options: &MotionOptions) -> Self {
        Self {
            progress: 0.0,
            speed: options.speed,
            state: MotionState::Stopped,
            laps: 0,
        }
    }

    pub fn start_moving(&mut self) {
        self.state = MotionState::Moving;
    }

    pub fn stop_moving(&mut self) {
        self.state = MotionState::Stopped;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Setzt den Fortschritt, begrenzt auf [0, 1].
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == MotionState::Moving
    }

    /// Anzahl vollständiger Runden seit Erstellung.
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Ein Frame: Fortschritt erhöhen, bei > 1 hart auf 0 zurücksetzen und
    /// das Ergebnis auf `object` anwenden.
    ///
    /// No-op (und `None`) solange gestoppt oder noch keine Strasse existiert.
    pub fn update(
        &mut self,
        road: &RoadGenerator,
        object: &mut impl Movable,
    ) -> Option<Transform> {
        if !self.is_moving() || !road.has_road() {
            return None;
        }

        self.progress += self.speed;
        if self.progress > 1.0 {
            // Kein Modulo: jede Runde startet exakt am Streckenanfang
            self.progress = 0.0;
            self.laps += 1;
            log::debug!("Runde {} abgeschlossen", self.laps);
        }

        let transform = road.bike_transform(self.progress as f32)?;
        object.apply_transform(&transform);
        Some(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use crate::render::Scene;
    use crate::shared::RoadOptions;

    fn road() -> RoadGenerator {
        let coords = [
            GeoPoint::new(52.50, 13.40),
            GeoPoint::new(52.51, 13.41),
            GeoPoint::new(52.52, 13.40),
        ];
        let mut scene = Scene::new();
        let mut generator = RoadGenerator::new();
        generator
            .generate_road(&mut scene, &coords, &RoadOptions::default())
            .expect("Strasse erwartet");
        generator
    }

    #[test]
    fn test_defaults() {
        let controller = BikeController::new();
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(controller.speed(), 0.0002);
        assert_eq!(controller.state(), MotionState::Stopped);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut controller = BikeController::new();
        controller.set_progress(1.5);
        assert_eq!(controller.progress(), 1.0);
        controller.set_progress(-0.2);
        assert_eq!(controller.progress(), 0.0);
        controller.set_progress(0.25);
        assert_eq!(controller.progress(), 0.25);
        controller.set_progress(f64::NAN);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_update_is_noop_when_stopped() {
        let road = road();
        let mut controller = BikeController::new();
        let mut bike = TrackedObject::default();

        assert!(controller.update(&road, &mut bike).is_none());
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(bike, TrackedObject::default());
    }

    #[test]
    fn test_update_is_noop_without_road() {
        let road = RoadGenerator::new();
        let mut controller = BikeController::new();
        controller.start_moving();
        let mut bike = TrackedObject::default();

        assert!(controller.update(&road, &mut bike).is_none());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_update_moves_object() {
        let road = road();
        let mut controller = BikeController::new();
        controller.set_speed(0.1);
        controller.start_moving();
        let mut bike = TrackedObject::default();

        let applied = controller.update(&road, &mut bike).expect("Transform erwartet");
        assert!((controller.progress() - 0.1).abs() < 1e-6);
        assert_eq!(bike.position, applied.position);
        assert_eq!(bike.heading, applied.heading);
        assert_eq!(
            Some(applied),
            road.bike_transform(controller.progress() as f32)
        );
    }

    #[test]
    fn test_wraps_to_zero_after_full_lap() {
        let road = road();
        let mut controller = BikeController::new();
        let speed = 0.3;
        controller.set_speed(speed);
        controller.start_moving();
        let mut bike = TrackedObject::default();

        let ticks = (1.0 / speed).ceil() as usize;
        for _ in 0..ticks {
            controller.update(&road, &mut bike);
        }
        assert_eq!(controller.progress(), 0.0);
        assert!(controller.progress() < speed);
        assert_eq!(controller.laps(), 1);

        let start = road.bike_transform(0.0).expect("Transform erwartet");
        assert_eq!(bike.position, start.position);
    }

    #[test]
    fn test_wraps_within_ceil_ticks_for_small_speeds() {
        let road = road();
        let mut bike = TrackedObject::default();

        for speed in [0.001, 0.003, 0.007, 0.01, 0.05, 0.3] {
            let mut controller = BikeController::new();
            controller.set_speed(speed);
            controller.start_moving();

            let ticks = (1.0 / speed).ceil() as usize;
            for _ in 0..ticks {
                controller.update(&road, &mut bike);
            }
            assert!(
                controller.laps() >= 1,
                "speed {speed}: keine Runde nach {ticks} Frames, Fortschritt {}",
                controller.progress()
            );
            assert!(controller.progress() < speed);
        }
    }

    #[test]
    fn test_stop_freezes_progress() {
        let road = road();
        let mut controller = BikeController::new();
        controller.set_speed(0.05);
        controller.start_moving();
        let mut bike = TrackedObject::default();

        controller.update(&road, &mut bike);
        controller.stop_moving();
        let frozen = controller.progress();
        controller.update(&road, &mut bike);
        assert_eq!(controller.progress(), frozen);
        assert!(!controller.is_moving());
    }
}
