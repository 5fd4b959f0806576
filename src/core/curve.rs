//! Offene Catmull-Rom-Kurve durch die vereinfachten Pfadpunkte.
//!
//! Der globale Parameter `t ∈ [0, 1]` wird gleichmässig auf die `n - 1`
//! Segmente verteilt (nicht nach Bogenlänge). Kurze Segmente werden dadurch
//! langsamer durchlaufen als lange.

use crate::shared::spline_geometry::{
    catmull_rom_derivative, catmull_rom_point, end_phantom, polyline_length, start_phantom,
};
use glam::Vec3;


/// Schrittweite der zentralen Differenz für `tangent_at`.
const TANGENT_DELTA: f32 = 1e-4;

/// Unveränderliche Strassenkurve.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadCurve {
    points: Vec<Vec3>,
    tension: f32,
}

impl RoadCurve {
    /// Erstellt eine Kurve durch `points`.
    ///
    /// Gibt `None` zurück wenn weniger als 2 Punkte vorliegen.
    pub fn new(points: Vec<Vec3>, tension: f32) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points, tension })
    }

    /// Kontrollpunkte, durch die die Kurve verläuft.
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Punkt auf der Kurve (`t` wird auf [0, 1] begrenzt).
    pub fn point_at(&self, t: f32) -> Vec3 {
        let (segment, weight) = self.locate(t);
        let [p0, p1, p2, p3] = self.segment_controls(segment);
        catmull_rom_point(p0, p1, p2, p3, weight, self.tension)
    }

    /// Normalisierte Fahrtrichtung an Parameter `t`.
    ///
    /// Zentrale Differenz um `t`; bei degenerierter Differenz (z.B. Tension 0
    /// exakt auf einem Kontrollpunkt) erst die analytische Ableitung, dann die
    /// Sehne des Segments.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let t = clamp_unit(t);
        let before = self.point_at((t - TANGENT_DELTA).max(0.0));
        let after = self.point_at((t + TANGENT_DELTA).min(1.0));
        if let Some(tangent) = (after - before).try_normalize() {
            return tangent;
        }

        let (segment, weight) = self.locate(t);
        let [p0, p1, p2, p3] = self.segment_controls(segment);
        catmull_rom_derivative(p0, p1, p2, p3, weight, self.tension)
            .try_normalize()
            .or_else(|| (p2 - p1).try_normalize())
            .unwrap_or(Vec3::Z)
    }

    /// `n` gleichmässig (im Parameter) verteilte Punkte von Anfang bis Ende.
    pub fn sample(&self, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => {
                let last = (n - 1) as f32;
                (0..n).map(|i| self.point_at(i as f32 / last)).collect()
            }
        }
    }

    /// Länge der Kurve, angenähert über `divisions` Sehnen.
    pub fn approximate_length(&self, divisions: usize) -> f32 {
        polyline_length(&self.sample(divisions.max(1) + 1))
    }

    /// Bildet `t` auf (Segment-Index, lokales Gewicht) ab.
    fn locate(&self, t: f32) -> (usize, f32) {
        let segments = self.segment_count();
        let p = segments as f32 * clamp_unit(t);
        let index = p.floor() as usize;
        if index >= segments {
            (segments - 1, 1.0)
        } else {
            (index, p - index as f32)
        }
    }

    /// Vier Kontrollpunkte für Segment `segment` inkl. Phantom-Punkten an den Rändern.
    fn segment_controls(&self, segment: usize) -> [Vec3; 4] {
        let n = self.points.len();
        let p1 = self.points[segment];
        let p2 = self.points[segment + 1];
        let p0 = if segment == 0 {
            start_phantom(self.points[0], self.points[1])
        } else {
            self.points[segment - 1]
        };
        let p3 = if segment + 2 < n {
            self.points[segment + 2]
        } else {
            end_phantom(self.points[n - 1], self.points[n - 2])
        };
        [p0, p1, p2, p3]
    }
}

fn clamp_unit(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
