//! Reine Geometrie-Funktionen für Catmull-Rom-Splines (3D, mit Tension).
//!
//! Layer-neutral: kann von `core`, `render` und `app` importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2. Die Tangenten an p1/p2 sind
/// `tension * (p2 - p0)` bzw. `tension * (p3 - p1)` (Hermite-Form);
/// `tension = 0.5` ergibt die klassische Catmull-Rom-Kurve.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32, tension: f32) -> Vec3 {
    let [c0, c1, c2, c3] = hermite_coefficients(p0, p1, p2, p3, tension);
    let t2 = t * t;
    let t3 = t2 * t;
    c0 + c1 * t + c2 * t2 + c3 * t3
}

/// Ableitung nach `t` eines Catmull-Rom-Segments (nicht normalisiert).
pub fn catmull_rom_derivative(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    t: f32,
    tension: f32,
) -> Vec3 {
    let [_, c1, c2, c3] = hermite_coefficients(p0, p1, p2, p3, tension);
    c1 + c2 * (2.0 * t) + c3 * (3.0 * t * t)
}

fn hermite_coefficients(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32) -> [Vec3; 4] {
    let m1 = tension * (p2 - p0);
    let m2 = tension * (p3 - p1);
    [
        p1,
        m1,
        -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2,
        2.0 * p1 - 2.0 * p2 + m1 + m2,
    ]
}

/// Gespiegelter Phantom-Punkt vor dem ersten Kontrollpunkt.
///
/// Damit läuft die Kurve natürlich durch den ersten Punkt.
pub fn start_phantom(first: Vec3, second: Vec3) -> Vec3 {
    2.0 * first - second
}

/// Gespiegelter Phantom-Punkt hinter dem letzten Kontrollpunkt.
pub fn end_phantom(last: Vec3, before_last: Vec3) -> Vec3 {
    2.0 * last - before_last
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_passes_through_inner_control_points() {
        let p0 = Vec3::new(-1.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 0.0, 1.0);
        let p3 = Vec3::new(2.0, 0.0, 1.0);

        for tension in [0.0, 0.1, 0.5, 1.0] {
            let start = catmull_rom_point(p0, p1, p2, p3, 0.0, tension);
            let end = catmull_rom_point(p0, p1, p2, p3, 1.0, tension);
            assert_relative_eq!(start.x, p1.x, epsilon = 1e-6);
            assert_relative_eq!(start.z, p1.z, epsilon = 1e-6);
            assert_relative_eq!(end.x, p2.x, epsilon = 1e-6);
            assert_relative_eq!(end.z, p2.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 0.0, 0.0);
        let p3 = Vec3::new(3.0, 0.0, 0.0);

        let mid = catmull_rom_point(p0, p1, p2, p3, 0.5, 0.5);
        assert_relative_eq!(mid.x, 1.5, epsilon = 1e-6);
        assert_relative_eq!(mid.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_derivative_at_start_is_scaled_chord() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 0.0, 0.0);
        let p3 = Vec3::new(3.0, 0.0, 0.0);

        let d = catmull_rom_derivative(p0, p1, p2, p3, 0.0, 0.5);
        assert_relative_eq!(d.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_phantoms_mirror_neighbours() {
        let a = Vec3::new(1.0, 0.0, 1.0);
        let b = Vec3::new(2.0, 0.0, 3.0);
        assert_eq!(start_phantom(a, b), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(end_phantom(b, a), Vec3::new(3.0, 0.0, 5.0));
    }

    #[test]
    fn test_polyline_length() {
        let points = [
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 4.0),
            Vec3::new(3.0, 0.0, 10.0),
        ];
        assert_relative_eq!(polyline_length(&points), 11.0);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }
}
