//! Ausdünnen zu dicht liegender Pfadpunkte.

use glam::Vec3;

/// Entfernt Punkte, die näher als `min_distance` am zuletzt behaltenen Punkt liegen.
///
/// Ein gieriger Durchlauf in Eingabereihenfolge (kein Douglas-Peucker):
/// erster und letzter Punkt bleiben immer erhalten, innere Punkte nur wenn
/// ihr Abstand zum zuletzt behaltenen Punkt `>= min_distance` ist.
/// Bei `<= 2` Punkten wird die Eingabe unverändert zurückgegeben.
pub fn simplify_path(points: &[Vec3], min_distance: f32) -> Vec<Vec3> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut filtered = Vec::with_capacity(points.len());
    filtered.push(points[0]);

    for &current in &points[1..points.len() - 1] {
        let last_kept = filtered[filtered.len() - 1];
        if last_kept.distance(current) >= min_distance {
            filtered.push(current);
        }
    }

    filtered.push(points[points.len() - 1]);
    filtered
}
