//! Fahrbahnmarkierung (Mittellinie) knapp über der Strassenoberfläche.

use super::types::LineGeometry;
use crate::core::RoadCurve;

/// Tastet `curve` wie das Strassenband ab und hebt jeden Punkt um `vertical_offset` an.
///
/// Der Versatz muss grösser als die Strassenhöhe sein, sonst flackert
/// die Linie (Z-Fighting).
pub fn build_center_line(
    curve: &RoadCurve,
    sample_count: usize,
    vertical_offset: f32,
) -> LineGeometry {
    let points = curve
        .sample(sample_count)
        .into_iter()
        .map(|mut p| {
            p.y += vertical_offset;
            p
        })
        .collect();
    LineGeometry { points }
}
