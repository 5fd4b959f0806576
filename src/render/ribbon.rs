//! Band-Geometrie (Strassenoberfläche) entlang einer Kurve.

use super::types::{RibbonMesh, RoadVertex};
use crate::core::RoadCurve;
use glam::{Vec2, Vec3};

/// Länge eines UV-Bandes in v-Richtung je Segment.
const UV_BAND: f32 = 0.1;

/// Erzeugt ein Band konstanter Breite entlang `curve`.
///
/// Die Kurve wird an `sample_count` Stellen abgetastet; jedes Paar
/// aufeinanderfolgender Samples ergibt ein Quad aus 4 eigenen Vertices
/// (links/rechts an i und i+1) und 2 nach oben zeigenden Dreiecken.
/// Bei weniger als 2 Samples ist das Ergebnis leer.
pub fn build_ribbon(
    curve: &RoadCurve,
    sample_count: usize,
    width: f32,
    height_offset: f32,
) -> RibbonMesh {
    let points = curve.sample(sample_count);
    if points.len() < 2 {
        return RibbonMesh::default();
    }

    let segments = points.len() - 1;
    let half_width = width * 0.5;
    let lift = Vec3::new(0.0, height_offset, 0.0);

    let mut vertices = Vec::with_capacity(segments * 4);
    let mut indices = Vec::with_capacity(segments * 6);

    for (i, pair) in points.windows(2).enumerate() {
        let (p1, p2) = (pair[0], pair[1]);

        let forward = (p2 - p1).normalize_or_zero();
        let perp = Vec3::new(-forward.z, 0.0, forward.x).normalize_or_zero() * half_width;

        let base = vertices.len() as u32;

        // v steigt je Segment um 1/segments, das Band ist UV_BAND lang:
        // benachbarte Bänder überlappen.
        let v = i as f32 / segments as f32;
        vertices.push(RoadVertex::new(p1 + perp + lift, Vec2::new(0.0, v)));
        vertices.push(RoadVertex::new(p1 - perp + lift, Vec2::new(1.0, v)));
        vertices.push(RoadVertex::new(p2 + perp + lift, Vec2::new(0.0, v + UV_BAND)));
        vertices.push(RoadVertex::new(p2 - perp + lift, Vec2::new(1.0, v + UV_BAND)));

        indices.extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }

    let mut mesh = RibbonMesh { vertices, indices };
    compute_vertex_normals(&mut mesh);
    mesh
}

/// Glatte Vertex-Normalen: flächengewichtete Summe der angrenzenden Dreiecks-Normalen.
pub fn compute_vertex_normals(mesh: &mut RibbonMesh) {
    let mut normals = vec![Vec3::ZERO; mesh.vertices.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = mesh.vertices[a].position();
        let pb = mesh.vertices[b].position();
        let pc = mesh.vertices[c].position();
        let face = (pc - pb).cross(pa - pb);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for (vertex, normal) in mesh.vertices.iter_mut().zip(normals) {
        vertex.normal = normal.normalize_or_zero().to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_curve() -> RoadCurve {
        RoadCurve::new(
            vec![Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), Vec3::new(100.0, 0.0, 0.0)],
            0.1,
        )
        .expect("Kurve erwartet")
    }

    #[test]
    fn test_vertex_and_index_counts() {
        let curve = straight_curve();
        for n in [2usize, 3, 10, 41] {
            let mesh = build_ribbon(&curve, n, 10.0, 0.3);
            assert_eq!(mesh.vertices.len(), 4 * (n - 1));
            assert_eq!(mesh.indices.len(), 6 * (n - 1));
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        }
    }

    #[test]
    fn test_too_few_samples_yield_empty_mesh() {
        let curve = straight_curve();
        assert!(build_ribbon(&curve, 0, 10.0, 0.3).is_empty());
        assert!(build_ribbon(&curve, 1, 10.0, 0.3).is_empty());
    }

    #[test]
    fn test_width_and_height_offset() {
        let mesh = build_ribbon(&straight_curve(), 3, 10.0, 0.3);

        let left = mesh.vertices[0].position();
        let right = mesh.vertices[1].position();
        assert_relative_eq!(left.distance(right), 10.0, epsilon = 1e-4);
        assert_relative_eq!(left.y, 0.3, epsilon = 1e-6);
        assert_relative_eq!(right.y, 0.3, epsilon = 1e-6);

        // Fahrtrichtung +x → links liegt bei +z
        assert_relative_eq!(left.z, 5.0, epsilon = 1e-4);
        assert_relative_eq!(right.z, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_faces_point_upwards() {
        let mesh = build_ribbon(&straight_curve(), 5, 4.0, 0.0);
        for vertex in &mesh.vertices {
            let n = vertex.normal();
            assert_relative_eq!(n.y, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_uv_layout() {
        let mesh = build_ribbon(&straight_curve(), 5, 4.0, 0.0);
        // Segment 2 von 4: v = 0.5
        let quad = &mesh.vertices[8..12];
        assert_eq!(quad[0].uv, [0.0, 0.5]);
        assert_eq!(quad[1].uv, [1.0, 0.5]);
        assert_relative_eq!(quad[2].uv[1], 0.6, epsilon = 1e-6);
        assert_eq!(quad[3].uv[0], 1.0);
    }

    #[test]
    fn test_degenerate_segment_collapses_without_nan() {
        let curve = RoadCurve::new(vec![Vec3::ZERO, Vec3::ZERO], 0.5).expect("Kurve erwartet");
        let mesh = build_ribbon(&curve, 3, 10.0, 0.3);
        assert_eq!(mesh.vertices.len(), 8);
        assert!(mesh
            .vertices
            .iter()
            .all(|v| v.position().is_finite() && v.normal().is_finite()));
    }
}
