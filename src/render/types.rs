//! Geometrie-Typen für die Übergabe an den Renderer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex der Strassenoberfläche.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RoadVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// Vertex-Normale (nach `compute_vertex_normals`)
    pub normal: [f32; 3],
    /// Textur-Koordinate (u quer, v längs der Strasse)
    pub uv: [f32; 2],
}

impl RoadVertex {
    /// Byte-Abstand zweier Vertices im Vertex-Buffer.
    pub const STRIDE: usize = std::mem::size_of::<RoadVertex>();

    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: [0.0; 3],
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Vertex einer Linien-Geometrie (Mittellinie).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Indizierte Dreiecks-Geometrie der Strasse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RibbonMesh {
    pub vertices: Vec<RoadVertex>,
    /// Dreiecks-Indizes (je 3 pro Dreieck)
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex-Daten als Bytes für den Upload in einen GPU-Buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index-Daten als Bytes für den Upload in einen GPU-Buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Zusammenhängende Polyline (z.B. Fahrbahnmarkierung).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    pub points: Vec<Vec3>,
}

impl LineGeometry {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkte als GPU-taugliche Vertices.
    pub fn vertices(&self) -> Vec<LineVertex> {
        self.points
            .iter()
            .map(|p| LineVertex {
                position: p.to_array(),
            })
            .collect()
    }
}
