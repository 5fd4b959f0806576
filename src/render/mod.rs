//! Geometrie-Erzeugung für den Renderer: Strassenband, Mittellinie, Szenen-Container.
//!
//! Gerendert wird ausserhalb dieses Crates; hier entstehen nur Vertex-/Index-Daten
//! und deren Ein- und Aushängen in eine Szene.

pub mod markings;
pub mod ribbon;
pub mod scene;
pub mod types;

pub use markings::build_center_line;
pub use ribbon::{build_ribbon, compute_vertex_normals};
pub use scene::{Scene, SceneGraph, SceneHandle, SceneObject};
pub use types::{LineGeometry, LineVertex, RibbonMesh, RoadVertex};
