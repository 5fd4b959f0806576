//! Szenen-Container, in den die Strassen-Geometrie eingehängt wird.
//!
//! Der eigentliche Renderer gehört dem Aufrufer; er stellt über
//! [`SceneGraph`] nur das Ein- und Aushängen von Objekten bereit.

use super::types::{LineGeometry, RibbonMesh};
use indexmap::IndexMap;

/// Stabile Referenz auf ein eingehängtes Objekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneHandle(u64);

impl SceneHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Objekte, die der Strassen-Generator in eine Szene hängt.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// Strassenoberfläche
    RoadMesh(RibbonMesh),
    /// Mittellinie
    CenterLine(LineGeometry),
}

impl SceneObject {
    pub fn as_road_mesh(&self) -> Option<&RibbonMesh> {
        match self {
            SceneObject::RoadMesh(mesh) => Some(mesh),
            SceneObject::CenterLine(_) => None,
        }
    }

    pub fn as_center_line(&self) -> Option<&LineGeometry> {
        match self {
            SceneObject::CenterLine(line) => Some(line),
            SceneObject::RoadMesh(_) => None,
        }
    }
}

/// Vom Aufrufer bereitgestellter Szenen-Graph.
pub trait SceneGraph {
    /// Hängt ein Objekt ein und gibt dessen Handle zurück.
    fn add(&mut self, object: SceneObject) -> SceneHandle;

    /// Hängt ein Objekt aus. `None` wenn das Handle unbekannt ist.
    fn remove(&mut self, handle: SceneHandle) -> Option<SceneObject>;

    /// Ersetzt ein Objekt in einem Schritt: erst aushängen, dann einhängen.
    ///
    /// Zwischen den beiden Schritten ist keine andere Operation möglich, es
    /// sind also nie altes und neues Objekt gleichzeitig eingehängt.
    fn replace(&mut self, old: Option<SceneHandle>, object: SceneObject) -> SceneHandle {
        if let Some(handle) = old {
            if self.remove(handle).is_none() {
                log::debug!("Szenen-Objekt #{} war bereits ausgehängt", handle.id());
            }
        }
        self.add(object)
    }
}

/// Einfache In-Memory-Szene mit stabiler Einfüge-Reihenfolge.
#[derive(Debug, Default)]
pub struct Scene {
    objects: IndexMap<SceneHandle, SceneObject>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, handle: SceneHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SceneHandle, &SceneObject)> {
        self.objects.iter().map(|(&h, o)| (h, o))
    }

    /// Anzahl eingehängter Strassen-Meshes.
    pub fn mesh_count(&self) -> usize {
        self.objects
            .values()
            .filter(|o| o.as_road_mesh().is_some())
            .count()
    }

    /// Anzahl eingehängter Linien.
    pub fn line_count(&self) -> usize {
        self.objects
            .values()
            .filter(|o| o.as_center_line().is_some())
            .count()
    }
}

impl SceneGraph for Scene {
    fn add(&mut self, object: SceneObject) -> SceneHandle {
        self.next_id += 1;
        let handle = SceneHandle(self.next_id);
        self.objects.insert(handle, object);
        handle
    }

    fn remove(&mut self, handle: SceneHandle) -> Option<SceneObject> {
        self.objects.shift_remove(&handle)
    }
}
