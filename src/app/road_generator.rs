//! Strassen-Generator: GPS-Koordinaten → Pfad → Kurve → Geometrie in der Szene.

use crate::core::{project_route, simplify_path, GeoPoint, RoadCurve};
use crate::render::{build_center_line, build_ribbon, SceneGraph, SceneHandle, SceneObject};
use crate::shared::{RoadOptions, RIDER_HEIGHT};
use glam::{Quat, Vec3};


/// Fehler bei der Strassen-Erzeugung.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoadError {
    /// Weniger als 2 Koordinaten übergeben
    #[error("mindestens 2 Koordinaten benoetigt, erhalten: {count}")]
    InsufficientInput { count: usize },
}

/// Position und Gierwinkel eines Objekts auf der Strasse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Drehung um die Hochachse in Radiant (`atan2(tangent.x, tangent.z)`)
    pub heading: f32,
}

impl Transform {
    /// Rotation als Quaternion (nur Gieren, kein Rollen/Nicken).
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }
}

/// Position/Ausrichtung bei `progress` ∈ [0, 1], um `rider_height` angehoben.
pub fn sample_transform(curve: &RoadCurve, progress: f32, rider_height: f32) -> Transform {
    let point = curve.point_at(progress);
    let tangent = curve.tangent_at(progress);
    Transform {
        position: point + Vec3::new(0.0, rider_height, 0.0),
        heading: tangent.x.atan2(tangent.z),
    }
}

/// Besitzt Pfad, Kurve und die Handles der eingehängten Strassen-Geometrie.
///
/// Höchstens ein Strassen-Mesh und eine Mittellinie sind gleichzeitig
/// in der Szene; eine neue Erzeugung ersetzt beide.
#[derive(Debug)]
pub struct RoadGenerator {
    path_points: Vec<Vec3>,
    curve: Option<RoadCurve>,
    road_mesh: Option<SceneHandle>,
    center_line: Option<SceneHandle>,
    rider_height: f32,
}

impl Default for RoadGenerator {
    fn default() -> Self {
        Self {
            path_points: Vec::new(),
            curve: None,
            road_mesh: None,
            center_line: None,
            rider_height: RIDER_HEIGHT,
        }
    }
}

impl RoadGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erzeugt die Strasse aus `coordinates` und hängt sie in `scene` ein.
    ///
    /// Bei weniger als 2 Koordinaten wird nichts verändert und
    /// [`RoadError::InsufficientInput`] zurückgegeben.
    pub fn generate_road(
        &mut self,
        scene: &mut impl SceneGraph,
        coordinates: &[GeoPoint],
        options: &RoadOptions,
    ) -> Result<&RoadCurve, RoadError> {
        if coordinates.len() < 2 {
            log::error!(
                "Strasse nicht erzeugt: mindestens 2 Koordinaten benoetigt, erhalten: {}",
                coordinates.len()
            );
            return Err(RoadError::InsufficientInput {
                count: coordinates.len(),
            });
        }

        let projected = project_route(coordinates, options.scale);
        let path_points = simplify_path(&projected, options.min_point_spacing);
        log::debug!(
            "Pfad vereinfacht: {} → {} Punkte (Mindestabstand {})",
            projected.len(),
            path_points.len(),
            options.min_point_spacing
        );

        let curve = RoadCurve::new(path_points.clone(), options.smoothness).ok_or(
            RoadError::InsufficientInput {
                count: path_points.len(),
            },
        )?;

        let sample_count = options.sample_count(path_points.len());
        let mesh = build_ribbon(&curve, sample_count, options.road_width, options.road_height);
        let line = build_center_line(&curve, sample_count, options.center_line_offset);

        log::info!(
            "Strasse erzeugt: {} Pfadpunkte, {} Samples, {} Dreiecke (Spannung {})",
            path_points.len(),
            sample_count,
            mesh.triangle_count(),
            curve.tension()
        );

        self.road_mesh = Some(scene.replace(self.road_mesh, SceneObject::RoadMesh(mesh)));
        self.center_line = Some(scene.replace(self.center_line, SceneObject::CenterLine(line)));
        self.path_points = path_points;
        self.rider_height = options.rider_height;

        Ok(&*self.curve.insert(curve))
    }

    /// Entfernt Strasse und Mittellinie aus der Szene und vergisst die Kurve.
    pub fn clear(&mut self, scene: &mut impl SceneGraph) {
        for handle in [self.road_mesh.take(), self.center_line.take()]
            .into_iter()
            .flatten()
        {
            scene.remove(handle);
        }
        self.curve = None;
        self.path_points.clear();
    }

    /// Position/Ausrichtung des Fahrzeugs bei `progress`.
    ///
    /// `None` solange noch keine Strasse erzeugt wurde.
    pub fn bike_transform(&self, progress: f32) -> Option<Transform> {
        self.curve
            .as_ref()
            .map(|curve| sample_transform(curve, progress, self.rider_height))
    }

    pub fn curve(&self) -> Option<&RoadCurve> {
        self.curve.as_ref()
    }

    pub fn has_road(&self) -> bool {
        self.curve.is_some()
    }

    /// Vereinfachte Pfadpunkte der aktuellen Strasse.
    pub fn path_points(&self) -> &[Vec3] {
        &self.path_points
    }

    pub fn road_mesh(&self) -> Option<SceneHandle> {
        self.road_mesh
    }

    pub fn center_line(&self) -> Option<SceneHandle> {
        self.center_line
    }
}
