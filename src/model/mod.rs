//! An in-memory model with a selection, usable as a [`ShapeSource`].

mod file_info;

pub use file_info::FileInfo;

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::measure::{CurveDescriptor, EdgeKey, ShapeSource, DEFAULT_KEY_RESOLUTION};
use crate::operations::query::{Area, CenterOfMass, Length, Volume};
use crate::tessellation::{TessellateCurve, TessellationParams};
use crate::topology::{EdgeCurve, EdgeId, FaceId, SolidId, SubShape, TopologyStore};

/// Distinct entities reachable from a model's root shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologyCounts {
    pub solids: usize,
    pub faces: usize,
    /// Edges counted once even when several faces own a copy.
    pub edges: usize,
}

/// A topology store with root shapes, an ordered selection and optional
/// source file metadata.
#[derive(Debug)]
pub struct CadModel {
    store: TopologyStore,
    roots: Vec<SubShape>,
    selection: Vec<SubShape>,
    source_path: Option<PathBuf>,
    mass_params: TessellationParams,
}

impl CadModel {
    #[must_use]
    pub fn new(store: TopologyStore) -> Self {
        Self {
            store,
            roots: Vec::new(),
            selection: Vec::new(),
            source_path: None,
            mass_params: TessellationParams {
                tolerance: 1e-4,
                min_segments: 4,
                max_segments: 4096,
            },
        }
    }

    /// Sets the discretization used by area and volume queries.
    #[must_use]
    pub fn with_mass_params(mut self, params: TessellationParams) -> Self {
        self.mass_params = params;
        self
    }

    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TopologyStore {
        &mut self.store
    }

    /// Adds a top-level shape of the model.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the shape is not in the
    /// store.
    pub fn add_root(&mut self, shape: impl Into<SubShape>) -> Result<()> {
        let shape = shape.into();
        self.ensure_present(shape)?;
        if !self.roots.contains(&shape) {
            self.roots.push(shape);
        }
        let counts = self.topology_counts()?;
        info!(
            solids = counts.solids,
            faces = counts.faces,
            edges = counts.edges,
            "model topology"
        );
        Ok(())
    }

    #[must_use]
    pub fn roots(&self) -> &[SubShape] {
        &self.roots
    }

    /// Appends a shape to the selection. Returns `false` if it was already
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the shape is not in the
    /// store.
    pub fn select(&mut self, shape: impl Into<SubShape>) -> Result<bool> {
        let shape = shape.into();
        self.ensure_present(shape)?;
        if self.selection.contains(&shape) {
            return Ok(false);
        }
        self.selection.push(shape);
        Ok(true)
    }

    /// Removes a shape from the selection, keeping the order of the rest.
    pub fn deselect(&mut self, shape: impl Into<SubShape>) -> bool {
        let shape = shape.into();
        let before = self.selection.len();
        self.selection.retain(|s| *s != shape);
        self.selection.len() != before
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    #[must_use]
    pub fn selected(&self) -> &[SubShape] {
        &self.selection
    }

    pub fn set_source_path(&mut self, path: impl Into<PathBuf>) {
        self.source_path = Some(path.into());
    }

    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Metadata of the source file, if one is set and readable.
    #[must_use]
    pub fn file_info(&self) -> Option<FileInfo> {
        let path = self.source_path.as_deref()?;
        match FileInfo::from_path(path) {
            Ok(info) => Some(info),
            Err(error) => {
                warn!(path = %path.display(), %error, "cannot read model file metadata");
                None
            }
        }
    }

    /// Counts the distinct solids, faces and edges under the root shapes.
    ///
    /// # Errors
    ///
    /// Returns an error if a root references a missing entity.
    pub fn topology_counts(&self) -> Result<TopologyCounts> {
        let mut faces = IndexSet::new();
        let mut edges = IndexSet::new();
        let mut solids = 0;
        for &root in &self.roots {
            if matches!(root, SubShape::Solid(_)) {
                solids += 1;
            }
            faces.extend(self.store.shape_faces(root)?);
            for edge in self.store.shape_edges(root)? {
                let (start, end) = self.endpoints(edge)?;
                let curve = self.curve_of(edge)?;
                let midpoint = self.midpoint(edge)?;
                let key = EdgeKey::new(
                    &start,
                    &end,
                    &curve,
                    Some(&midpoint),
                    DEFAULT_KEY_RESOLUTION,
                );
                edges.insert(key);
            }
        }
        Ok(TopologyCounts {
            solids,
            faces: faces.len(),
            edges: edges.len(),
        })
    }

    fn ensure_present(&self, shape: SubShape) -> Result<()> {
        if self.store.contains(shape) {
            Ok(())
        } else {
            Err(TopologyError::EntityNotFound(shape.kind().label().to_lowercase()).into())
        }
    }
}

impl ShapeSource for CadModel {
    fn selection(&self) -> Vec<SubShape> {
        self.selection.clone()
    }

    fn face_edges(&self, face: FaceId) -> Result<Vec<EdgeId>> {
        Ok(self.store.face_edges(face)?)
    }

    fn surface_area(&self, face: FaceId) -> Result<f64> {
        Area::new(face).with_params(self.mass_params).execute(&self.store)
    }

    fn volume(&self, solid: SolidId) -> Result<f64> {
        Volume::new(solid).with_params(self.mass_params).execute(&self.store)
    }

    fn length(&self, edge: EdgeId) -> Result<f64> {
        Length::new(edge).execute(&self.store)
    }

    fn endpoints(&self, edge: EdgeId) -> Result<(Point3, Point3)> {
        Ok(self.store.edge_endpoints(edge)?)
    }

    fn curve_of(&self, edge: EdgeId) -> Result<CurveDescriptor> {
        let data = self.store.edge(edge)?;
        Ok(match &data.curve {
            EdgeCurve::Line(_) => CurveDescriptor::Line,
            EdgeCurve::Arc(arc) => CurveDescriptor::Circle {
                radius: arc.radius(),
                first: data.t_start,
                last: data.t_end,
            },
            EdgeCurve::Ellipse(_) => CurveDescriptor::Other,
        })
    }

    fn midpoint(&self, edge: EdgeId) -> Result<Point3> {
        let data = self.store.edge(edge)?;
        data.curve.evaluate(0.5 * (data.t_start + data.t_end))
    }

    fn discretize(&self, edge: EdgeId, deflection: f64) -> Result<Vec<Point3>> {
        let params = TessellationParams {
            tolerance: deflection,
            ..self.mass_params
        };
        Ok(TessellateCurve::new(edge, params).execute(&self.store)?.points)
    }

    fn origin(&self) -> Option<Point3> {
        if self.roots.is_empty() {
            return None;
        }
        match CenterOfMass::new(self.roots.clone())
            .with_params(self.mass_params)
            .execute(&self.store)
        {
            Ok(props) => props.map(|p| p.centroid),
            Err(error) => {
                warn!(%error, "cannot compute model origin");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc, Ellipse};
    use crate::math::Vector3;
    use crate::operations::creation::{MakeBox, MakeEdge};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn box_model() -> (CadModel, SolidId) {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(10.0, 20.0, 30.0))
            .execute(&mut store)
            .unwrap();
        let mut model = CadModel::new(store);
        model.add_root(solid).unwrap();
        (model, solid)
    }

    #[test]
    fn box_topology_counts() {
        let (model, _) = box_model();
        assert_eq!(
            model.topology_counts().unwrap(),
            TopologyCounts {
                solids: 1,
                faces: 6,
                edges: 12,
            }
        );
    }

    #[test]
    fn origin_is_box_center() {
        let (model, _) = box_model();
        let origin = model.origin().unwrap();
        assert_relative_eq!(origin, p(5.0, 10.0, 15.0), epsilon = 1e-9);
        assert!(CadModel::new(TopologyStore::new()).origin().is_none());
    }

    #[test]
    fn selection_keeps_order_and_rejects_duplicates() {
        let (mut model, solid) = box_model();
        let faces = model.store().solid_faces(solid).unwrap();
        assert!(model.select(faces[2]).unwrap());
        assert!(model.select(solid).unwrap());
        assert!(!model.select(faces[2]).unwrap());
        assert_eq!(model.selection(), vec![SubShape::Face(faces[2]), SubShape::Solid(solid)]);

        assert!(model.deselect(faces[2]));
        assert!(!model.deselect(faces[2]));
        model.clear_selection();
        assert!(model.selected().is_empty());
    }

    #[test]
    fn foreign_shapes_rejected() {
        let (mut model, _) = box_model();
        let mut other = TopologyStore::new();
        // Slot indices past the end of this model's edge table
        let mut edge = None;
        for i in 0..40 {
            let x = f64::from(i);
            edge = Some(
                MakeEdge::line(p(x, 0.0, 0.0), p(x + 1.0, 0.0, 0.0))
                    .execute(&mut other)
                    .unwrap(),
            );
        }
        assert!(model.select(edge.unwrap()).is_err());
    }

    #[test]
    fn shapes_built_in_place_are_selectable() {
        let (mut model, _) = box_model();
        let edge = MakeEdge::line(p(0.0, 0.0, 50.0), p(10.0, 0.0, 50.0))
            .execute(model.store_mut())
            .unwrap();
        assert!(model.select(edge).unwrap());
        model.add_root(edge).unwrap();
        assert_eq!(
            model.topology_counts().unwrap(),
            TopologyCounts {
                solids: 1,
                faces: 6,
                edges: 13,
            }
        );
    }

    #[test]
    fn curve_descriptors() {
        let mut store = TopologyStore::new();
        let arc = Arc::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2)
            .unwrap();
        let arc = MakeEdge::arc(arc).execute(&mut store).unwrap();
        let ellipse = Ellipse::new(Point3::origin(), 3.0, 1.0, Vector3::z(), Vector3::x()).unwrap();
        let ellipse = MakeEdge::ellipse(ellipse).execute(&mut store).unwrap();
        let model = CadModel::new(store);

        assert_eq!(
            model.curve_of(arc).unwrap(),
            CurveDescriptor::Circle {
                radius: 2.0,
                first: 0.0,
                last: FRAC_PI_2,
            }
        );
        assert_eq!(model.curve_of(ellipse).unwrap(), CurveDescriptor::Other);
        assert_relative_eq!(
            model.midpoint(arc).unwrap(),
            p(2.0 * (PI / 4.0).cos(), 2.0 * (PI / 4.0).sin(), 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn discretize_respects_deflection() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::origin(), 5.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();
        let model = CadModel::new(store);

        let coarse = model.discretize(edge, 0.5).unwrap();
        let fine = model.discretize(edge, 0.005).unwrap();
        assert!(fine.len() > coarse.len());
        assert_eq!(fine.first(), fine.last());
    }

    #[test]
    fn missing_file_has_no_info() {
        let (mut model, _) = box_model();
        assert!(model.file_info().is_none());
        model.set_source_path("/nonexistent/calipers/part.step");
        assert!(model.file_info().is_none());
        assert!(model.source_path().is_some());
    }
}
