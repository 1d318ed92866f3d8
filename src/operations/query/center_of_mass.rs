use indexmap::IndexSet;
use tracing::debug;

use crate::error::Result;
use crate::tessellation::TessellationParams;
use crate::topology::{SubShape, TopologyStore};

use super::{Area, Length, MassProperties, Volume};

/// Below this mass a tier is treated as empty and the next one is tried.
const MIN_TIER_MASS: f64 = 1e-6;
/// Below this mass no centroid is reported.
const MIN_CENTROID_MASS: f64 = 1e-9;

/// Computes the centroid of a set of shapes.
///
/// Volume properties are used when the shapes enclose volume; otherwise
/// surface properties, and for wire-only shapes linear properties.
pub struct CenterOfMass {
    shapes: Vec<SubShape>,
    params: TessellationParams,
}

impl CenterOfMass {
    /// Creates a new `CenterOfMass` query.
    #[must_use]
    pub fn new(shapes: Vec<SubShape>) -> Self {
        Self {
            shapes,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters for higher accuracy.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Returns `None` when every tier is massless.
    ///
    /// # Errors
    ///
    /// Returns an error if any shape cannot be measured.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<MassProperties>> {
        let mut props = self.volume(store)?;
        if mass_of(props) < MIN_TIER_MASS {
            props = self.surface(store)?;
        }
        if mass_of(props) < MIN_TIER_MASS {
            props = self.linear(store)?;
        }
        debug!(mass = mass_of(props), "center of mass");
        Ok(props.filter(|p| p.mass > MIN_CENTROID_MASS))
    }

    fn volume(&self, store: &TopologyStore) -> Result<Option<MassProperties>> {
        let mut parts = Vec::new();
        for shape in &self.shapes {
            if let SubShape::Solid(id) = *shape {
                parts.push(Volume::new(id).with_params(self.params).mass_properties(store)?);
            }
        }
        Ok(MassProperties::combine(parts))
    }

    fn surface(&self, store: &TopologyStore) -> Result<Option<MassProperties>> {
        let mut faces = IndexSet::new();
        for &shape in &self.shapes {
            faces.extend(store.shape_faces(shape)?);
        }
        let mut parts = Vec::with_capacity(faces.len());
        for face in faces {
            parts.push(Area::new(face).with_params(self.params).mass_properties(store)?);
        }
        Ok(MassProperties::combine(parts))
    }

    fn linear(&self, store: &TopologyStore) -> Result<Option<MassProperties>> {
        let mut edges = IndexSet::new();
        for &shape in &self.shapes {
            edges.extend(store.shape_edges(shape)?);
        }
        let mut parts = Vec::with_capacity(edges.len());
        for edge in edges {
            parts.push(Length::new(edge).with_params(self.params).mass_properties(store)?);
        }
        Ok(MassProperties::combine(parts))
    }
}

fn mass_of(props: Option<MassProperties>) -> f64 {
    props.map_or(0.0, |p| p.mass)
}
