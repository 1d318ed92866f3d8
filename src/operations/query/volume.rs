use crate::error::Result;
use crate::math::{polygon_3d, Point3, Vector3};
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{SolidId, TopologyStore};

use super::MassProperties;

/// Computes the volume of a solid bounded by planar faces.
///
/// Every boundary loop is fanned into triangles that, together with the
/// origin, form signed tetrahedra: `(1/6) * v0 . (v1 x v2)`. Loops are
/// re-wound against the outward face normal first (outer boundaries
/// counter-clockwise, holes clockwise), so the result does not depend on
/// how the wires were built. Void shells must have outward normals pointing
/// into the void.
pub struct Volume {
    solid: SolidId,
    params: TessellationParams,
}

impl Volume {
    /// Creates a new `Volume` query with default tessellation parameters.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self {
            solid,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters for higher accuracy.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// Returns an error if a face or boundary wire cannot be discretized.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(self.mass_properties(store)?.mass)
    }

    /// Volume together with the centroid of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or boundary wire cannot be discretized.
    pub fn mass_properties(&self, store: &TopologyStore) -> Result<MassProperties> {
        let mut signed_volume = 0.0;
        let mut moment = Vector3::zeros();

        for face_id in store.solid_faces(self.solid)? {
            let face = store.face(face_id)?;
            let normal = face.normal();
            for (index, wire) in face.wires().enumerate() {
                let mut ring = TessellateWire::new(wire, self.params).execute(store)?;
                let counter_clockwise = polygon_3d::signed_area(&ring, &normal) > 0.0;
                if counter_clockwise != (index == 0) {
                    ring.reverse();
                }
                let Some((&apex, rest)) = ring.split_first() else {
                    continue;
                };
                for pair in rest.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let det = apex.coords.dot(&a.coords.cross(&b.coords)) / 6.0;
                    signed_volume += det;
                    // Tetrahedron centroid; the fourth vertex is the origin
                    moment += (apex.coords + a.coords + b.coords) * (det / 4.0);
                }
            }
        }

        let centroid = if signed_volume.abs() > f64::EPSILON {
            Point3::from(moment / signed_volume)
        } else {
            Point3::origin()
        };
        Ok(MassProperties {
            mass: signed_volume.abs(),
            centroid,
        })
    }
}
