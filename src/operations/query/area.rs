use crate::error::Result;
use crate::math::{polygon_3d, Vector3};
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{FaceId, TopologyStore};

use super::MassProperties;

/// Computes the area of a planar face.
///
/// Each boundary wire is discretized into a polygon; the hole areas are
/// subtracted from the outer area. Curved boundaries converge to the exact
/// area as the tessellation tolerance shrinks.
pub struct Area {
    face: FaceId,
    params: TessellationParams,
}

impl Area {
    /// Creates a new `Area` query with default tessellation parameters.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters for higher accuracy.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the face area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or a boundary wire cannot be discretized.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(self.mass_properties(store)?.mass)
    }

    /// Area together with the centroid of the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or a boundary wire cannot be discretized.
    pub fn mass_properties(&self, store: &TopologyStore) -> Result<MassProperties> {
        let face = store.face(self.face)?;
        let normal = face.normal();

        let mut parts = Vec::new();
        let mut net = 0.0;
        for (index, wire) in face.wires().enumerate() {
            let ring = TessellateWire::new(wire, self.params).execute(store)?;
            let area = polygon_3d::signed_area(&ring, &normal).abs();
            let sign = if index == 0 { 1.0 } else { -1.0 };
            net += sign * area;
            if let Some(c) = polygon_3d::centroid(&ring, &normal) {
                parts.push((sign * area, c));
            }
        }

        let mass = net.max(0.0);
        let centroid = if mass > 0.0 {
            let moment = parts
                .iter()
                .fold(Vector3::zeros(), |acc, (a, c)| acc + c.coords * *a);
            (moment / net).into()
        } else {
            *face.surface.origin()
        };
        Ok(MassProperties { mass, centroid })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Arc;
    use crate::math::Point3;
    use crate::operations::creation::{MakeCircle, MakeFace, MakeWire};
    use crate::topology::WireId;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn rectangle(store: &mut TopologyStore, x0: f64, y0: f64, x1: f64, y1: f64) -> WireId {
        MakeWire::new(
            vec![p(x0, y0, 0.0), p(x1, y0, 0.0), p(x1, y1, 0.0), p(x0, y1, 0.0)],
            true,
        )
        .execute(store)
        .unwrap()
    }

    #[test]
    fn rectangle_area() {
        let mut store = TopologyStore::new();
        let wire = rectangle(&mut store, 0.0, 0.0, 10.0, 20.0);
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let props = Area::new(face).mass_properties(&store).unwrap();
        assert!((props.mass - 200.0).abs() < 1e-9);
        assert!((props.centroid - p(5.0, 10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn hole_is_subtracted() {
        let mut store = TopologyStore::new();
        let outer = rectangle(&mut store, 0.0, 0.0, 10.0, 10.0);
        let hole = rectangle(&mut store, 0.0, 0.0, 5.0, 10.0);
        let face = MakeFace::new(outer, vec![hole]).execute(&mut store).unwrap();

        let props = Area::new(face).mass_properties(&store).unwrap();
        assert!((props.mass - 50.0).abs() < 1e-9);
        assert!((props.centroid - p(7.5, 5.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn disc_area_converges() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::origin(), 5.0, Vector3::z(), Vector3::x()).unwrap();
        let wire = MakeCircle::new(arc).execute(&mut store).unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let params = TessellationParams {
            tolerance: 1e-5,
            max_segments: 8192,
            ..TessellationParams::default()
        };
        let area = Area::new(face).with_params(params).execute(&store).unwrap();
        assert!((area - 25.0 * PI).abs() / (25.0 * PI) < 1e-4, "got {area}");
    }
}
