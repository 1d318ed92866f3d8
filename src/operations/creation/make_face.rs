use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::surface::Plane;
use crate::math::{polygon_3d, Point3, TOLERANCE};
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Maximum distance of a boundary sample from the fitted plane.
const PLANARITY_TOLERANCE: f64 = 1e-6;

/// Creates a planar face from a closed outer wire and optional hole wires.
///
/// The supporting plane is fitted to the outer boundary: its normal follows
/// the boundary winding (counter-clockwise seen from the tip of the normal)
/// and its origin is the boundary centroid.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is open, the outer boundary encloses no
    /// area, or any boundary leaves the fitted plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let params = TessellationParams::default();
        let outer = TessellateWire::new(self.outer_wire, params).execute(store)?;

        let area = polygon_3d::area_vector(&outer);
        if area.norm() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("face boundary encloses no area".into()).into(),
            );
        }
        let normal = area.normalize();
        let origin = polygon_3d::centroid(&outer, &normal).unwrap_or(outer[0]);
        let plane = Plane::from_normal(origin, normal)?;

        check_planar(&plane, &outer)?;
        for &wire in &self.inner_wires {
            let hole = TessellateWire::new(wire, params).execute(store)?;
            check_planar(&plane, &hole)?;
        }

        Ok(store.add_face(FaceData {
            surface: plane,
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

fn check_planar(plane: &Plane, points: &[Point3]) -> Result<()> {
    let off_plane = points
        .iter()
        .map(|p| plane.signed_distance(p).abs())
        .fold(0.0, f64::max);
    if off_plane > PLANARITY_TOLERANCE {
        return Err(OperationError::InvalidInput(format!(
            "boundary is not planar (deviation {off_plane:.3e})"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Arc;
    use crate::math::Vector3;
    use crate::operations::creation::{MakeCircle, MakeWire};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn normal_follows_winding() {
        let mut store = TopologyStore::new();
        let ccw = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(ccw, vec![]).execute(&mut store).unwrap();

        let data = store.face(face).unwrap();
        assert!((data.surface.normal() - Vector3::z()).norm() < 1e-12);
        assert!((data.surface.origin() - p(1.0, 1.0, 0.0)).norm() < 1e-12);
        assert!(data.same_sense);
    }

    #[test]
    fn disc_face_from_circle() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(p(0.0, 0.0, 5.0), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let wire = MakeCircle::new(arc).execute(&mut store).unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let data = store.face(face).unwrap();
        assert!((data.surface.normal() - Vector3::z()).norm() < 1e-9);
    }

    #[test]
    fn skew_boundary_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn open_boundary_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }
}
