use crate::error::{OperationError, Result};
use crate::math::{polygon_3d, Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{EdgeCurve, FaceId, ShellData, SolidId, TopologyStore, WireId};

/// Sweeps a polygonal face along a direction vector into a prism solid.
///
/// Every face of the result has its boundary wound counter-clockwise seen
/// from outside, so face normals point out of the solid.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is
    /// zero-length or parallel to the face, or the face has holes or
    /// curved boundary edges.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let base_points = polygon_corners(store, face.outer_wire)?;

        let area = polygon_3d::area_vector(&base_points);
        if area.dot(&self.direction).abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the face plane".into(),
            )
            .into());
        }

        // Wind the base so its normal agrees with the sweep; the bottom cap
        // is then the reversed base and every side quad faces outward.
        let base_points: Vec<Point3> = if area.dot(&self.direction) > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };
        let top_points: Vec<Point3> = base_points.iter().map(|p| p + self.direction).collect();

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        let bottom: Vec<Point3> = base_points.iter().rev().copied().collect();
        faces.push(planar_face(store, bottom)?);
        faces.push(planar_face(store, top_points.clone())?);
        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(planar_face(store, quad)?);
        }

        let shell = store.add_shell(ShellData {
            faces,
            is_closed: true,
        });
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

/// Vertex positions of a straight-edged wire in traversal order.
fn polygon_corners(store: &TopologyStore, wire: WireId) -> Result<Vec<Point3>> {
    let wire = store.wire(wire)?;
    let mut points = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        if !matches!(edge.curve, EdgeCurve::Line(_)) {
            return Err(OperationError::InvalidInput(format!(
                "cannot extrude a boundary with a {} edge",
                edge.curve.type_name()
            ))
            .into());
        }
        let vertex = if oe.forward { edge.start } else { edge.end };
        points.push(store.vertex(vertex)?.point);
    }
    Ok(points)
}

fn planar_face(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
    let wire = MakeWire::new(points, true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
