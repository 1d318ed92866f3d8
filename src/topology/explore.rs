//! Downward traversal of the topology graph.

use indexmap::IndexSet;

use crate::error::TopologyError;
use crate::math::Point3;

use super::{EdgeId, FaceId, SolidId, SubShape, TopologyStore, WireId};

impl TopologyStore {
    /// Positions of the start and end vertices of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is missing.
    pub fn edge_endpoints(&self, id: EdgeId) -> Result<(Point3, Point3), TopologyError> {
        let edge = self.edge(id)?;
        let start = self.vertex(edge.start)?.point;
        let end = self.vertex(edge.end)?.point;
        Ok((start, end))
    }

    /// Edges of a wire in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is missing.
    pub fn wire_edges(&self, id: WireId) -> Result<Vec<EdgeId>, TopologyError> {
        Ok(self.wire(id)?.edges.iter().map(|oe| oe.edge).collect())
    }

    /// Boundary edges of a face: the outer wire first, then each hole.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its wires is missing.
    pub fn face_edges(&self, id: FaceId) -> Result<Vec<EdgeId>, TopologyError> {
        let face = self.face(id)?;
        let mut edges = Vec::new();
        for wire in face.wires() {
            edges.extend(self.wire_edges(wire)?);
        }
        Ok(edges)
    }

    /// Faces of a solid across all of its shells.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its shells is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let solid = self.solid(id)?;
        let mut faces = Vec::new();
        for shell in solid.shells() {
            faces.extend_from_slice(&self.shell(shell)?.faces);
        }
        Ok(faces)
    }

    /// Distinct faces reachable from a sub-shape, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing.
    pub fn shape_faces(&self, shape: SubShape) -> Result<IndexSet<FaceId>, TopologyError> {
        Ok(match shape {
            SubShape::Face(id) => std::iter::once(id).collect(),
            SubShape::Edge(_) => IndexSet::new(),
            SubShape::Solid(id) => self.solid_faces(id)?.into_iter().collect(),
        })
    }

    /// Distinct edge handles reachable from a sub-shape, in discovery order.
    ///
    /// Handles are unique but geometrically identical edges owned by
    /// different faces are reported separately.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing.
    pub fn shape_edges(&self, shape: SubShape) -> Result<IndexSet<EdgeId>, TopologyError> {
        if let SubShape::Edge(id) = shape {
            self.edge(id)?;
            return Ok(std::iter::once(id).collect());
        }
        let mut edges = IndexSet::new();
        for face in self.shape_faces(shape)? {
            edges.extend(self.face_edges(face)?);
        }
        Ok(edges)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeBox, MakeFace, MakeWire};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn square_face_has_four_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();

        let edges = store.face_edges(face).unwrap();
        assert_eq!(edges.len(), 4);
        let (a, b) = store.edge_endpoints(edges[0]).unwrap();
        assert_eq!(a, p(0.0, 0.0, 0.0));
        assert_eq!(b, p(1.0, 0.0, 0.0));
    }

    #[test]
    fn box_exploration_counts() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let shape = SubShape::Solid(solid);
        assert_eq!(store.shape_faces(shape).unwrap().len(), 6);
        // Each face owns its boundary edges
        assert_eq!(store.shape_edges(shape).unwrap().len(), 24);
    }
}
