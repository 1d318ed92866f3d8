use crate::error::{OperationError, Result};
use crate::geometry::curve::{Arc, Curve};
use crate::topology::{OrientedEdge, TopologyStore, WireData, WireId};

use super::MakeEdge;

/// Creates a closed wire made of a single full-circle edge.
pub struct MakeCircle {
    circle: Arc,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation.
    #[must_use]
    pub fn new(circle: Arc) -> Self {
        Self { circle }
    }

    /// Executes the operation, creating the edge and its wire.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the arc does not sweep a
    /// full turn.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        if !self.circle.is_closed() {
            return Err(OperationError::InvalidInput(format!(
                "circle must sweep a full turn, got {} rad",
                self.circle.sweep()
            ))
            .into());
        }
        let edge = MakeEdge::arc(self.circle.clone()).execute(store)?;
        Ok(store.add_wire(WireData {
            edges: vec![OrientedEdge::new(edge, true)],
            is_closed: true,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};

    #[test]
    fn circle_wire_is_closed() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::origin(), 3.0, Vector3::z(), Vector3::x()).unwrap();
        let wire = MakeCircle::new(arc).execute(&mut store).unwrap();
        let data = store.wire(wire).unwrap();
        assert!(data.is_closed);
        assert_eq!(data.edges.len(), 1);
    }

    #[test]
    fn partial_arc_rejected() {
        let mut store = TopologyStore::new();
        let arc = Arc::new(Point3::origin(), 3.0, Vector3::z(), Vector3::x(), 0.0, 1.0).unwrap();
        assert!(MakeCircle::new(arc).execute(&mut store).is_err());
    }
}
