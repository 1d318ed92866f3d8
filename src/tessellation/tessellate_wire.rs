use crate::error::{Result, TopologyError};
use crate::math::{polygon_3d, Point3, TOLERANCE};
use crate::topology::{TopologyStore, WireId};

use super::{TessellateCurve, TessellationParams};

/// Discretizes a closed wire into a polygon loop.
///
/// Edges are walked in wire order, honoring each edge's orientation, and
/// the vertex shared by consecutive edges appears once. The returned loop
/// does not repeat its first point.
pub struct TessellateWire {
    wire: WireId,
    params: TessellationParams,
}

impl TessellateWire {
    /// Creates a new `TessellateWire` operation.
    #[must_use]
    pub fn new(wire: WireId, params: TessellationParams) -> Self {
        Self { wire, params }
    }

    /// Executes the discretization.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] for open wires, or any
    /// error from discretizing the member edges.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Point3>> {
        let wire = store.wire(self.wire)?;
        if !wire.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }

        let mut points: Vec<Point3> = Vec::new();
        for oe in &wire.edges {
            let mut samples = TessellateCurve::new(oe.edge, self.params)
                .execute(store)?
                .points;
            if !oe.forward {
                samples.reverse();
            }
            let skip_first = points
                .last()
                .zip(samples.first())
                .is_some_and(|(prev, first)| (prev - first).norm() < TOLERANCE);
            points.extend(samples.into_iter().skip(usize::from(skip_first)));
        }

        Ok(polygon_3d::open_loop(points, TOLERANCE))
    }
}
