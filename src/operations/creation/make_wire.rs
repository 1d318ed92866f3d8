use crate::error::{OperationError, Result, TopologyError};
use crate::geometry::curve::Line;
use crate::math::{Point3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, OrientedEdge, TopologyStore, VertexData, WireData, WireId,
};

/// Creates a wire from a sequence of 3D points or from existing edges.
pub struct MakeWire {
    source: WireSource,
}

enum WireSource {
    Points { points: Vec<Point3>, close: bool },
    Edges(Vec<EdgeId>),
}

impl MakeWire {
    /// Creates a polyline wire through `points`, adding a closing segment
    /// back to the first point when `close` is set.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self {
            source: WireSource::Points { points, close },
        }
    }

    /// Creates a wire chaining existing edges in the given order.
    ///
    /// Each edge is oriented so that it starts where the previous one ended.
    #[must_use]
    pub fn from_edges(edges: Vec<EdgeId>) -> Self {
        Self {
            source: WireSource::Edges(edges),
        }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for fewer than two points,
    /// coincident consecutive points or an empty edge list, and
    /// [`TopologyError::InvalidTopology`] when edges do not connect.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        match &self.source {
            WireSource::Points { points, close } => polyline_wire(store, points, *close),
            WireSource::Edges(edges) => chain_edges(store, edges),
        }
    }
}

fn polyline_wire(store: &mut TopologyStore, points: &[Point3], close: bool) -> Result<WireId> {
    let required = if close { 3 } else { 2 };
    if points.len() < required {
        return Err(OperationError::InvalidInput(format!(
            "wire needs at least {required} points, got {}",
            points.len()
        ))
        .into());
    }

    let vertices: Vec<_> = points
        .iter()
        .map(|&p| store.add_vertex(VertexData::new(p)))
        .collect();

    let segment_count = if close { points.len() } else { points.len() - 1 };
    let mut edges = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let j = (i + 1) % points.len();
        let length = (points[j] - points[i]).norm();
        if length < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "points {i} and {j} coincide"
            ))
            .into());
        }
        let edge = store.add_edge(EdgeData {
            start: vertices[i],
            end: vertices[j],
            curve: EdgeCurve::Line(Line::through(points[i], points[j])?),
            t_start: 0.0,
            t_end: length,
        });
        edges.push(OrientedEdge::new(edge, true));
    }

    Ok(store.add_wire(WireData {
        edges,
        is_closed: close,
    }))
}

fn chain_edges(store: &mut TopologyStore, edges: &[EdgeId]) -> Result<WireId> {
    let Some(&first) = edges.first() else {
        return Err(OperationError::InvalidInput("wire needs at least one edge".into()).into());
    };

    let (first_start, first_end) = store.edge_endpoints(first)?;
    let mut forward = true;
    if let Some(&second) = edges.get(1) {
        let (a, b) = store.edge_endpoints(second)?;
        let touches = |p: Point3| (p - a).norm() < TOLERANCE || (p - b).norm() < TOLERANCE;
        forward = touches(first_end) || !touches(first_start);
    }

    let origin = if forward { first_start } else { first_end };
    let mut cursor = if forward { first_end } else { first_start };
    let mut oriented = vec![OrientedEdge::new(first, forward)];

    for &edge in &edges[1..] {
        let (start, end) = store.edge_endpoints(edge)?;
        if (start - cursor).norm() < TOLERANCE {
            oriented.push(OrientedEdge::new(edge, true));
            cursor = end;
        } else if (end - cursor).norm() < TOLERANCE {
            oriented.push(OrientedEdge::new(edge, false));
            cursor = start;
        } else {
            return Err(TopologyError::InvalidTopology(format!(
                "edge {} does not connect to the wire",
                oriented.len()
            ))
            .into());
        }
    }

    Ok(store.add_wire(WireData {
        edges: oriented,
        is_closed: (cursor - origin).norm() < TOLERANCE,
    }))
}
