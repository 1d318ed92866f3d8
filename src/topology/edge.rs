use crate::error::Result;
use crate::geometry::curve::{Arc, Curve, Ellipse, Line};
use crate::math::Point3;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve associated with an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A line segment.
    Line(Line),
    /// A circular arc or full circle.
    Arc(Arc),
    /// An elliptical arc or full ellipse.
    Ellipse(Ellipse),
}

impl EdgeCurve {
    /// Short name of the curve type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Ellipse(_) => "ellipse",
        }
    }

    /// Evaluates the underlying curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated.
    pub fn evaluate(&self, t: f64) -> Result<Point3> {
        match self {
            Self::Line(line) => line.evaluate(t),
            Self::Arc(arc) => arc.evaluate(t),
            Self::Ellipse(ellipse) => ellipse.evaluate(t),
        }
    }
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries a geometric curve
/// that defines the shape of the edge between them. A closed edge
/// (full circle or ellipse) starts and ends on the same vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}
