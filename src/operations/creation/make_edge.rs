use crate::error::Result;
use crate::geometry::curve::{Arc, Curve, CurveDomain, Ellipse, Line};
use crate::math::Point3;
use crate::topology::{EdgeCurve, EdgeData, EdgeId, TopologyStore, VertexData};

/// Creates a standalone edge from a curve.
///
/// The edge spans the curve's parameter domain. Closed curves get a single
/// vertex that is both start and end.
pub struct MakeEdge {
    source: EdgeSource,
}

enum EdgeSource {
    Segment(Point3, Point3),
    Arc(Arc),
    Ellipse(Ellipse),
}

impl MakeEdge {
    /// A straight segment from `start` to `end`.
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self {
            source: EdgeSource::Segment(start, end),
        }
    }

    /// A circular arc or full circle.
    #[must_use]
    pub fn arc(arc: Arc) -> Self {
        Self {
            source: EdgeSource::Arc(arc),
        }
    }

    /// An elliptical arc or full ellipse.
    #[must_use]
    pub fn ellipse(ellipse: Ellipse) -> Self {
        Self {
            source: EdgeSource::Ellipse(ellipse),
        }
    }

    /// Executes the operation, creating the edge and its vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment endpoints coincide or the curve
    /// cannot be evaluated at its bounds.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<EdgeId> {
        let curve = match &self.source {
            EdgeSource::Segment(a, b) => EdgeCurve::Line(Line::through(*a, *b)?),
            EdgeSource::Arc(arc) => EdgeCurve::Arc(arc.clone()),
            EdgeSource::Ellipse(ellipse) => EdgeCurve::Ellipse(ellipse.clone()),
        };

        let (domain, closed, start_point, end_point) = match &self.source {
            EdgeSource::Segment(a, b) => {
                let length = (b - a).norm();
                (CurveDomain::new(0.0, length), false, *a, *b)
            }
            EdgeSource::Arc(arc) => bounds(arc)?,
            EdgeSource::Ellipse(ellipse) => bounds(ellipse)?,
        };

        let start = store.add_vertex(VertexData::new(start_point));
        let end = if closed {
            start
        } else {
            store.add_vertex(VertexData::new(end_point))
        };

        Ok(store.add_edge(EdgeData {
            start,
            end,
            curve,
            t_start: domain.t_min,
            t_end: domain.t_max,
        }))
    }
}

fn bounds(curve: &impl Curve) -> Result<(CurveDomain, bool, Point3, Point3)> {
    let domain = curve.domain();
    let start = curve.evaluate(domain.t_min)?;
    let end = curve.evaluate(domain.t_max)?;
    Ok((domain, curve.is_closed(), start, end))
}
