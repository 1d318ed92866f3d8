use crate::error::Result;
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

use super::{Polyline, TessellationParams};

/// Discretizes an edge into an ordered polyline from its start vertex to
/// its end vertex.
///
/// Lines yield their two endpoints. Arcs are sampled uniformly in angle
/// with the step bounded by the sagitta tolerance. Ellipses are sampled
/// uniformly in parameter with the step derived from the tightest
/// curvature radius (`b^2 / a`), which bounds the deviation everywhere.
/// The first and last samples are the edge's vertex positions.
pub struct TessellateCurve {
    edge: EdgeId,
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(edge: EdgeId, params: TessellationParams) -> Self {
        Self { edge, params }
    }

    /// Executes the discretization, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the edge is missing,
    /// or curve evaluation fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Polyline> {
        self.params.validate()?;
        let edge = store.edge(self.edge)?;
        let (start, end) = store.edge_endpoints(self.edge)?;
        let sweep = (edge.t_end - edge.t_start).abs();

        let segments = match &edge.curve {
            EdgeCurve::Line(_) => {
                return Ok(Polyline {
                    points: vec![start, end],
                })
            }
            EdgeCurve::Arc(arc) => self.params.arc_segments(arc.radius(), sweep),
            EdgeCurve::Ellipse(ellipse) => {
                let a = ellipse.semi_major().max(ellipse.semi_minor());
                let b = ellipse.semi_major().min(ellipse.semi_minor());
                self.params.arc_segments(b * b / a, sweep)
            }
        };

        let mut points = Vec::with_capacity(segments + 1);
        points.push(start);
        #[allow(clippy::cast_precision_loss)]
        for i in 1..segments {
            let t = edge.t_start + (edge.t_end - edge.t_start) * (i as f64 / segments as f64);
            points.push(edge.curve.evaluate(t)?);
        }
        points.push(end);

        Ok(Polyline { points })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc, Ellipse};
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeEdge, MakeWire};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn max_deviation_from_circle(points: &[Point3], radius: f64) -> f64 {
        // Deviation at each chord midpoint
        points
            .windows(2)
            .map(|w| radius - ((w[0].coords + w[1].coords) * 0.5).norm())
            .fold(0.0, f64::max)
    }

    #[test]
    fn line_edge_yields_endpoints() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let edge = store.wire(wire).unwrap().edges[0].edge;

        let poly = TessellateCurve::new(edge, TessellationParams::default())
            .execute(&store)
            .unwrap();
        assert_eq!(poly.points, vec![p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]);
    }

    #[test]
    fn quarter_arc_within_tolerance() {
        let mut store = TopologyStore::new();
        let arc = Arc::new(Point3::origin(), 5.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2)
            .unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();

        let params = TessellationParams::with_tolerance(0.005);
        let poly = TessellateCurve::new(edge, params).execute(&store).unwrap();

        assert!(poly.points.len() > 10);
        assert!((poly.points[0] - p(5.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((poly.points.last().unwrap() - p(0.0, 5.0, 0.0)).norm() < 1e-12);
        assert!(max_deviation_from_circle(&poly.points, 5.0) <= 0.005 + 1e-12);
        assert!((poly.length() - 2.5 * PI).abs() < 1e-2);
    }

    #[test]
    fn smaller_tolerance_is_denser() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::origin(), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();

        let coarse = TessellateCurve::new(edge, TessellationParams::with_tolerance(0.1))
            .execute(&store)
            .unwrap();
        let fine = TessellateCurve::new(edge, TessellationParams::with_tolerance(0.001))
            .execute(&store)
            .unwrap();
        assert!(fine.points.len() > coarse.points.len());
        // Closed curve returns to its start vertex
        assert_eq!(fine.points.first(), fine.points.last());
    }

    #[test]
    fn ellipse_samples_lie_on_curve() {
        let mut store = TopologyStore::new();
        let ellipse = Ellipse::new(Point3::origin(), 4.0, 2.0, Vector3::z(), Vector3::x())
            .unwrap()
            .with_range(0.0, PI)
            .unwrap();
        let edge = MakeEdge::ellipse(ellipse).execute(&mut store).unwrap();

        let poly = TessellateCurve::new(edge, TessellationParams::with_tolerance(0.01))
            .execute(&store)
            .unwrap();
        for q in &poly.points {
            let on_curve = (q.x / 4.0).powi(2) + (q.y / 2.0).powi(2);
            assert!((on_curve - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_params_rejected() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::origin(), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();
        let result =
            TessellateCurve::new(edge, TessellationParams::with_tolerance(-1.0)).execute(&store);
        assert!(result.is_err());
    }
}
