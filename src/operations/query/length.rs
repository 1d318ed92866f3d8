use crate::error::Result;
use crate::tessellation::{TessellateCurve, TessellationParams};
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

use super::MassProperties;

/// Computes the length of an edge.
pub struct Length {
    edge: EdgeId,
    params: TessellationParams,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self {
            edge,
            params: TessellationParams::with_tolerance(1e-4),
        }
    }

    /// Sets the discretization used for the centroid of curved edges.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the edge length.
    ///
    /// For a `Line`, this is `|t_end - t_start|`.
    /// For an `Arc`, this is `radius * |t_end - t_start|`.
    /// For an `Ellipse`, the arc length is integrated numerically.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let edge = store.edge(self.edge)?;
        Ok(match &edge.curve {
            // Lines are parameterized by arc length
            EdgeCurve::Line(_) => (edge.t_end - edge.t_start).abs(),
            EdgeCurve::Arc(arc) => arc.radius() * (edge.t_end - edge.t_start).abs(),
            EdgeCurve::Ellipse(ellipse) => ellipse.length(),
        })
    }

    /// Length together with the centroid of the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is missing or cannot be discretized.
    pub fn mass_properties(&self, store: &TopologyStore) -> Result<MassProperties> {
        let mass = self.execute(store)?;
        let (start, end) = store.edge_endpoints(self.edge)?;
        let centroid = match store.edge(self.edge)?.curve {
            EdgeCurve::Line(_) => nalgebra::center(&start, &end),
            _ => TessellateCurve::new(self.edge, self.params)
                .execute(store)?
                .centroid()
                .unwrap_or(start),
        };
        Ok(MassProperties { mass, centroid })
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

    #[test]
    fn line_length_3_4_5() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();
        let edge_id = store.wire(wire).unwrap().edges[0].edge;

        let props = Length::new(edge_id).mass_properties(&store).unwrap();
        assert!((props.mass - 5.0).abs() < 1e-10);
        assert_eq!(props.centroid, Point3::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn full_circle_length() {
        let mut store = TopologyStore::new();
        let arc = Arc::circle(Point3::new(1.0, 2.0, 3.0), 5.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();

        let props = Length::new(edge).mass_properties(&store).unwrap();
        assert!((props.mass - 10.0 * PI).abs() < 1e-10);
        assert!((props.centroid - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-6);
    }

    #[test]
    fn quarter_arc_centroid_is_off_center() {
        let mut store = TopologyStore::new();
        let arc = Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2)
            .unwrap();
        let edge = MakeEdge::arc(arc).execute(&mut store).unwrap();

        let props = Length::new(edge).mass_properties(&store).unwrap();
        // Centroid of a quarter circle arc lies at 2r/pi on each axis
        let expected = 2.0 / PI;
        assert!((props.centroid.x - expected).abs() < 2e-4);
        assert!((props.centroid.y - expected).abs() < 2e-4);
    }

    #[test]
    fn ellipse_circumference() {
        let mut store = TopologyStore::new();
        let ellipse = Ellipse::new(Point3::origin(), 3.0, 3.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = MakeEdge::ellipse(ellipse).execute(&mut store).unwrap();
        let len = Length::new(edge).execute(&store).unwrap();
        assert!((len - 6.0 * PI).abs() < 1e-8);
    }
}
