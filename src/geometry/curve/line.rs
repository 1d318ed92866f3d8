use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a unit direction.
///
/// The parametric form is `P(t) = origin + t * direction`, so `t` is
/// arc length measured from the origin.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line through `a` and `b`, with `a` at `t = 0` and `b`
    /// at `t = |b - a|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn through(a: Point3, b: Point3) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.origin + self.direction * t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn through_is_arc_length_parameterized() {
        let line = Line::through(Point3::new(1.0, 1.0, 0.0), Point3::new(4.0, 5.0, 0.0)).unwrap();
        let end = line.evaluate(5.0).unwrap();
        assert!((end - Point3::new(4.0, 5.0, 0.0)).norm() < 1e-12);
        assert!((line.parameter_of(&end) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_rejected() {
        let p = Point3::new(2.0, 2.0, 2.0);
        assert!(Line::through(p, p).is_err());
    }
}
