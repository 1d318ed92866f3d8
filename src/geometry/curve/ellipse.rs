use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// Number of Simpson intervals used for arc length integration.
const LENGTH_INTERVALS: usize = 512;

/// An ellipse (or elliptical arc) in 3D space.
///
/// `P(t) = center + a * cos(t) * major_dir + b * sin(t) * minor_dir`
/// where `minor_dir = normal x major_dir`.
///
/// Unlike [`super::Arc`] an ellipse carries no single radius, so the
/// measurement layer reports it as an unclassified curve.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point3,
    semi_major: f64,
    semi_minor: f64,
    normal: Vector3,
    major_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Ellipse {
    /// Creates a full ellipse over `[0, 2*pi]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis length is non-positive, the normal is
    /// zero-length, or the major direction is not perpendicular to the normal.
    pub fn new(
        center: Point3,
        semi_major: f64,
        semi_minor: f64,
        normal: Vector3,
        major_dir: Vector3,
    ) -> Result<Self> {
        if semi_major < TOLERANCE || semi_minor < TOLERANCE {
            return Err(
                GeometryError::Degenerate("ellipse axes must be positive".into()).into(),
            );
        }

        let normal_len = normal.norm();
        let major_len = major_dir.norm();
        if normal_len < TOLERANCE || major_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;
        let major_dir = major_dir / major_len;

        if normal.dot(&major_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "major direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            semi_major,
            semi_minor,
            normal,
            major_dir,
            start_angle: 0.0,
            end_angle: TAU,
        })
    }

    /// Restricts the ellipse to the parameter range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty.
    pub fn with_range(mut self, start: f64, end: f64) -> Result<Self> {
        if (end - start).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("empty elliptical arc".into()).into());
        }
        self.start_angle = start;
        self.end_angle = end;
        Ok(self)
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Arc length over the curve's domain (composite Simpson rule).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length(&self) -> f64 {
        let (a, b) = (self.start_angle, self.end_angle);
        let h = (b - a) / LENGTH_INTERVALS as f64;
        let speed = |t: f64| {
            let dx = self.semi_major * t.sin();
            let dy = self.semi_minor * t.cos();
            dx.hypot(dy)
        };
        let mut sum = speed(a) + speed(b);
        for i in 1..LENGTH_INTERVALS {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * speed(a + h * i as f64);
        }
        (sum * h / 3.0).abs()
    }

    fn minor_dir(&self) -> Vector3 {
        self.normal.cross(&self.major_dir)
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let x = self.semi_major * t.cos();
        let y = self.semi_minor * t.sin();
        Ok(self.center + self.major_dir * x + self.minor_dir() * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let dx = -self.semi_major * t.sin();
        let dy = self.semi_minor * t.cos();
        let tangent = self.major_dir * dx + self.minor_dir() * dy;
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(tangent / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        ((self.end_angle - self.start_angle).abs() - TAU).abs() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn xy_ellipse(a: f64, b: f64) -> Ellipse {
        Ellipse::new(Point3::origin(), a, b, Vector3::z(), Vector3::x()).unwrap()
    }

    #[test]
    fn evaluate_on_axes() {
        let e = xy_ellipse(3.0, 2.0);
        assert!((e.evaluate(0.0).unwrap() - Point3::new(3.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((e.evaluate(FRAC_PI_2).unwrap() - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn circle_length_matches_circumference() {
        let e = xy_ellipse(2.0, 2.0);
        assert_relative_eq!(e.length(), 4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn ellipse_length_matches_ramanujan() {
        let (a, b) = (5.0_f64, 3.0_f64);
        let h = ((a - b) / (a + b)).powi(2);
        let expected = PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
        assert_relative_eq!(xy_ellipse(a, b).length(), expected, max_relative = 1e-6);
    }

    #[test]
    fn half_range_is_open() {
        let e = xy_ellipse(3.0, 2.0).with_range(0.0, PI).unwrap();
        assert!(!e.is_closed());
        assert!(xy_ellipse(3.0, 2.0).is_closed());
    }

    #[test]
    fn invalid_axes() {
        let r = Ellipse::new(Point3::origin(), 0.0, 1.0, Vector3::z(), Vector3::x());
        assert!(r.is_err());
        assert!(xy_ellipse(1.0, 1.0).with_range(1.0, 1.0).is_err());
    }
}
