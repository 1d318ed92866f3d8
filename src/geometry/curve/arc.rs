use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The parametric form sweeps from `start_angle`
/// to `end_angle` (in radians) around the normal axis:
///
/// `P(t) = center + radius * cos(t) * ref_dir + radius * sin(t) * binormal`
/// where `binormal = normal x ref_dir`.
///
/// A sweep of a full turn is a closed circle.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// the reference direction is not perpendicular to the normal, or the sweep
    /// is empty.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if (end_angle - start_angle).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Creates a full circle, parameterized over `[0, 2*pi]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Arc::new`].
    pub fn circle(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        Self::new(center, radius, normal, ref_dir, 0.0, TAU)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Absolute swept angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Arc length between the start and end angles.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let binormal = self.binormal();
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Ok(self.center + self.ref_dir * x + binormal * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let binormal = self.binormal();
        let tangent = self.ref_dir * (-t.sin()) + binormal * t.cos();
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
        (self.sweep() - TAU).abs() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn quarter(radius: f64) -> Arc {
        Arc::new(Point3::origin(), radius, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2).unwrap()
    }

    #[test]
    fn quarter_arc_endpoints() {
        let arc = quarter(3.0);
        let start = arc.evaluate(arc.start_angle()).unwrap();
        let end = arc.evaluate(arc.end_angle()).unwrap();
        assert!((start - Point3::new(3.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((end - Point3::new(0.0, 3.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn quarter_arc_length() {
        let arc = quarter(2.0);
        assert!((arc.length() - std::f64::consts::PI).abs() < 1e-12);
        assert!(!arc.is_closed());
    }

    #[test]
    fn circle_is_closed() {
        let c = Arc::circle(Point3::origin(), 1.0, Vector3::z(), Vector3::x()).unwrap();
        assert!(c.is_closed());
        assert!((c.domain().span() - TAU).abs() < 1e-12);
    }

    #[test]
    fn tangent_at_zero_points_along_binormal() {
        let t = quarter(5.0).tangent(0.0).unwrap();
        assert!((t - Vector3::y()).norm() < 1e-12);
    }

    #[test]
    fn invalid_arcs() {
        assert!(Arc::new(Point3::origin(), 0.0, Vector3::z(), Vector3::x(), 0.0, 1.0).is_err());
        assert!(Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 1.0, 1.0).is_err());
        assert!(
            Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::new(1.0, 0.0, 1.0), 0.0, 1.0)
                .is_err()
        );
    }
}
