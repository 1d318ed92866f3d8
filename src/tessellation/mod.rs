mod tessellate_curve;
mod tessellate_wire;

pub use tessellate_curve::TessellateCurve;
pub use tessellate_wire::TessellateWire;

use crate::error::{Result, TessellationError};
use crate::math::Point3;

/// Parameters controlling curve discretization quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed chordal deviation from the true curve.
    pub tolerance: f64,
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 1024,
        }
    }
}

impl TessellationParams {
    /// Default parameters with a custom chordal tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 || self.max_segments < self.min_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds [{}, {}] are invalid",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }

    /// Number of segments needed for a circular sweep of `abs_sweep`
    /// radians at `radius`, clamped to the configured bounds.
    ///
    /// From the sagitta `s = r * (1 - cos(theta / 2))`, the widest step that
    /// keeps `s <= tolerance` is `theta = 2 * acos(1 - tolerance / r)`.
    #[must_use]
    pub fn arc_segments(&self, radius: f64, abs_sweep: f64) -> usize {
        if radius < 1e-12 || abs_sweep < 1e-12 {
            return self.min_segments;
        }
        let max_angle = if self.tolerance >= radius {
            std::f64::consts::PI
        } else {
            2.0 * (1.0 - self.tolerance / radius).acos()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (abs_sweep / max_angle).ceil() as usize;
        n.clamp(self.min_segments, self.max_segments)
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Length-weighted centroid of the segments, or `None` for a polyline
    /// without extent.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3> {
        let mut total = 0.0;
        let mut weighted = crate::math::Vector3::zeros();
        for w in self.points.windows(2) {
            let len = (w[1] - w[0]).norm();
            weighted += (w[0].coords + w[1].coords) * 0.5 * len;
            total += len;
        }
        (total > 0.0).then(|| Point3::from(weighted / total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn sagitta_segment_count() {
        let params = TessellationParams {
            tolerance: 0.005,
            min_segments: 1,
            max_segments: 10_000,
        };
        // 2 * acos(1 - 0.001) ~= 0.08945 rad per step
        assert_eq!(params.arc_segments(5.0, TAU), 71);
    }

    #[test]
    fn segment_count_is_clamped() {
        let params = TessellationParams::default();
        assert_eq!(params.arc_segments(1e-3, TAU), params.min_segments);
        assert_eq!(params.arc_segments(1e6, TAU), params.max_segments);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert!(TessellationParams::with_tolerance(0.0).validate().is_err());
        assert!(TessellationParams::with_tolerance(f64::NAN).validate().is_err());
        assert!(TessellationParams::default().validate().is_ok());
    }

    #[test]
    fn polyline_length_and_centroid() {
        let line = Polyline {
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 2.0, 0.0),
            ],
        };
        assert!((line.length() - 6.0).abs() < 1e-12);
        let c = line.centroid();
        assert!(c.is_some_and(|c| (c - Point3::new(8.0 / 3.0, 1.0 / 3.0, 0.0)).norm() < 1e-12));
    }
}
