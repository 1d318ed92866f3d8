use super::CircleMeasure;

/// Classification of an edge's underlying curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveDescriptor {
    Line,
    /// Circular arc or full circle; `first` and `last` are the parameter
    /// bounds in radians.
    Circle { radius: f64, first: f64, last: f64 },
    /// Any other curve (ellipse, spline, ...).
    Other,
}

impl CurveDescriptor {
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line)
    }

    /// Raw subtended angle of a circle in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> Option<f64> {
        match *self {
            Self::Circle { first, last, .. } => Some((last - first).abs().to_degrees()),
            Self::Line | Self::Other => None,
        }
    }

    /// Subtended angle of a circle in degrees, snapped to exactly 360 above
    /// `snap_above`.
    #[must_use]
    pub fn subtended_degrees(&self, snap_above: f64) -> Option<f64> {
        self.sweep_degrees()
            .map(|degrees| if degrees > snap_above { 360.0 } else { degrees })
    }

    /// Radius, diameter and snapped angle of a circle.
    #[must_use]
    pub fn circle_measure(&self, snap_above: f64) -> Option<CircleMeasure> {
        let Self::Circle { radius, .. } = *self else {
            return None;
        };
        self.subtended_degrees(snap_above).map(|angle| CircleMeasure {
            radius,
            diameter: 2.0 * radius,
            angle,
        })
    }

    /// Per-point annotation, `"R:5.0 / A:90.0°"` for circles.
    ///
    /// Uses the raw sweep; only the record's angle is snapped.
    #[must_use]
    pub fn annotation(&self) -> Option<String> {
        let Self::Circle { radius, .. } = *self else {
            return None;
        };
        self.sweep_degrees()
            .map(|angle| format!("R:{radius:.1} / A:{angle:.1}°"))
    }
}
