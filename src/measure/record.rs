use std::fmt::{self, Write as _};

use crate::math::Point3;

/// Geometry of a circular edge as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMeasure {
    pub radius: f64,
    pub diameter: f64,
    /// Subtended angle in degrees, snapped to 360 for full circles.
    pub angle: f64,
}

/// Aggregate properties of the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementRecord {
    pub total_area: f64,
    pub total_volume: f64,
    pub total_length: f64,
    /// The circular edge processed last wins; `None` when the selection
    /// holds no circular edge.
    pub last_circle: Option<CircleMeasure>,
    /// Distinct selected kinds in first-seen order, joined with `+`
    /// (`"FACE+EDGE"`). Empty for an empty selection.
    pub selection_type: String,
    /// Center of mass of the whole model.
    pub origin: Option<Point3>,
}

impl MeasurementRecord {
    /// Returns `true` when nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection_type.is_empty()
    }

    /// Multi-line text summary; only positive quantities are listed.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No selection".to_owned();
        }
        let mut out = format!("Type: {}\n", self.selection_type);
        let lines = [
            ("Area", self.total_area, "mm²"),
            ("Volume", self.total_volume, "mm³"),
            ("Length", self.total_length, "mm"),
            ("Diameter", self.last_circle.map_or(0.0, |c| c.diameter), "mm"),
        ];
        for (name, value, unit) in lines {
            if value > 0.0 {
                let _ = writeln!(out, "{name}: {value:.2} {unit}");
            }
        }
        out
    }
}

/// One emitted path point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// 1-based emission index.
    pub id: usize,
    pub position: Point3,
    /// Distance from the previous point; `None` for the first.
    pub distance: Option<f64>,
    /// Annotation of the edge the point came from (`"R:5.0 / A:90.0°"`).
    pub curve_info: Option<String>,
    /// Earlier points within the overlap radius. Non-zero means the label
    /// was offset with a leader line.
    pub overlap_count: usize,
}

impl PointRecord {
    #[must_use]
    pub fn is_offset(&self) -> bool {
        self.overlap_count > 0
    }
}

/// `P{id}|{x}|{y}|{z}|{distance}|{curve}` with two decimals and `-` for
/// absent fields.
impl fmt::Display for PointRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.position;
        write!(f, "P{}|{:.2}|{:.2}|{:.2}|", self.id, p.x, p.y, p.z)?;
        match self.distance {
            Some(d) => write!(f, "{d:.2}")?,
            None => f.write_str("-")?,
        }
        write!(f, "|{}", self.curve_info.as_deref().unwrap_or("-"))
    }
}

/// Serializes points as newline-terminated table rows.
#[must_use]
pub fn format_point_table(points: &[PointRecord]) -> String {
    let mut out = String::new();
    for point in points {
        let _ = writeln!(out, "{point}");
    }
    out
}
