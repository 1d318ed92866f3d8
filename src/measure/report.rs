//! Property table rows for a measured model.

use crate::model::FileInfo;

use super::MeasurementRecord;

/// One row of the properties table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl PropertyRow {
    fn new(name: &'static str, value: impl Into<String>, unit: &'static str) -> Self {
        Self {
            name,
            value: value.into(),
            unit,
        }
    }
}

/// File metadata rows, always present, followed by the selection rows.
///
/// Selection rows appear only for a non-empty selection, and each quantity
/// only when positive. Diameter, radius and angle come from the last
/// circular edge.
#[must_use]
pub fn property_rows(record: &MeasurementRecord, file: Option<&FileInfo>) -> Vec<PropertyRow> {
    let mut rows = vec![
        PropertyRow::new("Filename", file.map_or("-", |f| f.name.as_str()), ""),
        PropertyRow::new("Size", file.map_or_else(|| "-".to_owned(), FileInfo::size_text), ""),
        PropertyRow::new("Location", file.map_or("-", |f| f.location.as_str()), ""),
        PropertyRow::new(
            "Origin",
            record.origin.map_or_else(
                || "-".to_owned(),
                |o| format!("X{:.2} Y{:.2} Z{:.2}", o.x, o.y, o.z),
            ),
            "mm",
        ),
    ];
    if record.is_empty() {
        return rows;
    }

    rows.push(PropertyRow::new("Selection", record.selection_type.as_str(), ""));
    if record.total_area > 0.0 {
        rows.push(PropertyRow::new("Total Area", format!("{:.2}", record.total_area), "mm²"));
    }
    if record.total_length > 0.0 {
        rows.push(PropertyRow::new("Total Length", format!("{:.2}", record.total_length), "mm"));
    }
    if let Some(circle) = record.last_circle {
        rows.push(PropertyRow::new("Diameter", format!("{:.2}", circle.diameter), "mm"));
        rows.push(PropertyRow::new("Radius", format!("{:.2}", circle.radius), "mm"));
        rows.push(PropertyRow::new("Angle", format!("{:.2}", circle.angle), "deg"));
    }
    if record.total_volume > 0.0 {
        rows.push(PropertyRow::new("Volume", format!("{:.2}", record.total_volume), "mm³"));
    }
    rows
}
