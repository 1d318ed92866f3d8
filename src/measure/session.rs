use tracing::debug;

use super::{
    aggregate, emit, format_point_table, reconstruct, LabelRequest, LabelSink, MeasureParams,
    MeasurementRecord, PointRecord, ShapeSource,
};

/// Result of one pure measurement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementOutput {
    pub record: MeasurementRecord,
    pub points: Vec<PointRecord>,
    pub labels: Vec<LabelRequest>,
}

/// Aggregates the selection, chains its edges and emits the path points.
///
/// Never fails: unusable items are skipped and an empty selection yields a
/// zeroed record.
pub fn measure<S: ShapeSource + ?Sized>(source: &S, params: &MeasureParams) -> MeasurementOutput {
    let aggregation = aggregate(source, params);
    let path = reconstruct(&aggregation.edges, params);
    let emission = emit(&path, source, params);
    debug!(
        edges = path.len(),
        points = emission.points.len(),
        "measurement pass"
    );
    MeasurementOutput {
        record: aggregation.record,
        points: emission.points,
        labels: emission.labels,
    }
}

/// What [`MeasurementSession::compute`] hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub record: MeasurementRecord,
    pub points: Vec<PointRecord>,
}

/// Recomputes measurements on selection changes and keeps the label sink
/// in step.
///
/// Every pass clears all labels and replays the new ones. The last record
/// and point table are cached for the summary accessors.
#[derive(Debug, Default)]
pub struct MeasurementSession {
    params: MeasureParams,
    record: MeasurementRecord,
    point_table: String,
}

impl MeasurementSession {
    #[must_use]
    pub fn new(params: MeasureParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn params(&self) -> &MeasureParams {
        &self.params
    }

    /// Runs a full pass over the source's current selection.
    pub fn compute<S, L>(&mut self, source: &S, sink: &mut L) -> Measurement
    where
        S: ShapeSource + ?Sized,
        L: LabelSink + ?Sized,
    {
        let output = measure(source, &self.params);

        sink.clear_all_labels();
        for request in &output.labels {
            request.apply(sink);
        }

        self.point_table = format_point_table(&output.points);
        self.record = output.record.clone();
        Measurement {
            record: output.record,
            points: output.points,
        }
    }

    /// Record of the last pass.
    #[must_use]
    pub fn record(&self) -> &MeasurementRecord {
        &self.record
    }

    /// Text summary of the last pass, `"No selection"` before any.
    #[must_use]
    pub fn summary(&self) -> String {
        self.record.summary()
    }

    /// Point table of the last pass.
    #[must_use]
    pub fn point_table(&self) -> &str {
        &self.point_table
    }
}
