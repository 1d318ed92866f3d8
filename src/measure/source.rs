use crate::error::Result;
use crate::math::Point3;
use crate::topology::{EdgeId, FaceId, SolidId, SubShape};

use super::CurveDescriptor;

/// Read access to a model and its current selection.
///
/// Queries are per item; a failure affects only the sub-shape it was
/// asked about.
pub trait ShapeSource {
    /// Selected sub-shapes in selection order. May list a face and its own
    /// edges together.
    fn selection(&self) -> Vec<SubShape>;

    /// Boundary edges of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face cannot be resolved.
    fn face_edges(&self, face: FaceId) -> Result<Vec<EdgeId>>;

    /// Area of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the area cannot be computed.
    fn surface_area(&self, face: FaceId) -> Result<f64>;

    /// Enclosed volume of a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume cannot be computed.
    fn volume(&self, solid: SolidId) -> Result<f64>;

    /// Arc length of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be computed.
    fn length(&self, edge: EdgeId) -> Result<f64>;

    /// Start and end positions of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be resolved.
    fn endpoints(&self, edge: EdgeId) -> Result<(Point3, Point3)>;

    /// Classification of the edge's underlying curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be resolved.
    fn curve_of(&self, edge: EdgeId) -> Result<CurveDescriptor>;

    /// Point at the middle of the edge's parameter range.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated.
    fn midpoint(&self, edge: EdgeId) -> Result<Point3>;

    /// Ordered samples from the start to the end of an edge, with chordal
    /// deviation bounded by `deflection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be discretized.
    fn discretize(&self, edge: EdgeId, deflection: f64) -> Result<Vec<Point3>>;

    /// Center of mass of the whole model, if it has one.
    fn origin(&self) -> Option<Point3> {
        None
    }
}

/// Color hint for label primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    /// Point name text.
    Green,
    /// Leader lines to offset labels.
    Yellow,
}

/// Receiver of label placement requests.
pub trait LabelSink {
    fn place_label(&mut self, text: &str, position: Point3, color: LabelColor);
    /// Draws a connector from a point to its offset label, in
    /// [`LabelColor::Yellow`].
    fn place_leader_line(&mut self, from: Point3, to: Point3);
    fn clear_all_labels(&mut self);
}

/// One label placement produced by a measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelRequest {
    Label {
        text: String,
        position: Point3,
        color: LabelColor,
    },
    LeaderLine {
        from: Point3,
        to: Point3,
    },
}

impl LabelRequest {
    /// Forwards the request to a sink.
    pub fn apply<S: LabelSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Label {
                text,
                position,
                color,
            } => sink.place_label(text, *position, *color),
            Self::LeaderLine { from, to } => sink.place_leader_line(*from, *to),
        }
    }
}

/// A [`LabelSink`] that keeps every request since the last clear.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub requests: Vec<LabelRequest>,
    /// Number of `clear_all_labels` calls received.
    pub clears: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of the placed labels in placement order.
    #[must_use]
    pub fn label_texts(&self) -> Vec<&str> {
        self.requests
            .iter()
            .filter_map(|r| match r {
                LabelRequest::Label { text, .. } => Some(text.as_str()),
                LabelRequest::LeaderLine { .. } => None,
            })
            .collect()
    }

    /// Number of leader lines placed.
    #[must_use]
    pub fn leader_lines(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| matches!(r, LabelRequest::LeaderLine { .. }))
            .count()
    }
}

impl LabelSink for RecordingSink {
    fn place_label(&mut self, text: &str, position: Point3, color: LabelColor) {
        self.requests.push(LabelRequest::Label {
            text: text.to_owned(),
            position,
            color,
        });
    }

    fn place_leader_line(&mut self, from: Point3, to: Point3) {
        self.requests.push(LabelRequest::LeaderLine { from, to });
    }

    fn clear_all_labels(&mut self) {
        self.requests.clear();
        self.clears += 1;
    }
}
