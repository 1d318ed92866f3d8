use tracing::warn;

use crate::error::MeasureError;
use crate::math::{Point3, Vector3};

use super::{
    ChainLink, LabelColor, LabelRequest, MeasureParams, PathEdge, PointRecord, ShapeSource,
};

/// Points and label requests produced from a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emission {
    pub points: Vec<PointRecord>,
    pub labels: Vec<LabelRequest>,
}

/// Running state of one emission pass: id counter, previous position and
/// every position placed so far.
#[derive(Debug)]
pub struct PointAccumulator {
    overlap_radius: f64,
    overlap_step: f64,
    label_lift: f64,
    last: Option<Point3>,
    placed: Vec<Point3>,
    emission: Emission,
}

impl PointAccumulator {
    #[must_use]
    pub fn new(params: &MeasureParams) -> Self {
        Self {
            overlap_radius: params.overlap_radius,
            overlap_step: params.overlap_step,
            label_lift: params.label_lift,
            last: None,
            placed: Vec::new(),
            emission: Emission::default(),
        }
    }

    /// Position of the most recently pushed point.
    #[must_use]
    pub fn last_position(&self) -> Option<Point3> {
        self.last
    }

    /// Appends a point and queues its label.
    ///
    /// A point within the overlap radius of `n` earlier points gets its
    /// label raised by `n` steps at the end of a leader line; others get a
    /// small lift.
    pub fn push(&mut self, position: Point3, curve_info: Option<&str>) -> &PointRecord {
        let id = self.emission.points.len() + 1;
        let overlap_count = self
            .placed
            .iter()
            .filter(|q| (position - **q).norm() < self.overlap_radius)
            .count();

        let text = format!("P{id}");
        if overlap_count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let raised = position + Vector3::z() * (self.overlap_step * overlap_count as f64);
            self.emission.labels.push(LabelRequest::LeaderLine {
                from: position,
                to: raised,
            });
            self.emission.labels.push(LabelRequest::Label {
                text,
                position: raised,
                color: LabelColor::Green,
            });
        } else {
            self.emission.labels.push(LabelRequest::Label {
                text,
                position: position + Vector3::z() * self.label_lift,
                color: LabelColor::Green,
            });
        }

        let distance = self.last.map(|last| (position - last).norm());
        self.last = Some(position);
        self.placed.push(position);
        self.emission.points.push(PointRecord {
            id,
            position,
            distance,
            curve_info: curve_info.map(str::to_owned),
            overlap_count,
        });
        &self.emission.points[id - 1]
    }

    #[must_use]
    pub fn finish(self) -> Emission {
        self.emission
    }
}

/// Walks the path and emits every point.
///
/// The first edge is flipped when its start lies nearer the second edge
/// than its end does; every later edge starts from the endpoint nearer the
/// last emitted point. Lines contribute their two endpoints, other curves
/// their discretization.
pub fn emit<S: ShapeSource + ?Sized>(
    path: &[ChainLink],
    source: &S,
    params: &MeasureParams,
) -> Emission {
    let mut acc = PointAccumulator::new(params);

    for (index, link) in path.iter().enumerate() {
        let edge = &link.edge;
        let reversed = match acc.last_position() {
            Some(last) if index > 0 => (edge.start - last).norm() >= (edge.end - last).norm(),
            _ => path.get(1).is_some_and(|next| {
                next.edge.distance_to(&edge.start) < next.edge.distance_to(&edge.end)
            }),
        };

        let mut samples = edge_samples(edge, source, params.deflection);
        if reversed {
            samples.reverse();
        }
        let annotation = edge.curve.annotation();
        for point in samples {
            acc.push(point, annotation.as_deref());
        }
    }

    acc.finish()
}

fn edge_samples<S: ShapeSource + ?Sized>(
    edge: &PathEdge,
    source: &S,
    deflection: f64,
) -> Vec<Point3> {
    if edge.curve.is_line() {
        return vec![edge.start, edge.end];
    }
    match source.discretize(edge.id, deflection) {
        Ok(points) if !points.is_empty() => points,
        Ok(_) => {
            warn!(edge = ?edge.id, error = %MeasureError::EmptyDiscretization, "using endpoints");
            vec![edge.start, edge.end]
        }
        Err(error) => {
            warn!(edge = ?edge.id, %error, "discretization failed, using endpoints");
            vec![edge.start, edge.end]
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn ids_and_distances() {
        let mut acc = PointAccumulator::new(&MeasureParams::default());
        acc.push(p(0.0, 0.0, 0.0), None);
        let second = acc.push(p(3.0, 4.0, 0.0), Some("R:1.0 / A:90.0°")).clone();
        assert_eq!(second.id, 2);
        assert_eq!(second.distance, Some(5.0));

        let emission = acc.finish();
        assert_eq!(emission.points[0].distance, None);
        assert_eq!(emission.labels.len(), 2);
    }

    #[test]
    fn overlapping_labels_stack_upward() {
        let mut acc = PointAccumulator::new(&MeasureParams::default());
        acc.push(p(1.0, 1.0, 0.0), None);
        acc.push(p(1.0, 1.0, 0.0), None);
        acc.push(p(1.05, 1.0, 0.0), None);
        let emission = acc.finish();

        let counts: Vec<_> = emission.points.iter().map(|r| r.overlap_count).collect();
        assert_eq!(counts, vec![0, 1, 2]);
        assert_eq!(
            emission.labels[0],
            LabelRequest::Label {
                text: "P1".into(),
                position: p(1.0, 1.0, 0.05),
                color: LabelColor::Green,
            }
        );
        assert_eq!(
            emission.labels[3],
            LabelRequest::LeaderLine {
                from: p(1.05, 1.0, 0.0),
                to: p(1.05, 1.0, 1.0),
            }
        );
        assert!(matches!(
            &emission.labels[4],
            LabelRequest::Label { text, position, .. } if text == "P3" && position.z == 1.0
        ));
    }

    #[test]
    fn overlap_radius_and_step_are_configurable() {
        let params = MeasureParams::default().with_overlap(1.0, 2.0);
        let mut acc = PointAccumulator::new(&params);
        acc.push(p(0.0, 0.0, 0.0), None);
        acc.push(p(0.5, 0.0, 0.0), None);
        acc.push(p(3.0, 0.0, 0.0), None);
        let emission = acc.finish();

        let counts: Vec<_> = emission.points.iter().map(|r| r.overlap_count).collect();
        assert_eq!(counts, vec![0, 1, 0]);
        assert_eq!(
            emission.labels[1],
            LabelRequest::LeaderLine {
                from: p(0.5, 0.0, 0.0),
                to: p(0.5, 0.0, 2.0),
            }
        );
        // The default radius would not see these as overlapping
        let mut acc = PointAccumulator::new(&MeasureParams::default());
        acc.push(p(0.0, 0.0, 0.0), None);
        assert!(!acc.push(p(0.5, 0.0, 0.0), None).is_offset());
    }
}
