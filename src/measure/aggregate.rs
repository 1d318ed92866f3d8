use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::error::{MeasureError, Result};
use crate::math::TOLERANCE;
use crate::topology::{EdgeId, SubShape};

use super::{EdgeKey, MeasureParams, MeasurementRecord, PathEdge, ShapeSource};

/// Totals of a selection plus its distinct usable edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub record: MeasurementRecord,
    /// Structurally unique edges in first-seen order.
    pub edges: Vec<PathEdge>,
}

/// Accumulates area, volume and edge length over the selection.
///
/// Faces add their area and contribute their boundary edges, solids add
/// their volume, edges are collected as-is. Edges are de-duplicated by
/// [`EdgeKey`], so a face selected together with its own edges counts each
/// edge once. An item whose query fails is skipped with a warning; its
/// kind still appears in the selection type.
pub fn aggregate<S: ShapeSource + ?Sized>(source: &S, params: &MeasureParams) -> Aggregation {
    let mut record = MeasurementRecord::default();
    let mut kinds = IndexSet::new();
    let mut unique: IndexMap<EdgeKey, PathEdge> = IndexMap::new();

    for shape in source.selection() {
        kinds.insert(shape.kind());
        match shape {
            SubShape::Face(face) => {
                match source.surface_area(face) {
                    Ok(area) => record.total_area += area,
                    Err(error) => warn!(?face, %error, "skipping face area"),
                }
                match source.face_edges(face) {
                    Ok(edges) => {
                        for edge in edges {
                            insert_edge(source, &mut unique, edge, params.key_resolution);
                        }
                    }
                    Err(error) => warn!(?face, %error, "skipping face boundary"),
                }
            }
            SubShape::Edge(edge) => insert_edge(source, &mut unique, edge, params.key_resolution),
            SubShape::Solid(solid) => match source.volume(solid) {
                Ok(volume) => record.total_volume += volume,
                Err(error) => warn!(?solid, %error, "skipping solid volume"),
            },
        }
    }

    let mut edges = Vec::with_capacity(unique.len());
    for (_, mut edge) in unique {
        match usable_length(source, edge.id) {
            Ok(length) => edge.length = length,
            Err(error) => {
                warn!(edge = ?edge.id, %error, "skipping edge");
                continue;
            }
        }
        record.total_length += edge.length;
        if let Some(circle) = edge.curve.circle_measure(params.full_circle_snap) {
            record.last_circle = Some(circle);
        }
        edges.push(edge);
    }

    record.selection_type = kinds
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join("+");
    record.origin = source.origin();

    debug!(
        selection = %record.selection_type,
        edges = edges.len(),
        area = record.total_area,
        volume = record.total_volume,
        length = record.total_length,
        "aggregated selection"
    );
    Aggregation { record, edges }
}

fn insert_edge<S: ShapeSource + ?Sized>(
    source: &S,
    unique: &mut IndexMap<EdgeKey, PathEdge>,
    edge: EdgeId,
    resolution: f64,
) {
    match resolve(source, edge, resolution) {
        Ok((key, resolved)) => {
            unique.entry(key).or_insert(resolved);
        }
        Err(error) => warn!(?edge, %error, "skipping unresolvable edge"),
    }
}

fn resolve<S: ShapeSource + ?Sized>(
    source: &S,
    id: EdgeId,
    resolution: f64,
) -> Result<(EdgeKey, PathEdge)> {
    let (start, end) = source.endpoints(id)?;
    let curve = source.curve_of(id)?;
    let midpoint = if curve.is_line() {
        None
    } else {
        Some(source.midpoint(id)?)
    };
    let key = EdgeKey::new(&start, &end, &curve, midpoint.as_ref(), resolution);
    let edge = PathEdge {
        id,
        start,
        end,
        curve,
        length: 0.0,
    };
    Ok((key, edge))
}

fn usable_length<S: ShapeSource + ?Sized>(source: &S, id: EdgeId) -> Result<f64> {
    let length = source.length(id)?;
    if length.is_nan() || length < TOLERANCE {
        return Err(MeasureError::DegenerateEdge(format!("length {length}")).into());
    }
    Ok(length)
}
