//! Selection measurement and path reconstruction.
//!
//! A pass runs in three stages over a [`ShapeSource`]:
//!
//! 1. [`aggregate`] totals area, volume and length and collects the
//!    structurally unique edges.
//! 2. [`reconstruct`] chains those edges into one path.
//! 3. [`emit`] walks the path, discretizing curves into numbered points and
//!    queuing label placements.
//!
//! [`measure`] runs all three; [`MeasurementSession`] also drives a
//! [`LabelSink`] and caches the last result.

mod aggregate;
mod curve_info;
mod edge_key;
mod emit;
mod params;
mod path;
mod record;
pub mod report;
mod session;
mod source;

pub use aggregate::{aggregate, Aggregation};
pub use curve_info::CurveDescriptor;
pub use edge_key::{EdgeKey, DEFAULT_KEY_RESOLUTION};
pub use emit::{emit, Emission, PointAccumulator};
pub use params::MeasureParams;
pub use path::{reconstruct, ChainLink, PathEdge};
pub use record::{format_point_table, CircleMeasure, MeasurementRecord, PointRecord};
pub use session::{measure, Measurement, MeasurementOutput, MeasurementSession};
pub use source::{LabelColor, LabelRequest, LabelSink, RecordingSink, ShapeSource};
