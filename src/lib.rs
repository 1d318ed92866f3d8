//! A small boundary-representation kernel and a selection measurement
//! engine.
//!
//! Build a model with the creation commands in [`operations`], wrap it in a
//! [`CadModel`], select faces, edges or solids, and run a
//! [`MeasurementSession`] to get the selection totals and a numbered point
//! path through the selected edges.

pub mod error;
pub mod geometry;
pub mod math;
pub mod measure;
pub mod model;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{CalipersError, Result};
pub use measure::{
    measure, LabelSink, MeasureParams, MeasurementRecord, MeasurementSession, PointRecord,
    RecordingSink, ShapeSource,
};
pub use model::CadModel;
