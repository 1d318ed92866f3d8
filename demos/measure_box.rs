//! Measures a few selections on a box with a circular boss outline.
//!
//! Usage:
//! ```text
//! cargo run --example measure_box
//! RUST_LOG=calipers=debug cargo run --example measure_box
//! ```

use calipers::geometry::curve::Arc;
use calipers::math::{Point3, Vector3};
use calipers::measure::report::property_rows;
use calipers::operations::creation::{MakeBox, MakeCircle, MakeFace};
use calipers::topology::TopologyStore;
use calipers::{CadModel, CalipersError, MeasureParams, MeasurementSession, RecordingSink};

fn main() -> Result<(), CalipersError> {
    // Default: WARN for everything, INFO for calipers.
    // Override with RUST_LOG env var (e.g. RUST_LOG=calipers=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("calipers=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = TopologyStore::new();
    let solid =
        MakeBox::new(Point3::origin(), Point3::new(40.0, 30.0, 20.0)).execute(&mut store)?;
    let circle = Arc::circle(Point3::new(20.0, 15.0, 20.0), 5.0, Vector3::z(), Vector3::x())?;
    let boss_outline = MakeCircle::new(circle).execute(&mut store)?;
    let boss = MakeFace::new(boss_outline, vec![]).execute(&mut store)?;

    let mut model = CadModel::new(store);
    model.add_root(solid)?;

    let top = model.store().solid_faces(solid)?[1];
    let mut session = MeasurementSession::new(MeasureParams::default());
    let mut sink = RecordingSink::new();

    // 1. Top face of the box
    model.select(top)?;
    report(&mut session, &model, &mut sink);

    // 2. Add the boss outline edge
    let boss_edge = model.store().face_edges(boss)?[0];
    model.select(boss_edge)?;
    report(&mut session, &model, &mut sink);

    // 3. Whole solid
    model.clear_selection();
    model.select(solid)?;
    report(&mut session, &model, &mut sink);

    Ok(())
}

fn report(session: &mut MeasurementSession, model: &CadModel, sink: &mut RecordingSink) {
    let measurement = session.compute(model, sink);
    println!("{}", session.summary());
    for row in property_rows(&measurement.record, model.file_info().as_ref()) {
        println!("  {:<14}{} {}", row.name, row.value, row.unit);
    }
    println!(
        "{} points, {} labels, {} leader lines",
        measurement.points.len(),
        sink.label_texts().len(),
        sink.leader_lines()
    );
    for line in session.point_table().lines().take(6) {
        println!("  {line}");
    }
    println!();
}
