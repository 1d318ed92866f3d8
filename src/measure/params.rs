use super::edge_key::DEFAULT_KEY_RESOLUTION;

/// Tunables for one measurement pass.
///
/// Distances are in model units (millimetres for imported parts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureParams {
    /// Chordal deflection used to discretize curved edges.
    pub deflection: f64,
    /// Radius for deciding which end of the seed edge continues the chain.
    pub probe_tolerance: f64,
    /// Maximum endpoint gap bridged while chaining edges.
    pub chain_tolerance: f64,
    /// Points closer than this to an earlier point count as overlapping.
    pub overlap_radius: f64,
    /// Vertical label offset per overlapping earlier point.
    pub overlap_step: f64,
    /// Vertical lift of labels on points without overlap.
    pub label_lift: f64,
    /// Subtended angles above this many degrees are reported as 360.
    pub full_circle_snap: f64,
    /// Grid spacing at which edge copies are recognized as the same edge.
    pub key_resolution: f64,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            deflection: 0.005,
            probe_tolerance: 1e-4,
            chain_tolerance: 1.0,
            overlap_radius: 0.1,
            overlap_step: 0.5,
            label_lift: 0.05,
            full_circle_snap: 359.9,
            key_resolution: DEFAULT_KEY_RESOLUTION,
        }
    }
}

impl MeasureParams {
    /// Sets the curve discretization deflection.
    #[must_use]
    pub fn with_deflection(mut self, deflection: f64) -> Self {
        self.deflection = deflection;
        self
    }

    /// Sets the endpoint gap bridged while chaining edges.
    #[must_use]
    pub fn with_chain_tolerance(mut self, tolerance: f64) -> Self {
        self.chain_tolerance = tolerance;
        self
    }

    /// Sets the overlap radius and per-overlap label step.
    #[must_use]
    pub fn with_overlap(mut self, radius: f64, step: f64) -> Self {
        self.overlap_radius = radius;
        self.overlap_step = step;
        self
    }

    /// Sets the grid spacing used to de-duplicate edges.
    #[must_use]
    pub fn with_key_resolution(mut self, resolution: f64) -> Self {
        self.key_resolution = resolution;
        self
    }
}
