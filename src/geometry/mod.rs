pub mod curve;
pub mod surface;

pub use curve::{Arc, Curve, CurveDomain, Ellipse, Line};
pub use surface::Plane;
