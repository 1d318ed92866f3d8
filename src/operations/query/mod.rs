mod area;
mod center_of_mass;
mod length;
mod volume;

pub use area::Area;
pub use center_of_mass::CenterOfMass;
pub use length::Length;
pub use volume::Volume;

use crate::math::{Point3, Vector3};

/// Mass and centroid of a uniformly dense curve, region or volume.
///
/// `mass` is a length, an area or a volume depending on the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    pub mass: f64,
    pub centroid: Point3,
}

impl MassProperties {
    /// Mass-weighted union of several properties.
    ///
    /// Returns `None` when the parts carry no mass.
    #[must_use]
    pub fn combine(parts: impl IntoIterator<Item = MassProperties>) -> Option<MassProperties> {
        let mut mass = 0.0;
        let mut moment = Vector3::zeros();
        for part in parts {
            mass += part.mass;
            moment += part.centroid.coords * part.mass;
        }
        (mass > 0.0).then(|| MassProperties {
            mass,
            centroid: Point3::from(moment / mass),
        })
    }
}
