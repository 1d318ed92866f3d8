use crate::geometry::surface::Plane;
use crate::math::Vector3;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a bounded region of a plane, defined by an outer wire
/// and optionally inner wires (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane on which this face lies.
    pub surface: Plane,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the plane normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Unit normal of the face, taking `same_sense` into account.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        if self.same_sense {
            *self.surface.normal()
        } else {
            -self.surface.normal()
        }
    }

    /// All boundary wires, outer first.
    pub fn wires(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied())
    }
}
