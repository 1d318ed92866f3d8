pub mod edge;
mod explore;
pub mod face;
pub mod shape;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shape::{ShapeKind, SubShape};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// so a model can be shared read-only with the measurement layer while
/// sub-shapes are addressed by copyable handles.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

/// Generates the insert/lookup pair for one entity table.
macro_rules! entity_accessors {
    ($add:ident, $get:ident, $field:ident, $id:ty, $data:ty, $name:literal) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns the ", $name, " data, or an error if not found.")]
        ///
        /// # Errors
        ///
        /// Returns [`TopologyError::EntityNotFound`] for a stale or foreign ID.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    entity_accessors!(add_vertex, vertex, vertices, VertexId, VertexData, "vertex");
    entity_accessors!(add_edge, edge, edges, EdgeId, EdgeData, "edge");
    entity_accessors!(add_wire, wire, wires, WireId, WireData, "wire");
    entity_accessors!(add_face, face, faces, FaceId, FaceData, "face");
    entity_accessors!(add_shell, shell, shells, ShellId, ShellData, "shell");
    entity_accessors!(add_solid, solid, solids, SolidId, SolidData, "solid");

    /// Returns `true` if the sub-shape handle resolves in this store.
    #[must_use]
    pub fn contains(&self, shape: SubShape) -> bool {
        match shape {
            SubShape::Face(id) => self.faces.contains_key(id),
            SubShape::Edge(id) => self.edges.contains_key(id),
            SubShape::Solid(id) => self.solids.contains_key(id),
        }
    }
}
