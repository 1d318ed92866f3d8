use std::fmt;

use super::{EdgeId, FaceId, SolidId};

/// A selectable sub-shape of a model, tagged by topological kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubShape {
    /// A bounded planar region.
    Face(FaceId),
    /// A curve segment between two vertices.
    Edge(EdgeId),
    /// A closed volume.
    Solid(SolidId),
}

impl SubShape {
    /// Returns the topological kind of this sub-shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Face(_) => ShapeKind::Face,
            Self::Edge(_) => ShapeKind::Edge,
            Self::Solid(_) => ShapeKind::Solid,
        }
    }
}

impl From<FaceId> for SubShape {
    fn from(id: FaceId) -> Self {
        Self::Face(id)
    }
}

impl From<EdgeId> for SubShape {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl From<SolidId> for SubShape {
    fn from(id: SolidId) -> Self {
        Self::Solid(id)
    }
}

/// Topological kind of a [`SubShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Face,
    Edge,
    Solid,
}

impl ShapeKind {
    /// Upper-case label used in selection type strings (`"FACE+EDGE"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Face => "FACE",
            Self::Edge => "EDGE",
            Self::Solid => "SOLID",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
