mod brep;
mod extrusion;
mod mesh;
mod other;

use std::fmt;

pub use brep::{Brep, BrepFace};
pub use extrusion::{Extrusion, Polyline};
pub use mesh::{Mesh, MeshFace};
pub use other::OtherGeometry;

/// Geometry of a single document object.
///
/// The set of kinds is closed: every consumer matches on all four variants,
/// and anything the host cannot classify lands in [`Geometry::Other`].
#[derive(Debug, Clone)]
pub enum Geometry {
    /// A polygonal boundary representation.
    Brep(Brep),
    /// A planar profile swept along a direction.
    Extrusion(Extrusion),
    /// A polyhedral mesh of triangles and quads.
    Mesh(Mesh),
    /// Any other host object.
    Other(OtherGeometry),
}

/// Discriminant of [`Geometry`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Brep,
    Extrusion,
    Mesh,
    Other,
}

impl Geometry {
    /// Returns the kind of this geometry.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Brep(_) => GeometryKind::Brep,
            Self::Extrusion(_) => GeometryKind::Extrusion,
            Self::Mesh(_) => GeometryKind::Mesh,
            Self::Other(_) => GeometryKind::Other,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brep => "brep",
            Self::Extrusion => "extrusion",
            Self::Mesh => "mesh",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl From<Brep> for Geometry {
    fn from(brep: Brep) -> Self {
        Self::Brep(brep)
    }
}

impl From<Extrusion> for Geometry {
    fn from(extrusion: Extrusion) -> Self {
        Self::Extrusion(extrusion)
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Self::Mesh(mesh)
    }
}

impl From<OtherGeometry> for Geometry {
    fn from(other: OtherGeometry) -> Self {
        Self::Other(other)
    }
}
