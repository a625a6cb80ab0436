use crate::math::Point3;

/// A mesh face. A quad whose last two indices coincide is a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFace {
    Triangle([u32; 3]),
    Quad([u32; 4]),
}

impl MeshFace {
    /// Returns the vertex indices of the face in winding order.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        match self {
            Self::Triangle(idx) => &idx[..],
            Self::Quad(idx) => &idx[..],
        }
    }
}

/// A polyhedral mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<MeshFace>,
}

impl Mesh {
    /// Creates a mesh from vertices and faces.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<MeshFace>) -> Self {
        Self { vertices, faces }
    }
}
