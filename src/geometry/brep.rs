use crate::math::Point3;

/// A planar face of a [`Brep`], bounded by a single loop of vertex indices.
///
/// The loop winding defines the outward side by the right-hand rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrepFace {
    /// Indices into [`Brep::vertices`], in loop order. The loop closes
    /// implicitly from the last index back to the first.
    pub vertices: Vec<usize>,
}

/// A polygonal boundary representation.
///
/// Faces share vertices by index, so adjacency is explicit. Whether the
/// faces enclose a volume is a question for a geometry engine.
#[derive(Debug, Clone, Default)]
pub struct Brep {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Bounded planar faces.
    pub faces: Vec<BrepFace>,
}

impl Brep {
    /// Creates an empty brep.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Appends a face bounded by the given vertex loop.
    pub fn add_face(&mut self, vertices: Vec<usize>) {
        self.faces.push(BrepFace { vertices });
    }

    /// Returns `true` if the brep has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
