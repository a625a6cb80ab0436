use crate::error::EngineError;
use crate::geometry::{Brep, Extrusion, Mesh, OtherGeometry, Polyline};
use crate::math::polygon_3d::{newell_normal, signed_cone_volume6};
use crate::math::{Point3, Vector3};

use super::edges::EdgeMap;
use super::extrude::ExtrudeProfile;
use super::weld::weld;
use super::{EngineOptions, EngineResult, GeometryEngine};

/// Geometry engine for planar-faced geometry.
///
/// Volumes use the signed tetrahedron method: each face is fan-triangulated
/// and `(1/6) * v0 . (v1 x v2)` is summed over all triangles. The absolute
/// value is returned, so a consistently inward-facing solid measures the
/// same as an outward-facing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyhedralEngine {
    options: EngineOptions,
}

impl PolyhedralEngine {
    /// Creates an engine with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom engine options.
    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn box_brep(&self, min: Point3, max: Point3) -> Option<Brep> {
        let lo = min.coords.inf(&max.coords);
        let hi = min.coords.sup(&max.coords);
        let extent = hi - lo;
        if extent.min() < self.options.tolerance {
            return None;
        }
        let profile = Polyline::closed(vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ]);
        ExtrudeProfile::new(&profile, Vector3::new(0.0, 0.0, extent.z), self.options.tolerance)
            .execute()
    }
}

impl GeometryEngine for PolyhedralEngine {
    fn is_solid(&self, brep: &Brep) -> EngineResult<bool> {
        let mut edges = EdgeMap::new();
        for face in &brep.faces {
            check_indices(&face.vertices, brep.vertices.len())?;
            if spans_area(&face.vertices) {
                edges.add_loop(&face.vertices);
            }
        }
        Ok(edges.is_closed_and_oriented())
    }

    fn brep_volume(&self, brep: &Brep) -> EngineResult<f64> {
        let mut volume6 = 0.0;
        let mut points = Vec::new();
        for face in &brep.faces {
            check_indices(&face.vertices, brep.vertices.len())?;
            points.clear();
            points.extend(face.vertices.iter().map(|&i| brep.vertices[i]));
            volume6 += signed_cone_volume6(&points);
        }
        Ok(volume6.abs() / 6.0)
    }

    fn extrusion_to_brep(&self, extrusion: &Extrusion) -> EngineResult<Option<Brep>> {
        Ok(
            ExtrudeProfile::new(&extrusion.profile, extrusion.direction, self.options.tolerance)
                .with_caps(extrusion.capped)
                .execute(),
        )
    }

    /// Vertices closer than the tolerance are welded first, so a mesh whose
    /// faces carry their own copies of shared corners still counts as closed.
    fn mesh_is_closed(&self, mesh: &Mesh) -> EngineResult<bool> {
        let welded = weld(&mesh.vertices, self.options.tolerance);
        let mut edges = EdgeMap::new();
        let mut indices = Vec::with_capacity(4);
        for face in &mesh.faces {
            indices.clear();
            for &i in face.indices() {
                let i = i as usize;
                let &canonical = welded.get(i).ok_or(EngineError::InvalidIndex {
                    index: i,
                    len: mesh.vertices.len(),
                })?;
                indices.push(canonical);
            }
            if spans_area(&indices) {
                edges.add_loop(&indices);
            }
        }
        Ok(edges.is_closed())
    }

    fn mesh_volume(&self, mesh: &Mesh) -> EngineResult<f64> {
        let mut volume6 = 0.0;
        let mut points = Vec::with_capacity(4);
        for face in &mesh.faces {
            points.clear();
            for &i in face.indices() {
                let i = i as usize;
                let point = mesh.vertices.get(i).ok_or(EngineError::InvalidIndex {
                    index: i,
                    len: mesh.vertices.len(),
                })?;
                points.push(*point);
            }
            volume6 += signed_cone_volume6(&points);
        }
        Ok(volume6.abs() / 6.0)
    }

    fn to_brep(&self, other: &OtherGeometry) -> EngineResult<Option<Brep>> {
        Ok(match other {
            OtherGeometry::Box { min, max } => self.box_brep(*min, *max),
            OtherGeometry::Surface { boundary } => surface_brep(boundary),
            OtherGeometry::Curve(_) | OtherGeometry::Point(_) => None,
        })
    }
}

/// A single-face brep over a planar boundary, or `None` if it encloses no area.
fn surface_brep(boundary: &[Point3]) -> Option<Brep> {
    newell_normal(boundary)?;
    let mut brep = Brep::new();
    let face = boundary.iter().map(|p| brep.add_vertex(*p)).collect();
    brep.add_face(face);
    Some(brep)
}

fn check_indices(indices: &[usize], vertex_count: usize) -> EngineResult<()> {
    match indices.iter().find(|&&i| i >= vertex_count) {
        Some(&index) => Err(EngineError::InvalidIndex {
            index,
            len: vertex_count,
        }),
        None => Ok(()),
    }
}

/// A face with fewer than three distinct vertices bounds nothing and shares
/// no edges.
fn spans_area(indices: &[usize]) -> bool {
    let mut distinct = indices.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.len() >= 3
}
