//! Geometry services consumed by the volume resolver.
//!
//! A host application normally owns the geometry kernel; [`GeometryEngine`]
//! is the seam where it plugs in. [`PolyhedralEngine`] is a self-contained
//! implementation for planar-faced geometry.

mod edges;
mod extrude;
mod polyhedral;
mod weld;

pub use polyhedral::PolyhedralEngine;

use crate::error::EngineError;
use crate::geometry::{Brep, Extrusion, Mesh, OtherGeometry};
use crate::math::TOLERANCE;

/// Result type returned by [`GeometryEngine`] methods.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Solidity predicates, conversions and volume computation.
///
/// Implementations must not retain references to the geometry they are
/// handed; every call borrows it only for its own duration.
pub trait GeometryEngine {
    /// Returns `true` if the brep fully encloses a volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the brep is malformed.
    fn is_solid(&self, brep: &Brep) -> EngineResult<bool>;

    /// Computes the enclosed volume of a solid brep.
    ///
    /// # Errors
    ///
    /// Returns an error if the brep is malformed.
    fn brep_volume(&self, brep: &Brep) -> EngineResult<f64>;

    /// Converts an extrusion to a brep, or `None` if it has no valid shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion itself fails.
    fn extrusion_to_brep(&self, extrusion: &Extrusion) -> EngineResult<Option<Brep>>;

    /// Returns `true` if the mesh has no naked edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is malformed.
    fn mesh_is_closed(&self, mesh: &Mesh) -> EngineResult<bool>;

    /// Computes the enclosed volume of a closed mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is malformed.
    fn mesh_volume(&self, mesh: &Mesh) -> EngineResult<f64>;

    /// Converts any other object to a brep, or `None` if it has no brep form.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion itself fails.
    fn to_brep(&self, other: &OtherGeometry) -> EngineResult<Option<Brep>>;
}

/// Options controlling a [`PolyhedralEngine`].
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Lengths and areas below this are treated as zero.
    pub tolerance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl EngineOptions {
    /// Sets the geometric tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
