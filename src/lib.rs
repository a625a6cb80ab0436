//! Volume and material life-cycle impact for CAD selections.
//!
//! [`resolve_volume`] turns a selection of geometry into the volume of a
//! single closed solid, [`MaterialTable`] holds per-material LCA reference
//! data, and [`estimate_impact`] scales a material's coefficient by a
//! measured volume. All three are pure functions of their arguments.

pub mod document;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod materials;
pub mod math;
pub mod operations;
pub mod units;

pub use document::{Document, ObjectId};
pub use engine::{EngineOptions, GeometryEngine, PolyhedralEngine};
pub use error::{EngineError, ImpactError, LcavolError, Result, VolumeError};
pub use geometry::Geometry;
pub use materials::{MaterialRecord, MaterialTable};
pub use operations::{
    assess, estimate_impact, resolve_volume, Assessment, ImpactEstimate, VolumeMeasurement,
};
pub use units::UnitSystem;
