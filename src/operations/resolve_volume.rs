use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::engine::{EngineResult, GeometryEngine};
use crate::error::VolumeError;
use crate::geometry::{Brep, Geometry};
use crate::units::UnitSystem;

/// A measured volume in the cube of a document's linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeMeasurement {
    /// Non-negative volume.
    pub value: f64,
    /// Linear unit the volume is expressed in (cubed).
    pub units: UnitSystem,
}

impl VolumeMeasurement {
    /// Creates a new measurement.
    #[must_use]
    pub fn new(value: f64, units: UnitSystem) -> Self {
        Self { value, units }
    }

    /// Volume in cubic meters, or `None` for unitless documents.
    #[must_use]
    pub fn cubic_meters(&self) -> Option<f64> {
        self.units.meters_per_unit().map(|m| self.value * m.powi(3))
    }
}

impl fmt::Display for VolumeMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        match self.units {
            UnitSystem::Unitless => Ok(()),
            units => write!(f, " {units}\u{b3}"),
        }
    }
}

/// Outcome of the dispatch, before engine faults are folded into
/// [`VolumeError::ComputeFailed`].
enum Dispatch {
    Volume(f64),
    Rejected(VolumeError),
}

/// Resolves a selection to the volume of its single closed solid.
///
/// Breps must be solid. Extrusions are converted to breps first and held to
/// the same requirement. Meshes must be closed. Anything else must convert
/// to a solid brep or it is [`VolumeError::Unsupported`].
///
/// The geometry is only borrowed for the duration of the call.
///
/// # Errors
///
/// - [`VolumeError::NoSelection`] if `selection` is empty.
/// - [`VolumeError::Ambiguous`] if it holds more than one object.
/// - [`VolumeError::NotClosed`] if the object does not enclose a volume.
/// - [`VolumeError::Unsupported`] if the object has no solid form.
/// - [`VolumeError::ComputeFailed`] if the engine errors, panics, or
///   reports a non-finite volume.
pub fn resolve_volume<E>(
    selection: &[&Geometry],
    units: UnitSystem,
    engine: &E,
) -> Result<VolumeMeasurement, VolumeError>
where
    E: GeometryEngine + ?Sized,
{
    let geometry = match selection {
        [] => return Err(VolumeError::NoSelection),
        [geometry] => *geometry,
        _ => return Err(VolumeError::Ambiguous),
    };

    let kind = geometry.kind();
    let _span = tracing::debug_span!("resolve_volume", %kind).entered();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| dispatch(geometry, engine)));
    let value = match outcome {
        Ok(Ok(Dispatch::Volume(value))) => value,
        Ok(Ok(Dispatch::Rejected(err))) => {
            tracing::debug!(%err, "geometry rejected");
            return Err(err);
        }
        Ok(Err(err)) => {
            tracing::warn!(%err, "geometry engine failed");
            return Err(VolumeError::ComputeFailed(err.to_string()));
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::warn!(%reason, "geometry engine panicked");
            return Err(VolumeError::ComputeFailed(reason));
        }
    };

    if !value.is_finite() {
        tracing::warn!(value, "geometry engine returned a non-finite volume");
        return Err(VolumeError::ComputeFailed(format!(
            "non-finite volume {value}"
        )));
    }

    Ok(VolumeMeasurement::new(value.abs(), units))
}

fn dispatch<E>(geometry: &Geometry, engine: &E) -> EngineResult<Dispatch>
where
    E: GeometryEngine + ?Sized,
{
    match geometry {
        Geometry::Brep(brep) => solid_volume(brep, engine, VolumeError::NotClosed),
        Geometry::Extrusion(extrusion) => match engine.extrusion_to_brep(extrusion)? {
            Some(brep) => solid_volume(&brep, engine, VolumeError::NotClosed),
            None => Ok(Dispatch::Rejected(VolumeError::Unsupported)),
        },
        Geometry::Mesh(mesh) => {
            if engine.mesh_is_closed(mesh)? {
                Ok(Dispatch::Volume(engine.mesh_volume(mesh)?))
            } else {
                Ok(Dispatch::Rejected(VolumeError::NotClosed))
            }
        }
        Geometry::Other(other) => match engine.to_brep(other)? {
            Some(brep) => solid_volume(&brep, engine, VolumeError::Unsupported),
            None => Ok(Dispatch::Rejected(VolumeError::Unsupported)),
        },
    }
}

/// Measures a brep if it is solid, otherwise rejects it with `not_solid`.
fn solid_volume<E>(brep: &Brep, engine: &E, not_solid: VolumeError) -> EngineResult<Dispatch>
where
    E: GeometryEngine + ?Sized,
{
    if engine.is_solid(brep)? {
        Ok(Dispatch::Volume(engine.brep_volume(brep)?))
    } else {
        Ok(Dispatch::Rejected(not_solid))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "geometry engine panicked".to_string()
    }
}
