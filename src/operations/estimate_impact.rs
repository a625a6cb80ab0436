use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ImpactError;
use crate::materials::MaterialTable;

use super::VolumeMeasurement;

/// Estimated LCA impact of a measured volume of one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    /// `volume / reference_quantity * lca_coefficient`, unrounded.
    pub value: f64,
    /// Name of the material the estimate was computed for.
    pub material: String,
    /// Reference unit of the material record.
    pub reference_unit: String,
}

impl fmt::Display for ImpactEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        write!(f, " ({}, {})", self.material, self.reference_unit)
    }
}

/// Scales a material's LCA coefficient by a measured volume.
///
/// The volume is divided by the record's reference quantity as-is; the
/// record's reference unit is carried on the result so callers can check it
/// against the volume's units.
///
/// # Errors
///
/// - [`ImpactError::NoMaterial`] if `material` is `None` or blank.
/// - [`ImpactError::UnknownMaterial`] if the table has no such material.
/// - [`ImpactError::InvalidReference`] if the record's reference quantity
///   is not positive.
pub fn estimate_impact(
    volume: &VolumeMeasurement,
    material: Option<&str>,
    table: &MaterialTable,
) -> Result<ImpactEstimate, ImpactError> {
    let name = material
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ImpactError::NoMaterial)?;

    let record = table
        .get(name)
        .ok_or_else(|| ImpactError::UnknownMaterial(name.to_string()))?;

    let quantity = record.reference_quantity;
    if quantity.is_nan() || quantity <= 0.0 {
        return Err(ImpactError::InvalidReference {
            name: record.name.clone(),
            quantity,
        });
    }

    Ok(ImpactEstimate {
        value: volume.value / quantity * record.lca_coefficient,
        material: record.name.clone(),
        reference_unit: record.reference_unit.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::materials::MaterialRecord;
    use crate::units::UnitSystem;
    use approx::assert_relative_eq;

    fn table() -> MaterialTable {
        [
            MaterialRecord::new("Concrete", 1.0, "m3", 100.0),
            MaterialRecord::new("Timber", 0.5, "m3", 20.0),
            MaterialRecord::new("Zero", 0.0, "m3", 1.0),
            MaterialRecord::new("Negative", -2.0, "m3", 1.0),
            MaterialRecord::new("Nan", f64::NAN, "m3", 1.0),
        ]
        .into_iter()
        .collect()
    }

    fn volume(value: f64) -> VolumeMeasurement {
        VolumeMeasurement::new(value, UnitSystem::Meters)
    }

    #[test]
    fn concrete_end_to_end() {
        let estimate = estimate_impact(&volume(2.5), Some("Concrete"), &table()).unwrap();
        assert_relative_eq!(estimate.value, 250.0);
        assert_eq!(estimate.material, "Concrete");
        assert_eq!(estimate.reference_unit, "m3");
    }

    #[test]
    fn reference_quantity_scales_the_volume() {
        let estimate = estimate_impact(&volume(2.0), Some("Timber"), &table()).unwrap();
        assert_relative_eq!(estimate.value, 80.0);
    }

    #[test]
    fn no_rounding_is_applied() {
        let estimate = estimate_impact(&volume(1.0 / 3.0), Some("Concrete"), &table()).unwrap();
        assert_relative_eq!(estimate.value, 100.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_material() {
        assert_eq!(
            estimate_impact(&volume(10.0), None, &table()),
            Err(ImpactError::NoMaterial)
        );
        assert_eq!(
            estimate_impact(&volume(10.0), Some(""), &table()),
            Err(ImpactError::NoMaterial)
        );
        assert_eq!(
            estimate_impact(&volume(10.0), Some("   "), &table()),
            Err(ImpactError::NoMaterial)
        );
    }

    #[test]
    fn unknown_material() {
        assert_eq!(
            estimate_impact(&volume(10.0), Some("Unobtainium"), &table()),
            Err(ImpactError::UnknownMaterial("Unobtainium".into()))
        );
    }

    #[test]
    fn material_name_is_trimmed() {
        assert!(estimate_impact(&volume(1.0), Some(" Concrete "), &table()).is_ok());
    }

    #[test]
    fn non_positive_reference_is_invalid_regardless_of_volume() {
        for v in [0.0, 1.0, 1e6] {
            for name in ["Zero", "Negative", "Nan"] {
                let result = estimate_impact(&volume(v), Some(name), &table());
                assert!(
                    matches!(result, Err(ImpactError::InvalidReference { .. })),
                    "{name} at {v}: {result:?}"
                );
            }
        }
    }

    #[test]
    fn display_shows_material_and_unit() {
        let estimate = estimate_impact(&volume(2.5), Some("Concrete"), &table()).unwrap();
        assert_eq!(format!("{estimate:.1}"), "250.0 (Concrete, m3)");
    }
}
