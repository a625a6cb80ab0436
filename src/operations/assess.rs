use crate::engine::GeometryEngine;
use crate::error::{ImpactError, Result, VolumeError};
use crate::geometry::Geometry;
use crate::materials::MaterialTable;
use crate::units::UnitSystem;

use super::{estimate_impact, resolve_volume, ImpactEstimate, VolumeMeasurement};

/// Volume and impact for one selection and material choice.
///
/// An impact exists exactly when the volume was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    outcome: std::result::Result<(VolumeMeasurement, Estimate), VolumeError>,
}

type Estimate = std::result::Result<ImpactEstimate, ImpactError>;

impl Assessment {
    /// Result of resolving the selection.
    ///
    /// # Errors
    ///
    /// Returns the reason the selection could not be measured.
    pub fn volume(&self) -> std::result::Result<&VolumeMeasurement, &VolumeError> {
        self.outcome.as_ref().map(|(volume, _)| volume)
    }

    /// Result of the estimate, or `None` when there was no volume to scale.
    #[must_use]
    pub fn impact(&self) -> Option<&std::result::Result<ImpactEstimate, ImpactError>> {
        self.outcome.as_ref().ok().map(|(_, impact)| impact)
    }

    /// One-line status message with values rounded to three decimals.
    #[must_use]
    pub fn status(&self) -> String {
        match &self.outcome {
            Err(err) => format!("Volume: {err}"),
            Ok((volume, Ok(impact))) => format!("Volume: {volume:.3} | Impact: {impact:.3}"),
            Ok((volume, Err(err))) => format!("Volume: {volume:.3} | Impact: {err}"),
        }
    }

    /// Collapses the assessment into the estimate or the first error.
    ///
    /// # Errors
    ///
    /// Returns the volume error if the selection could not be measured,
    /// otherwise the impact error if the estimate failed.
    pub fn into_result(self) -> Result<ImpactEstimate> {
        let (_, impact) = self.outcome?;
        Ok(impact?)
    }
}

/// Resolves the selection's volume and, if that succeeds, its impact.
pub fn assess<E>(
    selection: &[&Geometry],
    units: UnitSystem,
    material: Option<&str>,
    table: &MaterialTable,
    engine: &E,
) -> Assessment
where
    E: GeometryEngine + ?Sized,
{
    let outcome = resolve_volume(selection, units, engine).map(|volume| {
        let impact = estimate_impact(&volume, material, table);
        (volume, impact)
    });
    Assessment { outcome }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::PolyhedralEngine;
    use crate::error::LcavolError;
    use crate::geometry::OtherGeometry;
    use crate::materials::MaterialRecord;
    use crate::math::Point3;

    fn table() -> MaterialTable {
        [MaterialRecord::new("Concrete", 1.0, "m3", 100.0)]
            .into_iter()
            .collect()
    }

    fn unit_box(size: f64) -> Geometry {
        OtherGeometry::Box {
            min: Point3::origin(),
            max: Point3::new(size, size, size),
        }
        .into()
    }

    fn run(selection: &[&Geometry], material: Option<&str>) -> Assessment {
        assess(
            selection,
            UnitSystem::Meters,
            material,
            &table(),
            &PolyhedralEngine::new(),
        )
    }

    #[test]
    fn full_assessment() {
        let cube = unit_box(2.0);
        let assessment = run(&[&cube], Some("Concrete"));
        assert_eq!(
            assessment.status(),
            "Volume: 8.000 m\u{b3} | Impact: 800.000 (Concrete, m3)"
        );
        let estimate = assessment.into_result().unwrap();
        assert!((estimate.value - 800.0).abs() < 1e-9);
    }

    #[test]
    fn impact_accompanies_every_resolved_volume() {
        let cube = unit_box(1.0);
        let point: Geometry = OtherGeometry::Point(Point3::origin()).into();
        for (selection, material) in [
            (vec![&cube], Some("Concrete")),
            (vec![&cube], Some("Unobtainium")),
            (vec![&point], Some("Concrete")),
            (vec![], None),
        ] {
            let assessment = run(&selection, material);
            assert_eq!(assessment.volume().is_ok(), assessment.impact().is_some());
        }
    }

    #[test]
    fn volume_failure_skips_the_estimate() {
        let assessment = run(&[], Some("Concrete"));
        assert_eq!(assessment.volume(), Err(&VolumeError::NoSelection));
        assert!(assessment.impact().is_none());
        assert_eq!(assessment.status(), "Volume: no object selected");
        assert!(matches!(
            assessment.into_result(),
            Err(LcavolError::Volume(VolumeError::NoSelection))
        ));
    }

    #[test]
    fn material_failure_keeps_the_volume() {
        let cube = unit_box(1.0);
        let assessment = run(&[&cube], None);
        assert!(assessment.volume().is_ok());
        assert_eq!(assessment.impact(), Some(&Err(ImpactError::NoMaterial)));
        assert_eq!(
            assessment.status(),
            "Volume: 1.000 m\u{b3} | Impact: no material selected"
        );
        assert!(matches!(
            assessment.into_result(),
            Err(LcavolError::Impact(ImpactError::NoMaterial))
        ));
    }
}
