use std::fmt;

use serde::{Deserialize, Serialize};

/// Linear unit system of a host document.
///
/// Volumes are reported in the cube of this unit. The unit only affects
/// presentation; no computation in this crate converts between units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Millimeters,
    Centimeters,
    Meters,
    Inches,
    Feet,
    Unitless,
}

impl UnitSystem {
    /// Short display suffix, empty for [`UnitSystem::Unitless`].
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Unitless => "",
        }
    }

    /// Length of one unit in meters, or `None` for [`UnitSystem::Unitless`].
    #[must_use]
    pub fn meters_per_unit(self) -> Option<f64> {
        match self {
            Self::Millimeters => Some(0.001),
            Self::Centimeters => Some(0.01),
            Self::Meters => Some(1.0),
            Self::Inches => Some(0.0254),
            Self::Feet => Some(0.3048),
            Self::Unitless => None,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_millimeters() {
        assert_eq!(UnitSystem::default(), UnitSystem::Millimeters);
    }

    #[test]
    fn unitless_has_no_scale() {
        assert_eq!(UnitSystem::Unitless.abbreviation(), "");
        assert!(UnitSystem::Unitless.meters_per_unit().is_none());
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&UnitSystem::Feet).unwrap();
        assert_eq!(json, "\"Feet\"");
    }
}
