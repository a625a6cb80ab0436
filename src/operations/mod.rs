mod assess;
mod estimate_impact;
mod resolve_volume;

pub use assess::{assess, Assessment};
pub use estimate_impact::{estimate_impact, ImpactEstimate};
pub use resolve_volume::{resolve_volume, VolumeMeasurement};
