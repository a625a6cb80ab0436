use thiserror::Error;

/// Top-level error type for the lcavol crate.
#[derive(Debug, Error)]
pub enum LcavolError {
    #[error(transparent)]
    Volume(#[from] VolumeError),

    #[error(transparent)]
    Impact(#[from] ImpactError),
}

/// Reasons a selection could not be resolved to a volume.
///
/// Each message is short enough to be shown as a panel status line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VolumeError {
    #[error("no object selected")]
    NoSelection,

    #[error("select a single object")]
    Ambiguous,

    #[error("object is not closed")]
    NotClosed,

    #[error("object cannot be measured as a solid")]
    Unsupported,

    #[error("volume computation failed: {0}")]
    ComputeFailed(String),
}

/// Reasons an impact estimate could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("no material selected")]
    NoMaterial,

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("material {name} has invalid reference quantity {quantity}")]
    InvalidReference { name: String, quantity: f64 },
}

/// Faults raised by a geometry engine.
///
/// The resolver reports these as [`VolumeError::ComputeFailed`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("vertex index {index} out of range for {len} vertices")]
    InvalidIndex { index: usize, len: usize },

    #[error("engine failure: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`LcavolError`].
pub type Result<T> = std::result::Result<T, LcavolError>;
