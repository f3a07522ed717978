//! Error types for bwlabel-region

use thiserror::Error;

/// Errors that can occur during labeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bwlabel_core::Error),

    /// A label index outside `1..=len` was referenced.
    ///
    /// The labeling stages only ever pass labels they created, so this
    /// signals a defect in the caller rather than bad input data.
    #[error("invalid label reference: {label} not in 1..={len}")]
    InvalidLabelReference { label: u32, len: usize },

    /// A resolved component received no pixels during aggregation
    #[error("component {0} has no pixels")]
    EmptyComponent(u32),

    /// The equivalence table cannot allocate another label
    #[error("label overflow: more than u32::MAX provisional labels")]
    LabelOverflow,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for labeling operations
pub type RegionResult<T> = Result<T, RegionError>;
