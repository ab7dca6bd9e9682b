use thiserror::Error;

/// Invalid input for the placement engine.
/// Raised before any component is placed, a run never partially applies it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    // indices are 0-based, messages number sheets and components from 1
    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),

    #[error("tolerance must be a finite number, got {0}")]
    NonFiniteTolerance(f64),

    #[error(
        "sheet {} must have a positive length and width (length: {length}, width: {width})",
        .index + 1
    )]
    InvalidSheet { index: usize, length: f64, width: f64 },

    #[error(
        "component {} must have a positive length and width (length: {length}, width: {width})",
        .index + 1
    )]
    InvalidComponent { index: usize, length: f64, width: f64 },

    #[error("{n_components} component(s) to place but no sheets were provided")]
    NoSheets { n_components: usize },
}
