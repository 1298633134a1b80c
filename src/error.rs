//! Error types for catalog construction and target validation.
//!
//! The solver itself is total; these only cover building a catalog and
//! screening caller input before a solve.

use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No sizes were supplied.
    #[error("catalog must contain at least one size")]
    Empty,

    /// A size is NaN, infinite, zero or negative.
    #[error("invalid size {0}: sizes must be positive")]
    NonPositive(f64),

    /// A size rounds to zero units at the configured scale.
    #[error("size {size} is smaller than one unit at scale {scale}")]
    BelowResolution { size: f64, scale: u32 },

    /// The same size appears more than once.
    #[error("duplicate size {0}")]
    Duplicate(f64),

    /// A size token could not be parsed.
    #[error("invalid size '{0}'")]
    Parse(String),

    /// Units-per-inch must be non-zero.
    #[error("unit scale must be non-zero")]
    ZeroScale,

    /// Units-per-inch above the supported resolution.
    #[error("unit scale {scale} exceeds the maximum of {max}")]
    ScaleTooLarge { scale: u32, max: u32 },
}

/// Errors for a target width supplied by a caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("target must be a number")]
    NotANumber,

    #[error("target must be greater than zero, got {0}")]
    NonPositive(f64),

    #[error("target {target} exceeds the maximum of {max} inches")]
    TooLarge { target: f64, max: f64 },
}
