//! Error types for structured error handling.
//!
//! This module provides:
//! - `CdfError`: Errors from CDF table ingestion, prior construction and inversion

use thiserror::Error;

/// Errors raised while building an inverse CDF.
///
/// Every failure in the sampling pipeline is local and non-fatal: callers
/// receive one of these variants instead of a panic or a process exit.
/// Queries on an already-built [`InverseCdf`](crate::sampling::InverseCdf)
/// never fail, so this type only appears on construction paths.
///
/// # Variants
/// - `Io`: The CDF resource could not be read
/// - `EmptyTable`: The CDF resource contained no samples
/// - `Parse`: A line of the CDF resource is not a numeric `x y` pair
/// - `InsufficientData`: Too few samples to define a grid
/// - `NonMonotonic`: CDF values decrease somewhere
/// - `NonUniformSpacing`: x-values are not evenly spaced (strict loading only)
/// - `UnknownPriorKind`: Unrecognised analytic prior name
/// - `MissingParameter`: An analytic prior was selected without its parameters
/// - `InvalidParameter`: An analytic prior parameter is outside its domain
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use sampler_core::types::CdfError;
///
/// let err = CdfError::UnknownPriorKind("Cauchy".to_string());
/// assert_eq!(format!("{}", err), "Unknown prior kind: Cauchy");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CdfError {
    /// The CDF resource could not be opened or read.
    #[error("Failed to read CDF table '{path}': {message}")]
    Io {
        /// Path of the resource
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// The CDF resource held no samples.
    #[error("CDF table '{path}' contains no samples")]
    EmptyTable {
        /// Path (or label) of the resource
        path: String,
    },

    /// A line could not be parsed as an `x y` pair.
    #[error("Malformed CDF line {line}: '{content}'")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending line content
        content: String,
    },

    /// Insufficient data points to build a grid.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// CDF values decrease at the given sample.
    #[error("CDF is not monotonic at index {index}")]
    NonMonotonic {
        /// Index of the first sample smaller than its predecessor
        index: usize,
    },

    /// x-values are not evenly spaced at the given sample.
    #[error("CDF x-values are not uniformly spaced at index {index}")]
    NonUniformSpacing {
        /// Index of the first sample off the uniform grid
        index: usize,
    },

    /// Unrecognised analytic prior name.
    #[error("Unknown prior kind: {0}")]
    UnknownPriorKind(String),

    /// An analytic prior needs a parameter that was not supplied.
    #[error("Prior '{kind}' requires parameter '{name}'")]
    MissingParameter {
        /// Prior kind name
        kind: String,
        /// Parameter name
        name: String,
    },

    /// An analytic prior parameter is outside its domain.
    #[error("Invalid prior parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
