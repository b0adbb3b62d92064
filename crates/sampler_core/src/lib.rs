//! # sampler_core: Inverse-Transform Sampling Foundation
//!
//! Given a cumulative distribution function, either tabulated numeric data
//! or a closed-form analytic prior, sampler_core builds a function
//! `g(u)` mapping a uniform variate `u ∈ [0, 1]` to a sample from the
//! target distribution.
//!
//! - Error types: `CdfError` (`types::error`)
//! - Special functions: approximate `erf⁻¹` and normal quantile (`math::special`)
//! - Sampling pipeline: table ingestion, numeric inversion, analytic priors,
//!   construction sources and the `InverseCdf` query (`sampling`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::sampling::{CdfSource, InverseCdf, Prior};
//!
//! // Analytic prior selected by name
//! let source = CdfSource::analytic("Log", Some(1.0), Some(100.0)).unwrap();
//! let g = source.build().unwrap();
//! assert_eq!(g.inverse_cdf(0.0), 1.0);
//! assert_eq!(g.inverse_cdf(1.0), 100.0);
//!
//! // Legacy two-point form
//! let flat = InverseCdf::from_bounds(3.0, 5.0);
//! assert_eq!(flat.inverse_cdf(0.5), 4.0);
//!
//! // Out-of-range u is clamped
//! assert_eq!(flat.inverse_cdf(-5.0), 3.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `Prior`, `CdfSource`, `InverseCdf`,
//!   `LoaderConfig` and `CdfError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod sampling;
pub mod types;
