//! Inverse-transform sampling pipeline.
//!
//! Input acquisition → tabulated-CDF or analytic construction → inversion
//! → query.
//!
//! ## Components
//!
//! - [`CdfTable`]: two-column text ingestion with validation
//! - [`invert_uniform_cdf`]: single-sweep numeric inversion on a uniform grid
//! - [`Prior`] / [`PriorKind`]: Flat, Gaussian, Log and SolidAngle priors
//! - [`CdfSource`]: tagged union of construction modes
//! - [`InverseCdf`]: the immutable, queryable `g(u)` table
//! - [`LoaderConfig`]: strictness of table ingestion
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sampler_core::sampling::{CdfTable, InverseCdf};
//!
//! // cdf(x) = (x/2)² on [0, 2], tabulated at 5 points
//! let table: CdfTable = "0.0 0.0\n0.5 0.0625\n1.0 0.25\n1.5 0.5625\n2.0 1.0\n"
//!     .parse()
//!     .unwrap();
//! let g = InverseCdf::from_table(&table);
//! assert_eq!(g.inverse_cdf(0.0), 0.0);
//! assert_eq!(g.inverse_cdf(1.0), 2.0);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let draws = g.sample_n(&mut rng, 8);
//! assert!(draws.iter().all(|x| (0.0..=2.0).contains(x)));
//! ```

mod config;
mod inverse_cdf;
mod inversion;
mod prior;
mod source;
mod table;

pub use config::LoaderConfig;
pub use inverse_cdf::InverseCdf;
pub use inversion::invert_uniform_cdf;
pub use prior::{
    Prior, PriorKind, FLAT_POINTS, GAUSSIAN_POINTS, GAUSSIAN_TRUNCATION, LOG_POINTS,
    SOLID_ANGLE_POINTS,
};
pub use source::CdfSource;
pub use table::CdfTable;
