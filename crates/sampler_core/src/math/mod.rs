//! Numerical helpers used by the analytic priors.
//!
//! - [`special`]: closed-form approximations of the inverse error function
//!   and the normal quantile, generic over `T: num_traits::Float`

pub mod special;
