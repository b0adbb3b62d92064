//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for table ingestion, prior construction and inversion
//!
//! # Re-exports
//!
//! [`CdfError`] is re-exported at this module level.

pub mod error;

pub use error::CdfError;
