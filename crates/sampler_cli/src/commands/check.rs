//! Check command implementation
//!
//! Builds every analytic prior with reference parameters and verifies the
//! boundary and monotonicity contract of the query.

use sampler_core::sampling::{InverseCdf, Prior};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Number of u-steps used for the monotonicity scan.
const SCAN_STEPS: usize = 1024;

/// One row of the check report.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRow {
    /// Prior under test
    pub prior: Prior,
    /// Table size
    pub points: usize,
    /// g(0)
    pub at_zero: f64,
    /// g(0.5)
    pub at_half: f64,
    /// g(1)
    pub at_one: f64,
    /// Boundary exactness and monotonicity held
    pub passed: bool,
}

/// Reference priors checked by the command.
pub fn reference_priors() -> [Prior; 4] {
    [
        Prior::Flat { min: 3.0, max: 5.0 },
        Prior::Gaussian {
            mean: 0.0,
            std_dev: 1.0,
        },
        Prior::Log {
            min: 1.0,
            max: 100.0,
        },
        Prior::SolidAngle,
    ]
}

/// Check one prior.
pub fn check_prior(prior: &Prior) -> Result<CheckRow> {
    let g = InverseCdf::from_prior(prior)?;
    let (xmin, xmax) = prior.bounds();

    let boundaries_exact = g.inverse_cdf(0.0) == xmin
        && g.inverse_cdf(1.0) == xmax
        && g.inverse_cdf(-5.0) == xmin
        && g.inverse_cdf(5.0) == xmax;
    let monotonic = g
        .grid(SCAN_STEPS)
        .windows(2)
        .all(|pair| pair[0].1 <= pair[1].1);

    Ok(CheckRow {
        prior: *prior,
        points: g.len(),
        at_zero: g.inverse_cdf(0.0),
        at_half: g.inverse_cdf(0.5),
        at_one: g.inverse_cdf(1.0),
        passed: boundaries_exact && monotonic,
    })
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking analytic priors...");

    println!(
        "{:<22} {:>6} {:>12} {:>12} {:>12} {:>6}",
        "Prior", "N", "g(0)", "g(0.5)", "g(1)", "OK"
    );

    let mut rows = Vec::new();
    for prior in reference_priors() {
        let row = check_prior(&prior)?;
        println!(
            "{:<22} {:>6} {:>12.6} {:>12.6} {:>12.6} {:>6}",
            row.prior.to_string(),
            row.points,
            row.at_zero,
            row.at_half,
            row.at_one,
            if row.passed { "yes" } else { "NO" }
        );
        rows.push(row);
    }

    verdict(&rows)
}

/// Fold check rows into a single outcome.
pub fn verdict(rows: &[CheckRow]) -> Result<()> {
    let failures: Vec<String> = rows
        .iter()
        .filter(|row| !row.passed)
        .map(|row| {
            warn!("Check failed for {}", row.prior);
            row.prior.to_string()
        })
        .collect();

    if failures.is_empty() {
        info!("All checks passed");
        Ok(())
    } else {
        Err(CliError::CheckFailed(format!(
            "Checks failed for: {}",
            failures.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_priors_pass() {
        for prior in reference_priors() {
            let row = check_prior(&prior).unwrap();
            assert!(row.passed, "{:?}", row);
        }
    }

    #[test]
    fn test_flat_row() {
        let row = check_prior(&Prior::Flat { min: 3.0, max: 5.0 }).unwrap();
        assert_eq!(row.points, 2);
        assert_eq!(row.at_zero, 3.0);
        assert_eq!(row.at_half, 4.0);
        assert_eq!(row.at_one, 5.0);
    }

    #[test]
    fn test_failed_row_is_reported_as_check_failure() {
        let mut row = check_prior(&Prior::SolidAngle).unwrap();
        assert!(verdict(std::slice::from_ref(&row)).is_ok());

        row.passed = false;
        match verdict(&[row]) {
            Err(CliError::CheckFailed(msg)) => assert!(msg.contains("SolidAngle")),
            other => panic!("Expected CheckFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_run() {
        assert!(run().is_ok());
    }
}
