//! Queryable inverse CDF g(u).

use std::path::Path;

use rand::distributions::Distribution;
use rand::Rng;
use tracing::{debug, warn};

use super::{invert_uniform_cdf, CdfTable, LoaderConfig, Prior};
use crate::types::CdfError;

/// Tabulated inverse CDF `g(u)` for inverse-transform sampling.
///
/// Holds `inverse_cdf[0..N-1]` where entry `i` is the x-value at which the
/// target CDF reaches `i/(N-1)`, plus the domain bounds `xmin ≤ xmax`.
/// Built once and never mutated, so an instance can be shared across
/// threads and queried concurrently.
///
/// # Construction
///
/// - [`InverseCdf::from_file`] / [`InverseCdf::from_table`]: numeric inversion of tabulated data
/// - [`InverseCdf::from_prior`]: closed-form analytic prior
/// - [`InverseCdf::from_bounds`]: two-point flat prior
/// - [`CdfSource::build`](super::CdfSource::build): any of the above by tag
///
/// # Example
///
/// ```
/// use sampler_core::sampling::InverseCdf;
///
/// let g = InverseCdf::from_bounds(3.0, 5.0);
/// assert_eq!(g.inverse_cdf(0.5), 4.0);
/// assert_eq!(g.inverse_cdf(-5.0), 3.0);
/// assert_eq!(g.inverse_cdf(5.0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseCdf {
    xmin: f64,
    xmax: f64,
    table: Vec<f64>,
}

impl InverseCdf {
    /// Read, validate and invert a two-column CDF file.
    ///
    /// # Errors
    ///
    /// Any error of [`CdfTable::from_path`].
    pub fn from_file(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self, CdfError> {
        let table = CdfTable::from_path(path, config)?;
        Ok(Self::from_table(&table))
    }

    /// Read a CDF file, returning an invalid instance on failure.
    ///
    /// Mirrors the success-flag style of construction: check
    /// [`is_valid`](Self::is_valid) before trusting query results. The
    /// failure is logged at `warn` level.
    pub fn from_file_or_invalid(path: impl AsRef<Path>, config: &LoaderConfig) -> Self {
        let path = path.as_ref();
        Self::from_file(path, config).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "CDF construction failed");
            Self::invalid()
        })
    }

    /// Invert a validated CDF table.
    pub fn from_table(table: &CdfTable) -> Self {
        let (xmin, xmax) = (table.xmin(), table.xmax());
        let inverse = invert_uniform_cdf(xmin, xmax, table.cdf());
        debug!(samples = inverse.len(), xmin, xmax, "inverted tabulated CDF");
        Self {
            xmin,
            xmax,
            table: inverse,
        }
    }

    /// Build the inverse CDF of an analytic prior.
    ///
    /// # Errors
    ///
    /// Any error of [`Prior::validate`].
    pub fn from_prior(prior: &Prior) -> Result<Self, CdfError> {
        prior.validate()?;
        Ok(Self::tabulate(prior))
    }

    /// Flat distribution between two bounds (given in either order).
    ///
    /// The legacy two-point form; bounds are not validated.
    pub fn from_bounds(min: f64, max: f64) -> Self {
        Self::tabulate(&Prior::Flat { min, max })
    }

    fn tabulate(prior: &Prior) -> Self {
        let (xmin, xmax) = prior.bounds();
        let table = prior.inverse_table();
        debug!(%prior, samples = table.len(), "tabulated analytic prior");
        Self { xmin, xmax, table }
    }

    /// Assemble an instance from precomputed parts.
    ///
    /// # Errors
    ///
    /// * `CdfError::InsufficientData` - Fewer than 2 table entries
    /// * `CdfError::InvalidInput` - `xmax < xmin`, or the table leaves the domain
    /// * `CdfError::NonMonotonic` - The table decreases at some index
    pub fn from_parts(xmin: f64, xmax: f64, table: Vec<f64>) -> Result<Self, CdfError> {
        if table.len() < 2 {
            return Err(CdfError::InsufficientData {
                got: table.len(),
                need: 2,
            });
        }
        if xmax < xmin {
            return Err(CdfError::InvalidInput(format!(
                "xmax ({}) must not be below xmin ({})",
                xmax, xmin
            )));
        }
        if let Some(x) = table.iter().find(|x| !(xmin..=xmax).contains(*x)) {
            return Err(CdfError::InvalidInput(format!(
                "table value {} outside domain [{}, {}]",
                x, xmin, xmax
            )));
        }
        if let Some(index) = (1..table.len()).find(|&i| table[i] < table[i - 1]) {
            return Err(CdfError::NonMonotonic { index });
        }
        Ok(Self { xmin, xmax, table })
    }

    /// An instance that failed construction: empty table, NaN bounds.
    ///
    /// Every query returns `NaN`.
    pub fn invalid() -> Self {
        Self {
            xmin: f64::NAN,
            xmax: f64::NAN,
            table: Vec::new(),
        }
    }

    /// Whether construction succeeded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.table.is_empty()
    }

    /// Evaluate `x = g(u)`.
    ///
    /// Total over all `f64`:
    /// - `u ≤ 0` returns `xmin` and `u ≥ 1` returns `xmax`. Out-of-range
    ///   inputs are clamped rather than rejected.
    /// - Otherwise `u` maps to the fractional index `(N-1)·u` and the two
    ///   neighbouring table entries are blended linearly.
    /// - `NaN` input, or an invalid instance, returns `NaN`.
    ///
    /// # Example
    ///
    /// ```
    /// use sampler_core::sampling::{InverseCdf, Prior};
    ///
    /// let g = InverseCdf::from_prior(&Prior::SolidAngle).unwrap();
    /// assert_eq!(g.inverse_cdf(0.0), 0.0);
    /// assert_eq!(g.inverse_cdf(1.0), std::f64::consts::PI);
    /// ```
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        if !self.is_valid() || u.is_nan() {
            return f64::NAN;
        }
        if u <= 0.0 {
            return self.xmin;
        }
        if u >= 1.0 {
            return self.xmax;
        }

        let last = self.table.len() - 1;
        let diu = last as f64 * u;
        let lower = (diu.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let delta = diu - lower as f64;

        // Same blend as a·(1-δ) + b·δ, but monotone in δ under rounding and
        // never past the next grid value.
        let (a, b) = (self.table[lower], self.table[upper]);
        (a + (b - a) * delta).min(b)
    }

    /// Evaluate `g` at each of `us`.
    pub fn inverse_cdf_many(&self, us: &[f64]) -> Vec<f64> {
        us.iter().map(|&u| self.inverse_cdf(u)).collect()
    }

    /// `(u, g(u))` pairs for `u = k/steps`, `k = 0..=steps`.
    ///
    /// `steps == 0` yields only the `u = 0` point.
    ///
    /// # Example
    ///
    /// ```
    /// use sampler_core::sampling::InverseCdf;
    ///
    /// let grid = InverseCdf::from_bounds(0.0, 2.0).grid(4);
    /// assert_eq!(grid.len(), 5);
    /// assert_eq!(grid[2], (0.5, 1.0));
    /// ```
    pub fn grid(&self, steps: usize) -> Vec<(f64, f64)> {
        let denom = steps.max(1) as f64;
        (0..=steps)
            .map(|k| {
                let u = k as f64 / denom;
                (u, self.inverse_cdf(u))
            })
            .collect()
    }

    /// Draw `n` samples from the target distribution.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Domain bounds `(xmin, xmax)`.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    /// x-value returned for `u ≤ 0`.
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// x-value returned for `u ≥ 1`.
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Number of table entries N.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True for an invalid instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The tabulated inverse `inverse_cdf[0..N-1]`.
    #[inline]
    pub fn table(&self) -> &[f64] {
        &self.table
    }
}

impl Default for InverseCdf {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Inverse-transform sampling: `u ~ U[0, 1)`, `x = g(u)`.
impl Distribution<f64> for InverseCdf {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inverse_cdf(rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    fn identity(n: usize) -> InverseCdf {
        let xs: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let table = CdfTable::from_samples(xs.clone(), xs, &LoaderConfig::default()).unwrap();
        InverseCdf::from_table(&table)
    }

    // ========================================
    // Query contract
    // ========================================

    #[test]
    fn test_flat_midpoint_is_exact() {
        let g = InverseCdf::from_bounds(3.0, 5.0);
        assert_eq!(g.len(), 2);
        assert_eq!(g.inverse_cdf(0.5), 4.0);
    }

    #[test]
    fn test_reversed_bounds_are_normalised() {
        let g = InverseCdf::from_bounds(5.0, 3.0);
        assert_eq!(g.domain(), (3.0, 5.0));
        assert_eq!(g.inverse_cdf(0.25), 3.5);
    }

    #[test]
    fn test_clamping_outside_unit_interval() {
        let g = InverseCdf::from_prior(&Prior::Log { min: 1.0, max: 100.0 }).unwrap();
        assert_eq!(g.inverse_cdf(-5.0), 1.0);
        assert_eq!(g.inverse_cdf(5.0), 100.0);
        assert_eq!(g.inverse_cdf(f64::NEG_INFINITY), 1.0);
        assert_eq!(g.inverse_cdf(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_nan_input_returns_nan() {
        let g = InverseCdf::from_bounds(0.0, 1.0);
        assert!(g.inverse_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_identity_round_trip() {
        let g = identity(11);
        for k in 0..=40 {
            let u = k as f64 / 40.0;
            assert_abs_diff_eq!(g.inverse_cdf(u), u, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interpolates_between_grid_points() {
        let g = InverseCdf::from_parts(0.0, 4.0, vec![0.0, 1.0, 4.0]).unwrap();
        // u = 0.75 -> diu = 1.5 -> halfway between 1.0 and 4.0
        assert_abs_diff_eq!(g.inverse_cdf(0.75), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g.inverse_cdf(0.5), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_query_near_one_stays_in_table() {
        let g = identity(5);
        let u = 1.0 - f64::EPSILON / 2.0;
        let x = g.inverse_cdf(u);
        assert!(x <= 1.0 && x > 0.99);
    }

    #[test]
    fn test_idempotent_queries() {
        let g = InverseCdf::from_prior(&Prior::Gaussian {
            mean: 1.0,
            std_dev: 2.0,
        })
        .unwrap();
        for &u in &[0.013, 0.25, 0.5, 0.777, 0.999] {
            assert_eq!(g.inverse_cdf(u).to_bits(), g.inverse_cdf(u).to_bits());
        }
    }

    #[test]
    fn test_many_and_grid() {
        let g = InverseCdf::from_bounds(0.0, 16.0);
        assert_eq!(g.inverse_cdf_many(&[0.0, 0.5, 1.0]), vec![0.0, 8.0, 16.0]);

        let grid = g.grid(16);
        assert_eq!(grid.len(), 17);
        for (k, (u, x)) in grid.iter().enumerate() {
            assert_eq!(*u, k as f64 / 16.0);
            assert_eq!(*x, k as f64);
        }
        assert_eq!(g.grid(0), vec![(0.0, 0.0)]);
    }

    // ========================================
    // Analytic priors through the query
    // ========================================

    #[test]
    fn test_solid_angle_query() {
        let g = InverseCdf::from_prior(&Prior::SolidAngle).unwrap();
        assert_abs_diff_eq!(g.inverse_cdf(0.5), PI / 2.0, epsilon = 0.02);
        for k in 0..=100 {
            let x = g.inverse_cdf(k as f64 / 100.0);
            assert!((0.0..=PI).contains(&x));
        }
    }

    #[test]
    fn test_gaussian_query_median() {
        let g = InverseCdf::from_prior(&Prior::Gaussian {
            mean: 0.0,
            std_dev: 1.0,
        })
        .unwrap();
        assert_abs_diff_eq!(g.inverse_cdf(0.5), 0.0, epsilon = 1e-3);
        assert_eq!(g.inverse_cdf(0.0), -4.0);
        assert_eq!(g.inverse_cdf(1.0), 4.0);
    }

    // ========================================
    // Invalid instances
    // ========================================

    #[test]
    fn test_missing_file_gives_invalid_instance() {
        let path = std::env::temp_dir().join("sampler_core_inverse_cdf_missing.txt");
        let g = InverseCdf::from_file_or_invalid(&path, &LoaderConfig::default());
        assert!(!g.is_valid());
        assert!(g.is_empty());
        assert!(g.inverse_cdf(0.0).is_nan());
        assert!(g.inverse_cdf(0.5).is_nan());
        assert!(g.inverse_cdf(2.0).is_nan());

        assert!(InverseCdf::from_file(&path, &LoaderConfig::default()).is_err());
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(!InverseCdf::default().is_valid());
    }

    #[test]
    fn test_from_parts_validation() {
        assert_eq!(
            InverseCdf::from_parts(0.0, 1.0, vec![0.5]).unwrap_err(),
            CdfError::InsufficientData { got: 1, need: 2 }
        );
        assert!(matches!(
            InverseCdf::from_parts(1.0, 0.0, vec![0.0, 1.0]),
            Err(CdfError::InvalidInput(_))
        ));
        assert!(matches!(
            InverseCdf::from_parts(0.0, 1.0, vec![0.0, 2.0]),
            Err(CdfError::InvalidInput(_))
        ));
        assert_eq!(
            InverseCdf::from_parts(0.0, 1.0, vec![0.0, 1.0, 0.2, 1.0]).unwrap_err(),
            CdfError::NonMonotonic { index: 2 }
        );
        assert!(InverseCdf::from_parts(0.0, 1.0, vec![0.0, 0.5, 0.5, 1.0]).is_ok());
    }

    #[test]
    fn test_wide_log_prior_follows_table() {
        let g = InverseCdf::from_prior(&Prior::Log {
            min: 1e-200,
            max: 1e200,
        })
        .unwrap();
        let n = g.len();
        // Grid points reproduce the geometric table.
        let u = 127.0 / (n - 1) as f64;
        approx::assert_relative_eq!(g.inverse_cdf(u), g.table()[127], max_relative = 1e-9);
        // The median lies between the two central decades, not at xmax.
        let median = g.inverse_cdf(0.5);
        assert!(median > 0.1 && median < 10.0, "g(0.5) = {}", median);
        assert!(g.inverse_cdf(0.25) < 1e-90);
    }

    // ========================================
    // Sampling
    // ========================================

    #[test]
    fn test_samples_are_reproducible_and_in_domain() {
        let g = InverseCdf::from_prior(&Prior::Log { min: 1.0, max: 100.0 }).unwrap();
        let a = g.sample_n(&mut StdRng::seed_from_u64(7), 500);
        let b = g.sample_n(&mut StdRng::seed_from_u64(7), 500);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (1.0..=100.0).contains(x)));
    }

    #[test]
    fn test_flat_samples_have_expected_mean() {
        let g = InverseCdf::from_bounds(-1.0, 3.0);
        let mut rng = StdRng::seed_from_u64(42);
        let samples = g.sample_n(&mut rng, 20_000);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert_abs_diff_eq!(mean, 1.0, epsilon = 0.05);
    }

    #[test]
    fn test_gaussian_samples_have_expected_moments() {
        let g = InverseCdf::from_prior(&Prior::Gaussian {
            mean: 2.0,
            std_dev: 0.5,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1234);
        let samples = g.sample_n(&mut rng, 20_000);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_abs_diff_eq!(mean, 2.0, epsilon = 0.02);
        assert_abs_diff_eq!(var.sqrt(), 0.5, epsilon = 0.03);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InverseCdf>();
    }

    #[test]
    fn test_concurrent_queries_agree() {
        let g = std::sync::Arc::new(InverseCdf::from_prior(&Prior::SolidAngle).unwrap());
        let expected = g.inverse_cdf(0.3);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let g = std::sync::Arc::clone(&g);
                std::thread::spawn(move || g.inverse_cdf(0.3))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
        }
    }
}
