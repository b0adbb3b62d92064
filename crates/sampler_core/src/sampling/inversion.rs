//! Numeric inversion of a CDF sampled on a uniform grid.
//!
//! Solves `cdf(x) = u` for `u = i/(N-1)`, `i = 0..N-1`, using a single
//! forward sweep. Both the targets and the bracket only move forward, so
//! the whole inversion costs O(N).

/// Pair of adjacent grid indices bracketing the current target probability.
///
/// `lower` persists between targets and never moves backwards once the
/// sweep has passed the first sample with `cdf > u`.
#[derive(Debug, Clone, Copy, Default)]
struct Bracket {
    lower: usize,
    upper: usize,
}

impl Bracket {
    /// Move the bracket so that `cdf[upper] > u` (or `upper == N-1`).
    fn advance(&mut self, cdf: &[f64], u: f64) {
        let last = cdf.len() - 1;
        let mut upper = self.lower;
        while cdf[upper] <= u {
            if upper == last {
                break;
            }
            upper += 1;
        }
        if upper > 0 {
            self.lower = upper - 1;
        }
        self.upper = upper;
    }

    /// Linear position between the bracket ends, weighted by the CDF
    /// residuals on either side of `u`.
    ///
    /// Returns the grid coordinate (in units of `dx`), or `None` when both
    /// residuals vanish.
    fn position(&self, cdf: &[f64], u: f64) -> Option<f64> {
        let a = u - cdf[self.lower];
        let b = cdf[self.upper] - u;
        let weight = a + b;
        (weight > 0.0).then(|| (b * self.lower as f64 + a * self.upper as f64) / weight)
    }
}

/// Invert a CDF sampled at `N` evenly spaced points over `[xmin, xmax]`.
///
/// Returns `inverse[i]`, the x-value where the CDF reaches `i/(N-1)`.
/// Degenerate brackets (both residuals zero, e.g. at u = 0) resolve to
/// `xmin`. Every value is clamped into `[previous, xmax]`, which keeps the
/// table inside the domain and non-decreasing under rounding.
///
/// The `cdf` slice must be non-decreasing; [`CdfTable`](super::CdfTable)
/// guarantees this for parsed input. Fewer than two samples yield an empty
/// table.
///
/// # Example
///
/// ```
/// use sampler_core::sampling::invert_uniform_cdf;
///
/// // Identity CDF on [0, 1] inverts to itself.
/// let inverse = invert_uniform_cdf(0.0, 1.0, &[0.0, 0.5, 1.0]);
/// assert_eq!(inverse, vec![0.0, 0.5, 1.0]);
/// ```
pub fn invert_uniform_cdf(xmin: f64, xmax: f64, cdf: &[f64]) -> Vec<f64> {
    let n = cdf.len();
    if n < 2 {
        return Vec::new();
    }
    let dx = (xmax - xmin) / (n - 1) as f64;
    let last = (n - 1) as f64;

    let mut bracket = Bracket::default();
    let mut floor = xmin;
    (0..n)
        .map(|i| {
            let u = i as f64 / last;
            bracket.advance(cdf, u);
            let x = match bracket.position(cdf, u) {
                Some(grid) => xmin + dx * grid,
                None => xmin,
            };
            floor = x.max(floor).min(xmax);
            floor
        })
        .collect()
}
