//! Loader configuration types.

/// Configuration for ingesting tabulated CDF data.
///
/// Controls how strictly a two-column CDF table is checked against the
/// assumptions the inversion relies on: uniform x spacing and a CDF that
/// runs from ≈0 to ≈1.
///
/// # Example
///
/// ```
/// use sampler_core::sampling::LoaderConfig;
///
/// let config = LoaderConfig::default();
/// assert!(!config.strict_spacing);
///
/// let custom = LoaderConfig {
///     spacing_tolerance: 1e-9,
///     endpoint_tolerance: 1e-6,
///     strict_spacing: true,
/// };
/// assert!(custom.strict_spacing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoaderConfig {
    /// Allowed deviation of each x-step from the mean step, relative to it.
    ///
    /// Deviations are logged as warnings, or rejected when
    /// `strict_spacing` is set.
    pub spacing_tolerance: f64,

    /// Allowed distance of the first y from 0 and the last y from 1.
    ///
    /// Violations are only logged.
    pub endpoint_tolerance: f64,

    /// Reject tables whose x-values are not uniformly spaced.
    pub strict_spacing: bool,
}

impl Default for LoaderConfig {
    /// Default values:
    /// - `spacing_tolerance`: 1e-6
    /// - `endpoint_tolerance`: 1e-3
    /// - `strict_spacing`: false
    fn default() -> Self {
        Self {
            spacing_tolerance: 1e-6,
            endpoint_tolerance: 1e-3,
            strict_spacing: false,
        }
    }
}

impl LoaderConfig {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if either tolerance is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use sampler_core::sampling::LoaderConfig;
    ///
    /// let config = LoaderConfig::new(1e-4, 1e-2, true);
    /// assert!(config.strict_spacing);
    /// ```
    pub fn new(spacing_tolerance: f64, endpoint_tolerance: f64, strict_spacing: bool) -> Self {
        assert!(spacing_tolerance > 0.0, "spacing_tolerance must be positive");
        assert!(endpoint_tolerance > 0.0, "endpoint_tolerance must be positive");
        Self {
            spacing_tolerance,
            endpoint_tolerance,
            strict_spacing,
        }
    }

    /// Reject any table that is not uniformly spaced to 1e-9.
    pub fn strict() -> Self {
        Self {
            spacing_tolerance: 1e-9,
            endpoint_tolerance: 1e-6,
            strict_spacing: true,
        }
    }

    /// Accept loosely written tables (e.g. values printed with few digits).
    pub fn lenient() -> Self {
        Self {
            spacing_tolerance: 1e-2,
            endpoint_tolerance: 1e-2,
            strict_spacing: false,
        }
    }
}
