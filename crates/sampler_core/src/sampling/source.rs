//! Construction modes for an [`InverseCdf`].

use std::path::PathBuf;

use super::{InverseCdf, LoaderConfig, Prior, PriorKind};
use crate::types::CdfError;

/// Where an inverse CDF comes from.
///
/// # Example
///
/// ```
/// use sampler_core::sampling::{CdfSource, Prior};
///
/// let flat = CdfSource::Bounds { min: 3.0, max: 5.0 }.build().unwrap();
/// assert_eq!(flat.inverse_cdf(0.5), 4.0);
///
/// let log = CdfSource::Analytic(Prior::Log { min: 1.0, max: 100.0 })
///     .build()
///     .unwrap();
/// assert_eq!(log.inverse_cdf(1.0), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CdfSource {
    /// Two-column CDF table on disk, inverted numerically.
    Table(PathBuf),
    /// Closed-form analytic prior.
    Analytic(Prior),
    /// Two-point flat prior between bounds given in either order.
    Bounds {
        /// First bound
        min: f64,
        /// Second bound
        max: f64,
    },
}

impl CdfSource {
    /// Analytic source from a kind name and the `(a, b)` parameter pair.
    ///
    /// # Errors
    ///
    /// Any error of [`Prior::parse`], including
    /// `CdfError::UnknownPriorKind` for an unrecognised name.
    pub fn analytic(name: &str, a: Option<f64>, b: Option<f64>) -> Result<Self, CdfError> {
        Prior::parse(name, a, b).map(CdfSource::Analytic)
    }

    /// Build with [`LoaderConfig::default`].
    pub fn build(&self) -> Result<InverseCdf, CdfError> {
        self.build_with(&LoaderConfig::default())
    }

    /// Build, using `config` for tabulated input.
    pub fn build_with(&self, config: &LoaderConfig) -> Result<InverseCdf, CdfError> {
        match self {
            CdfSource::Table(path) => InverseCdf::from_file(path, config),
            CdfSource::Analytic(prior) => InverseCdf::from_prior(prior),
            CdfSource::Bounds { min, max } => InverseCdf::from_prior(&Prior::Flat {
                min: *min,
                max: *max,
            }),
        }
    }

    /// The analytic kind, if any. `Bounds` reports [`PriorKind::Flat`].
    pub fn prior_kind(&self) -> Option<PriorKind> {
        match self {
            CdfSource::Table(_) => None,
            CdfSource::Analytic(prior) => Some(prior.kind()),
            CdfSource::Bounds { .. } => Some(PriorKind::Flat),
        }
    }
}

impl From<Prior> for CdfSource {
    fn from(prior: Prior) -> Self {
        CdfSource::Analytic(prior)
    }
}

impl From<PathBuf> for CdfSource {
    fn from(path: PathBuf) -> Self {
        CdfSource::Table(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_source() {
        let g = CdfSource::Bounds { min: 5.0, max: 3.0 }.build().unwrap();
        assert_eq!(g.domain(), (3.0, 5.0));
        assert_eq!(g.inverse_cdf(0.5), 4.0);
    }

    #[test]
    fn test_non_finite_bounds_fail_to_build() {
        let source = CdfSource::Bounds {
            min: f64::NAN,
            max: 1.0,
        };
        assert!(matches!(source.build(), Err(CdfError::InvalidParameter(_))));

        let source = CdfSource::Bounds {
            min: 0.0,
            max: f64::INFINITY,
        };
        assert!(matches!(source.build(), Err(CdfError::InvalidParameter(_))));
    }

    #[test]
    fn test_analytic_source_by_name() {
        let source = CdfSource::analytic("solidangle", None, None).unwrap();
        assert_eq!(source.prior_kind(), Some(PriorKind::SolidAngle));
        let g = source.build().unwrap();
        assert_eq!(g.len(), 128);
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        assert_eq!(
            CdfSource::analytic("Exponential", Some(1.0), None).unwrap_err(),
            CdfError::UnknownPriorKind("Exponential".to_string())
        );
    }

    #[test]
    fn test_invalid_prior_parameters_fail_to_build() {
        let source = CdfSource::Analytic(Prior::Log { min: 0.0, max: 1.0 });
        assert!(matches!(source.build(), Err(CdfError::InvalidParameter(_))));
    }

    #[test]
    fn test_missing_table_fails_to_build() {
        let path = std::env::temp_dir().join("sampler_core_source_missing.txt");
        let source = CdfSource::from(path);
        assert_eq!(source.prior_kind(), None);
        assert!(matches!(source.build(), Err(CdfError::Io { .. })));
    }

    #[test]
    fn test_from_prior() {
        let source: CdfSource = Prior::SolidAngle.into();
        assert_eq!(source, CdfSource::Analytic(Prior::SolidAngle));
    }
}
