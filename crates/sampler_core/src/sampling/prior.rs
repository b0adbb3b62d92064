//! Analytic priors with closed-form inverse CDFs.
//!
//! Each prior tabulates `g(u)` directly on a fixed grid, bypassing
//! ingestion and numeric inversion, so the query in
//! [`InverseCdf::inverse_cdf`](super::InverseCdf::inverse_cdf) applies
//! unchanged.
//!
//! | Prior        | N   | Domain            | g(u)                               |
//! |--------------|-----|-------------------|------------------------------------|
//! | `Flat`       | 2   | `[min, max]`      | `min + (max - min)·u` (exact)      |
//! | `Gaussian`   | 257 | `mean ± 4·σ`      | `mean + σ·√2·erf⁻¹(2u - 1)`        |
//! | `Log`        | 256 | `[|min|, |max|]`  | `min·(max/min)^u`                  |
//! | `SolidAngle` | 128 | `[0, π]`          | `acos(1 - 2u)`                     |

use std::fmt;
use std::str::FromStr;

use crate::math::special::normal_quantile_approx;
use crate::types::CdfError;

/// Table size of the flat prior.
pub const FLAT_POINTS: usize = 2;
/// Table size of the Gaussian prior. Odd, so the mean sits on a grid point.
pub const GAUSSIAN_POINTS: usize = 257;
/// Table size of the log-uniform prior.
pub const LOG_POINTS: usize = 256;
/// Table size of the solid-angle prior.
pub const SOLID_ANGLE_POINTS: usize = 128;
/// Half-width of the truncated Gaussian domain, in standard deviations.
pub const GAUSSIAN_TRUNCATION: f64 = 4.0;

/// Selector for an analytic prior, without its parameters.
///
/// Parsing is case-insensitive and ignores `_` and `-`, so `"Gaussian"`,
/// `"gaussian"` and `"solid_angle"` are all accepted. Anything else is
/// [`CdfError::UnknownPriorKind`].
///
/// # Example
///
/// ```
/// use sampler_core::sampling::PriorKind;
///
/// assert_eq!("LOG".parse::<PriorKind>().unwrap(), PriorKind::Log);
/// assert_eq!("SolidAngle".parse::<PriorKind>().unwrap(), PriorKind::SolidAngle);
/// assert!("Cauchy".parse::<PriorKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PriorKind {
    /// Uniform between two bounds
    Flat,
    /// Truncated normal
    Gaussian,
    /// Log-uniform between two positive bounds
    Log,
    /// Polar angle with uniform cos θ
    SolidAngle,
}

impl PriorKind {
    /// All kinds, in display order.
    pub const ALL: [PriorKind; 4] = [
        PriorKind::Flat,
        PriorKind::Gaussian,
        PriorKind::Log,
        PriorKind::SolidAngle,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            PriorKind::Flat => "Flat",
            PriorKind::Gaussian => "Gaussian",
            PriorKind::Log => "Log",
            PriorKind::SolidAngle => "SolidAngle",
        }
    }

    /// Whether the kind takes the `(a, b)` parameter pair.
    pub fn takes_parameters(&self) -> bool {
        !matches!(self, PriorKind::SolidAngle)
    }
}

impl fmt::Display for PriorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorKind {
    type Err = CdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalised.as_str() {
            "flat" => Ok(PriorKind::Flat),
            "gaussian" => Ok(PriorKind::Gaussian),
            "log" => Ok(PriorKind::Log),
            "solidangle" => Ok(PriorKind::SolidAngle),
            _ => Err(CdfError::UnknownPriorKind(s.to_string())),
        }
    }
}

/// An analytic prior with its parameters.
///
/// # Example
///
/// ```
/// use sampler_core::sampling::{InverseCdf, Prior};
///
/// let prior = Prior::parse("gaussian", Some(0.0), Some(1.0)).unwrap();
/// let g = InverseCdf::from_prior(&prior).unwrap();
/// assert!(g.inverse_cdf(0.5).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Prior {
    /// Uniform on `[min, max]`; bounds may be given in either order.
    Flat {
        /// First bound
        min: f64,
        /// Second bound
        max: f64,
    },
    /// Normal distribution truncated at `mean ± 4·std_dev`.
    Gaussian {
        /// Mean
        mean: f64,
        /// Standard deviation (sign ignored)
        std_dev: f64,
    },
    /// Log-uniform on `[|min|, |max|]`; bounds may be given in either order.
    Log {
        /// First bound (sign ignored, non-zero)
        min: f64,
        /// Second bound (sign ignored, non-zero)
        max: f64,
    },
    /// Polar angle θ ∈ [0, π] with density ∝ sin θ.
    SolidAngle,
}

impl Prior {
    /// Build a prior from its kind and the generic `(a, b)` parameter pair.
    ///
    /// `a`/`b` are `(min, max)` for `Flat` and `Log`, `(mean, std_dev)` for
    /// `Gaussian`, and ignored for `SolidAngle`.
    ///
    /// # Errors
    ///
    /// * `CdfError::MissingParameter` - `a` or `b` absent for a parameterised kind
    /// * any error of [`Prior::validate`]
    pub fn from_kind(kind: PriorKind, a: Option<f64>, b: Option<f64>) -> Result<Self, CdfError> {
        let require = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| CdfError::MissingParameter {
                kind: kind.name().to_string(),
                name: name.to_string(),
            })
        };

        let prior = match kind {
            PriorKind::SolidAngle => Prior::SolidAngle,
            PriorKind::Flat => Prior::Flat {
                min: require(a, "a")?,
                max: require(b, "b")?,
            },
            PriorKind::Gaussian => Prior::Gaussian {
                mean: require(a, "a")?,
                std_dev: require(b, "b")?,
            },
            PriorKind::Log => Prior::Log {
                min: require(a, "a")?,
                max: require(b, "b")?,
            },
        };
        prior.validate()?;
        Ok(prior)
    }

    /// Build a prior from a kind name (see [`PriorKind`]) and parameters.
    pub fn parse(name: &str, a: Option<f64>, b: Option<f64>) -> Result<Self, CdfError> {
        Self::from_kind(name.parse()?, a, b)
    }

    /// The parameter-free selector.
    pub fn kind(&self) -> PriorKind {
        match self {
            Prior::Flat { .. } => PriorKind::Flat,
            Prior::Gaussian { .. } => PriorKind::Gaussian,
            Prior::Log { .. } => PriorKind::Log,
            Prior::SolidAngle => PriorKind::SolidAngle,
        }
    }

    /// Check parameters are usable.
    ///
    /// # Errors
    ///
    /// * `CdfError::InvalidParameter` - A non-finite parameter, a zero `Log`
    ///   bound, a zero `Gaussian` width, or a domain that overflows
    pub fn validate(&self) -> Result<(), CdfError> {
        let (a, b) = match *self {
            Prior::Flat { min, max } | Prior::Log { min, max } => (min, max),
            Prior::Gaussian { mean, std_dev } => (mean, std_dev),
            Prior::SolidAngle => return Ok(()),
        };
        if !a.is_finite() || !b.is_finite() {
            return Err(CdfError::InvalidParameter(format!(
                "{} parameters must be finite: got ({}, {})",
                self.kind(),
                a,
                b
            )));
        }
        match *self {
            Prior::Log { min, max } if min == 0.0 || max == 0.0 => {
                return Err(CdfError::InvalidParameter(format!(
                    "Log bounds must be non-zero: got ({}, {})",
                    min, max
                )));
            }
            Prior::Gaussian { std_dev, .. } if std_dev == 0.0 => {
                return Err(CdfError::InvalidParameter(
                    "Gaussian std_dev must be non-zero".to_string(),
                ));
            }
            _ => {}
        }

        let (xmin, xmax) = self.bounds();
        if !xmin.is_finite() || !xmax.is_finite() {
            return Err(CdfError::InvalidParameter(format!(
                "{} domain is not finite: [{}, {}]",
                self, xmin, xmax
            )));
        }
        Ok(())
    }

    /// Number of points in the tabulated inverse.
    pub fn points(&self) -> usize {
        match self {
            Prior::Flat { .. } => FLAT_POINTS,
            Prior::Gaussian { .. } => GAUSSIAN_POINTS,
            Prior::Log { .. } => LOG_POINTS,
            Prior::SolidAngle => SOLID_ANGLE_POINTS,
        }
    }

    /// Normalised domain `(xmin, xmax)` with `xmin ≤ xmax`.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Prior::Flat { min, max } => ordered(min, max),
            Prior::Gaussian { mean, std_dev } => {
                let half_width = GAUSSIAN_TRUNCATION * std_dev.abs();
                (mean - half_width, mean + half_width)
            }
            Prior::Log { min, max } => ordered(min.abs(), max.abs()),
            Prior::SolidAngle => (0.0, std::f64::consts::PI),
        }
    }

    /// Tabulate `g(u)` on the prior's grid.
    ///
    /// Parameters are assumed valid; see [`Prior::validate`].
    pub fn inverse_table(&self) -> Vec<f64> {
        let (xmin, xmax) = self.bounds();
        match *self {
            Prior::Flat { .. } => vec![xmin, xmax],
            Prior::Gaussian { mean, std_dev } => {
                let n = GAUSSIAN_POINTS;
                let std_dev = std_dev.abs();
                let mut table = Vec::with_capacity(n);
                table.push(xmin);
                table.extend((1..n - 1).map(|i| {
                    let u = i as f64 / (n - 1) as f64;
                    normal_quantile_approx(u, mean, std_dev)
                }));
                table.push(xmax);
                table
            }
            Prior::Log { .. } => {
                let n = LOG_POINTS;
                let (ln_min, ln_max) = (xmin.ln(), xmax.ln());
                let mut table = Vec::with_capacity(n);
                table.push(xmin);
                table.extend((1..n - 1).map(|i| {
                    let u = i as f64 / (n - 1) as f64;
                    (ln_min + u * (ln_max - ln_min)).exp().clamp(xmin, xmax)
                }));
                table.push(xmax);
                table
            }
            Prior::SolidAngle => {
                let n = SOLID_ANGLE_POINTS;
                (1..=n)
                    .map(|i| {
                        let u = i as f64 / n as f64;
                        (1.0 - 2.0 * u).acos()
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prior::Flat { min, max } => write!(f, "Flat({}, {})", min, max),
            Prior::Gaussian { mean, std_dev } => write!(f, "Gaussian({}, {})", mean, std_dev),
            Prior::Log { min, max } => write!(f, "Log({}, {})", min, max),
            Prior::SolidAngle => f.write_str("SolidAngle"),
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}
