//! Tabulated CDF ingestion.
//!
//! A CDF table is plain text with one `x y` pair per line, no header and no
//! comments. Lines are ordered by increasing x at uniform spacing and y is
//! non-decreasing. The first x becomes `xmin`, the last x becomes `xmax`.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use super::LoaderConfig;
use crate::types::CdfError;

/// Label used in errors for tables parsed from in-memory text.
const IN_MEMORY_LABEL: &str = "<memory>";

/// Validated two-column CDF data on a uniform x grid.
///
/// # Example
///
/// ```
/// use sampler_core::sampling::CdfTable;
///
/// let table: CdfTable = "0.0 0.0\n0.5 0.25\n1.0 1.0\n".parse().unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.xmin(), 0.0);
/// assert_eq!(table.xmax(), 1.0);
/// assert_eq!(table.dx(), 0.5);
/// assert_eq!(table.cdf(), &[0.0, 0.25, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CdfTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl CdfTable {
    /// Read and validate a CDF table from a file.
    ///
    /// # Errors
    ///
    /// * `CdfError::Io` - The file cannot be read
    /// * any error of [`CdfTable::parse`]
    pub fn from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self, CdfError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| CdfError::Io {
            path: label.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %label, bytes = text.len(), "read CDF table");
        Self::parse_labelled(&text, &label, config)
    }

    /// Parse and validate a CDF table from text.
    ///
    /// Whitespace-only lines are skipped. Tokens after the second one on a
    /// line are ignored.
    ///
    /// # Errors
    ///
    /// * `CdfError::Parse` - A line is not a pair of finite numbers
    /// * `CdfError::EmptyTable` - No samples
    /// * `CdfError::InsufficientData` - A single sample
    /// * `CdfError::InvalidInput` - The last x does not exceed the first x
    /// * `CdfError::NonMonotonic` - y decreases
    /// * `CdfError::NonUniformSpacing` - Uneven x steps with `strict_spacing`
    pub fn parse(text: &str, config: &LoaderConfig) -> Result<Self, CdfError> {
        Self::parse_labelled(text, IN_MEMORY_LABEL, config)
    }

    /// Build a table from already separated x and y samples.
    ///
    /// Applies the same validation as [`CdfTable::parse`].
    pub fn from_samples(
        xs: Vec<f64>,
        ys: Vec<f64>,
        config: &LoaderConfig,
    ) -> Result<Self, CdfError> {
        if xs.len() != ys.len() {
            return Err(CdfError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        Self::validated(xs, ys, IN_MEMORY_LABEL, config)
    }

    fn parse_labelled(text: &str, label: &str, config: &LoaderConfig) -> Result<Self, CdfError> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (x, y) = parse_line(line).ok_or_else(|| CdfError::Parse {
                line: number + 1,
                content: line.to_string(),
            })?;
            xs.push(x);
            ys.push(y);
        }

        Self::validated(xs, ys, label, config)
    }

    fn validated(
        xs: Vec<f64>,
        ys: Vec<f64>,
        label: &str,
        config: &LoaderConfig,
    ) -> Result<Self, CdfError> {
        match xs.len() {
            0 => {
                return Err(CdfError::EmptyTable {
                    path: label.to_string(),
                })
            }
            1 => return Err(CdfError::InsufficientData { got: 1, need: 2 }),
            _ => {}
        }

        let table = Self { xs, ys };
        let (xmin, xmax) = (table.xmin(), table.xmax());
        if xmax <= xmin {
            return Err(CdfError::InvalidInput(format!(
                "last x ({}) must exceed first x ({})",
                xmax, xmin
            )));
        }

        if let Some(index) = (1..table.ys.len()).find(|&i| table.ys[i] < table.ys[i - 1]) {
            return Err(CdfError::NonMonotonic { index });
        }

        table.check_spacing(label, config)?;
        table.check_endpoints(label, config);

        debug!(
            table = %label,
            samples = table.len(),
            xmin,
            xmax,
            "validated CDF table"
        );
        Ok(table)
    }

    fn check_spacing(&self, label: &str, config: &LoaderConfig) -> Result<(), CdfError> {
        let dx = self.dx();
        let limit = config.spacing_tolerance * dx;
        let offender = self
            .xs
            .windows(2)
            .position(|pair| ((pair[1] - pair[0]) - dx).abs() > limit)
            .map(|i| i + 1);

        match offender {
            Some(index) if config.strict_spacing => Err(CdfError::NonUniformSpacing { index }),
            Some(index) => {
                warn!(
                    table = %label,
                    index,
                    dx,
                    "CDF x-values are not uniformly spaced; inversion assumes uniform steps"
                );
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn check_endpoints(&self, label: &str, config: &LoaderConfig) {
        let first = self.ys[0];
        let last = self.ys[self.ys.len() - 1];
        if first.abs() > config.endpoint_tolerance {
            warn!(table = %label, first, "CDF does not start at 0");
        }
        if (last - 1.0).abs() > config.endpoint_tolerance {
            warn!(table = %label, last, "CDF does not end at 1");
        }
    }

    /// x-value of the first sample (maps to u = 0).
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xs[0]
    }

    /// x-value of the last sample (maps to u = 1).
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Uniform x step `(xmax - xmin) / (N - 1)`.
    #[inline]
    pub fn dx(&self) -> f64 {
        (self.xmax() - self.xmin()) / (self.len() - 1) as f64
    }

    /// Number of samples N.
    #[inline]
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    /// Always false for a validated table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// The x-values as read.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The CDF values `cdf[0..N-1]`.
    #[inline]
    pub fn cdf(&self) -> &[f64] {
        &self.ys
    }
}

impl FromStr for CdfTable {
    type Err = CdfError;

    /// Parse with [`LoaderConfig::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &LoaderConfig::default())
    }
}

fn parse_line(line: &str) -> Option<(f64, f64)> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}
