//! Result rendering for stdout.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Output format for grids and samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated columns, one row per line
    #[default]
    Table,
    /// Comma-separated with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| {
            CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, csv, json",
                s
            ))
        })
    }
}

#[derive(Serialize)]
struct GridPoint {
    u: f64,
    x: f64,
}

/// Render `(u, g(u))` pairs.
pub fn render_grid(points: &[(f64, f64)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(points
            .iter()
            .map(|(u, x)| format!("{} {}\n", u, x))
            .collect()),
        OutputFormat::Csv => {
            let mut out = String::from("u,x\n");
            for (u, x) in points {
                out.push_str(&format!("{},{}\n", u, x));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let rows: Vec<GridPoint> = points.iter().map(|&(u, x)| GridPoint { u, x }).collect();
            to_json(&rows)
        }
    }
}

/// Render a list of samples.
pub fn render_samples(samples: &[f64], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(samples.iter().map(|x| format!("{}\n", x)).collect()),
        OutputFormat::Csv => {
            let mut out = String::from("x\n");
            for x in samples {
                out.push_str(&format!("{}\n", x));
            }
            Ok(out)
        }
        OutputFormat::Json => to_json(&samples),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| CliError::Output(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
