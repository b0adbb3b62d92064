//! Table command implementation
//!
//! Inverts a tabulated CDF file and prints `u g(u)` on a uniform u-grid.

use std::path::Path;

use sampler_core::sampling::{InverseCdf, LoaderConfig};
use tracing::info;

use crate::output::{render_grid, OutputFormat};
use crate::{CliError, Result};

/// Run the table command
pub fn run(path: &Path, steps: usize, format: OutputFormat, loader: &LoaderConfig) -> Result<()> {
    print!("{}", render(path, steps, format, loader)?);
    Ok(())
}

/// Build the inverse CDF for `path` and render its grid
pub fn render(
    path: &Path,
    steps: usize,
    format: OutputFormat,
    loader: &LoaderConfig,
) -> Result<String> {
    info!("Inverting CDF table {}", path.display());

    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let g = InverseCdf::from_file(path, loader)?;
    info!("  Samples: {}", g.len());
    info!("  Domain: [{}, {}]", g.xmin(), g.xmax());

    render_grid(&g.grid(steps), format)
}
