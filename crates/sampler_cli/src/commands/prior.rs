//! Prior command implementation
//!
//! Tabulates an analytic prior and prints `u g(u)` on a uniform u-grid.

use sampler_core::sampling::{InverseCdf, Prior};
use tracing::info;

use crate::output::{render_grid, OutputFormat};
use crate::Result;

/// Run the prior command
pub fn run(kind: &str, a: Option<f64>, b: Option<f64>, steps: usize, format: OutputFormat) -> Result<()> {
    print!("{}", render(kind, a, b, steps, format)?);
    Ok(())
}

/// Build the named prior and render its grid
pub fn render(
    kind: &str,
    a: Option<f64>,
    b: Option<f64>,
    steps: usize,
    format: OutputFormat,
) -> Result<String> {
    let prior = Prior::parse(kind, a, b)?;
    info!("Tabulating prior {}", prior);

    let g = InverseCdf::from_prior(&prior)?;
    info!("  Samples: {}", g.len());
    info!("  Domain: [{}, {}]", g.xmin(), g.xmax());

    render_grid(&g.grid(steps), format)
}
