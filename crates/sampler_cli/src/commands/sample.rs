//! Sample command implementation
//!
//! Draws seeded random samples through an inverse CDF.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sampler_core::sampling::{CdfSource, LoaderConfig};
use tracing::info;

use crate::output::{render_samples, OutputFormat};
use crate::Result;

/// Run the sample command
pub fn run(
    source: &CdfSource,
    count: usize,
    seed: u64,
    format: OutputFormat,
    loader: &LoaderConfig,
) -> Result<()> {
    print!("{}", render(source, count, seed, format, loader)?);
    Ok(())
}

/// Draw `count` samples from `source` and render them
pub fn render(
    source: &CdfSource,
    count: usize,
    seed: u64,
    format: OutputFormat,
    loader: &LoaderConfig,
) -> Result<String> {
    info!("Sampling {} values (seed {})", count, seed);

    let g = source.build_with(loader)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = g.sample_n(&mut rng, count);

    render_samples(&samples, format)
}
