//! Stats command implementation
//!
//! Summarises a run of generator output: mean, variance and extremes. A
//! healthy run has mean near 1/2, variance near 1/12, and extremes strictly
//! inside (0, 1).

use combined_lcg::{CombinedLcg, GeneratorConfig};
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Summary statistics of a sample run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Number of values drawn.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Unbiased sample variance.
    pub variance: f64,
    /// Smallest value drawn.
    pub min: f64,
    /// Largest value drawn.
    pub max: f64,
}

/// Draws `count` values and summarises them with Welford's update.
pub fn summarise(rng: &mut CombinedLcg, count: usize) -> Summary {
    let mut mean = 0.0;
    let mut m2 = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for i in 0..count {
        let x = rng.next_double();
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
        min = min.min(x);
        max = max.max(x);
    }

    let variance = if count > 1 {
        m2 / (count - 1) as f64
    } else {
        0.0
    };

    Summary {
        count,
        mean,
        variance,
        min,
        max,
    }
}

/// Run the stats command
pub fn run<W: Write>(config: &GeneratorConfig, count: usize, out: &mut W) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    let mut rng = CombinedLcg::from_config(config)?;
    info!(count, "summarising combined generator output");

    let summary = summarise(&mut rng, count);
    if summary.min <= 0.0 || summary.max >= 1.0 {
        warn!(min = summary.min, max = summary.max, "output escaped the open unit interval");
    }

    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}
