//! Check command implementation

use combined_lcg::GeneratorConfig;
use std::io::Write;

use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<()> {
    writeln!(out, "combined_lcg v{}", combined_lcg::VERSION)?;
    writeln!(out, "  output_scale:   {}", config.output_scale)?;
    writeln!(out, "  step_method:    {}", config.step_method)?;
    writeln!(out, "  identity_scope: {}", config.identity_scope)?;
    match config.seed {
        Some(seed) => {
            // surfaces a bad seed before any sampling
            seed.to_state()?;
            writeln!(out, "  seed:           {},{}", seed.s1, seed.s2)?;
        }
        None => writeln!(out, "  seed:           clock")?,
    }
    Ok(())
}
