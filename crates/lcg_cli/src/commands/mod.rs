//! CLI command implementations.

pub mod check;
pub mod sample;
pub mod stats;

use combined_lcg::{GeneratorConfig, SeedPair};
use std::path::Path;
use tracing::debug;

use crate::Result;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lcg.toml";

/// Resolves configuration from file, environment and an optional seed flag.
///
/// Priority (highest to lowest): seed flag, environment, file, defaults.
/// An explicit path must exist; the default file is optional.
pub fn resolve_config(path: Option<&Path>, seed: Option<&str>) -> Result<GeneratorConfig> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let file = match path {
        Some(path) => Some(path),
        None if default_path.exists() => Some(default_path),
        None => None,
    };
    debug!(file = ?file, "loading generator configuration");

    let mut config = GeneratorConfig::load(file)?;
    if let Some(seed) = seed {
        config.seed = Some(seed.parse::<SeedPair>()?);
        config.validate()?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_seed_flag_overrides() {
        let config = resolve_config(None, Some("3,4")).unwrap();
        assert_eq!(config.seed, Some(SeedPair { s1: 3, s2: 4 }));
    }

    #[test]
    fn test_bad_seed_flag() {
        let err = resolve_config(None, Some("3;4")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let err = resolve_config(None, Some("0,4")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file() {
        let err = resolve_config(Some(Path::new("/nonexistent/lcg.toml")), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
