//! Generator configuration management
//!
//! Handles loading configuration from TOML files and environment variables.
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`LCG_OUTPUT_SCALE`, `LCG_STEP_METHOD`,
//!    `LCG_IDENTITY_SCOPE`, `LCG_SEED`)
//! 2. Config file
//! 3. Default values

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::error::StateError;
use crate::rng::{IdentityScope, LcgState, OutputScale, StepMethod};

/// Environment variable overriding [`GeneratorConfig::output_scale`].
pub const ENV_OUTPUT_SCALE: &str = "LCG_OUTPUT_SCALE";
/// Environment variable overriding [`GeneratorConfig::step_method`].
pub const ENV_STEP_METHOD: &str = "LCG_STEP_METHOD";
/// Environment variable overriding [`GeneratorConfig::identity_scope`].
pub const ENV_IDENTITY_SCOPE: &str = "LCG_IDENTITY_SCOPE";
/// Environment variable holding a fixed seed as `s1,s2`.
pub const ENV_SEED: &str = "LCG_SEED";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    /// A setting could not be parsed.
    InvalidValue {
        /// Setting name.
        name: &'static str,
        /// Rejected input.
        value: String,
    },

    #[error("Invalid seed: {0}")]
    /// A fixed seed violates the register ranges.
    InvalidSeed(#[from] StateError),

    #[error("Configuration file error: {0}")]
    /// The config file could not be read or parsed.
    FileError(String),
}

/// Fixed register pair for reproducible streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeedPair {
    /// First register, `0 < s1 < 2147483563`.
    pub s1: i32,
    /// Second register, `0 < s2 < 2147483399`.
    pub s2: i32,
}

impl SeedPair {
    /// Validates the pair into generator registers.
    pub fn to_state(self) -> Result<LcgState, StateError> {
        LcgState::new(self.s1, self.s2)
    }
}

impl FromStr for SeedPair {
    type Err = ConfigError;

    /// Parses `"s1,s2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidValue {
            name: "seed",
            value: s.to_string(),
        };
        let (s1, s2) = s.split_once(',').ok_or_else(invalid)?;
        let s1 = s1.trim().parse().map_err(|_| invalid())?;
        let s2 = s2.trim().parse().map_err(|_| invalid())?;
        Ok(Self { s1, s2 })
    }
}

/// Generator configuration structure
///
/// # Examples
///
/// ```rust
/// use combined_lcg::{GeneratorConfig, OutputScale};
///
/// let config = GeneratorConfig::from_toml_str(r#"
///     output_scale = "exact"
///
///     [seed]
///     s1 = 1
///     s2 = 1
/// "#).unwrap();
///
/// assert_eq!(config.output_scale, OutputScale::Exact);
/// assert_eq!(config.seed.unwrap().s1, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Factor mapping combined values onto (0, 1)
    pub output_scale: OutputScale,
    /// Component step method
    pub step_method: StepMethod,
    /// Identity used for the second register when seeding
    pub identity_scope: IdentityScope,
    /// Fixed seed; when present the clock is never read
    pub seed: Option<SeedPair>,
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Override settings from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override settings from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(scale) = lookup(ENV_OUTPUT_SCALE) {
            self.output_scale = scale.parse()?;
        }
        if let Some(method) = lookup(ENV_STEP_METHOD) {
            self.step_method = method.parse()?;
        }
        if let Some(scope) = lookup(ENV_IDENTITY_SCOPE) {
            self.identity_scope = scope.parse()?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed.parse()?);
        }
        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seed) = self.seed {
            seed.to_state()?;
        }
        Ok(())
    }

    /// Build configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }
}
