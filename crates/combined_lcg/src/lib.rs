//! # combined_lcg: L'Ecuyer Combined Linear Congruential Generator
//!
//! Produces pseudo-random `f64` values in the open interval (0, 1) by running
//! two multiplicative LCGs in parallel and differencing their states
//! (L'Ecuyer, 1988). The combined period is the product of the two
//! component periods, `(2^31 - 85 - 1) * (2^31 - 249 - 1)`.
//!
//! ## Not for Cryptography
//!
//! The generator is fast and reproducible but entirely predictable once a
//! handful of outputs are known. Do not use it for keys, tokens, nonces, or
//! anything an adversary should not be able to guess.
//!
//! ## Seeding
//!
//! Generators seed themselves lazily on first use from the wall clock and
//! the thread or process identity (see [`rng::SeedSource`]). When the clock
//! cannot be read, the first register falls back to the fixed value `1`;
//! this degraded mode is intentional and logged at `warn` level.
//!
//! ## Module Structure
//!
//! - [`rng`]: the generator, its step functions and seed sources
//! - [`config`]: generator configuration (TOML file and environment)
//! - [`error`]: error types for clock reads and register validation
//! - [`local`]: thread-local generator behind [`next_random_double`]
//! - [`shared`]: mutex-guarded generator for hosts sharing one instance
//!
//! ## Usage Examples
//!
//! ```rust
//! use combined_lcg::rng::{CombinedLcg, LcgState};
//!
//! // Reproducible stream from a fixed register pair
//! let state = LcgState::new(12345, 67890).unwrap();
//! let mut rng = CombinedLcg::from_state(state);
//! let u = rng.next_double();
//! assert!(u > 0.0 && u < 1.0);
//!
//! // Thread-local, self-seeding entry point
//! let v = combined_lcg::next_random_double();
//! assert!(v > 0.0 && v < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod local;
pub mod rng;
pub mod shared;

pub use config::{ConfigError, GeneratorConfig, SeedPair};
pub use error::{ClockError, StateError};
pub use local::{next_random_double, reseed_thread_rng, with_thread_rng};
pub use rng::{CombinedLcg, IdentityScope, LcgState, OutputScale, StepMethod};
pub use shared::SharedCombinedLcg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
