//! # Combined LCG Infrastructure
//!
//! This module provides the combined linear congruential generator and its
//! building blocks.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a generator built from a fixed [`LcgState`] yields
//!   the same sequence on every platform
//! - **Explicit ownership**: state lives in an owned [`CombinedLcg`] value,
//!   never in a hidden global
//! - **Static dispatch**: the seed source is a type parameter, not a
//!   `Box<dyn Trait>`, so the hot path has no indirection
//!
//! ## Module Structure
//!
//! - [`step`]: component LCG parameters, step methods and output scaling
//! - [`state`]: the validated register pair
//! - [`seed`]: clock and identity seed sources
//! - [`combined`]: the generator itself
//!
//! ## Usage Example
//!
//! ```rust
//! use combined_lcg::rng::{CombinedLcg, LcgState, OutputScale};
//!
//! let mut rng = CombinedLcg::from_state(LcgState::new(1, 1).unwrap())
//!     .with_output_scale(OutputScale::Exact);
//!
//! let mut buffer = vec![0.0; 64];
//! rng.fill_uniform(&mut buffer);
//! assert!(buffer.iter().all(|&u| u > 0.0 && u < 1.0));
//! ```

mod combined;
mod seed;
mod state;
pub mod step;

pub use combined::CombinedLcg;
pub use seed::{IdentityScope, SeedSource, SystemSeedSource, WallTime, FALLBACK_SEED};
pub use state::LcgState;
pub use step::{LcgParams, OutputScale, StepMethod, FIRST, SECOND};
