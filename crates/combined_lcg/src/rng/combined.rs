//! The combined generator.
//!
//! This module provides [`CombinedLcg`], which owns the two component
//! registers, seeds them lazily from a [`SeedSource`], and maps their
//! difference onto the open interval (0, 1).

use rand::{Error, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use super::seed::{derive_state, IdentityScope, SeedSource, SystemSeedSource};
use super::state::LcgState;
use super::step::{combine, OutputScale, StepMethod};
use crate::config::GeneratorConfig;
use crate::error::StateError;

/// L'Ecuyer combined linear congruential generator.
///
/// Each instance owns its registers. Share one across threads only through
/// [`SharedCombinedLcg`](crate::SharedCombinedLcg), or give every thread
/// its own (see [`next_random_double`](crate::next_random_double)).
///
/// # Seeding
///
/// A generator built with [`new`](Self::new) or
/// [`with_source`](Self::with_source) is unseeded. The first call to any
/// generating method (or to [`ensure_seeded`](Self::ensure_seeded)) seeds
/// it from its source; later calls never touch the source again unless
/// [`reseed`](Self::reseed) is called.
///
/// # Examples
///
/// ```rust
/// use combined_lcg::rng::{CombinedLcg, LcgState};
///
/// let mut rng1 = CombinedLcg::from_state(LcgState::new(42, 4242).unwrap());
/// let mut rng2 = CombinedLcg::from_state(LcgState::new(42, 4242).unwrap());
///
/// // Same registers produce identical sequences
/// for _ in 0..100 {
///     assert_eq!(rng1.next_double(), rng2.next_double());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CombinedLcg<S = SystemSeedSource> {
    /// Current registers; `None` until seeded.
    state: Option<LcgState>,
    /// Clock and identity collaborators used for (re)seeding.
    source: S,
    step_method: StepMethod,
    output_scale: OutputScale,
}

impl CombinedLcg<SystemSeedSource> {
    /// Creates an unseeded generator backed by the system clock and the
    /// process id.
    ///
    /// Generators owned by worker threads of one process should use
    /// [`for_thread`](Self::for_thread) so each seeds `s2` from its own
    /// thread identity.
    pub fn new() -> Self {
        Self::with_source(SystemSeedSource::default())
    }

    /// Creates an unseeded generator that seeds `s2` from the identity of
    /// the thread it is first used on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combined_lcg::rng::{CombinedLcg, IdentityScope};
    ///
    /// let rng = CombinedLcg::for_thread();
    /// assert_eq!(rng.source().scope(), IdentityScope::Thread);
    /// ```
    pub fn for_thread() -> Self {
        Self::with_source(SystemSeedSource::new(IdentityScope::Thread))
    }

    /// Creates an already-seeded generator. The clock is never read unless
    /// [`reseed`](Self::reseed) is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combined_lcg::rng::{CombinedLcg, LcgState};
    ///
    /// let rng = CombinedLcg::from_state(LcgState::new(1, 1).unwrap());
    /// assert!(rng.is_seeded());
    /// ```
    pub fn from_state(state: LcgState) -> Self {
        let mut rng = Self::new();
        rng.state = Some(state);
        rng
    }

    /// Creates a generator from configuration.
    ///
    /// A fixed seed in the configuration makes the generator pre-seeded.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the configured seed is out of range.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, StateError> {
        let mut rng = Self::with_source(SystemSeedSource::new(config.identity_scope))
            .with_step_method(config.step_method)
            .with_output_scale(config.output_scale);
        if let Some(seed) = config.seed {
            rng.state = Some(seed.to_state()?);
        }
        Ok(rng)
    }
}

impl Default for CombinedLcg<SystemSeedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedSource> CombinedLcg<S> {
    /// Creates an unseeded generator using a custom seed source.
    pub fn with_source(source: S) -> Self {
        Self {
            state: None,
            source,
            step_method: StepMethod::default(),
            output_scale: OutputScale::default(),
        }
    }

    /// Sets the step method.
    #[must_use]
    pub fn with_step_method(mut self, step_method: StepMethod) -> Self {
        self.step_method = step_method;
        self
    }

    /// Sets the output scale.
    #[must_use]
    pub fn with_output_scale(mut self, output_scale: OutputScale) -> Self {
        self.output_scale = output_scale;
        self
    }

    /// Returns the step method.
    #[inline]
    pub fn step_method(&self) -> StepMethod {
        self.step_method
    }

    /// Returns the output scale.
    #[inline]
    pub fn output_scale(&self) -> OutputScale {
        self.output_scale
    }

    /// Returns the seed source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns `true` once the registers have been initialised.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    /// Returns a snapshot of the registers, or `None` if unseeded.
    #[inline]
    pub fn state(&self) -> Option<LcgState> {
        self.state
    }

    /// Seeds the generator if it has not been seeded yet and returns the
    /// current registers. Idempotent.
    pub fn ensure_seeded(&mut self) -> LcgState {
        match self.state {
            Some(state) => state,
            None => {
                let state = derive_state(&mut self.source);
                self.state = Some(state);
                state
            }
        }
    }

    /// Discards the current registers and seeds again from the source.
    pub fn reseed(&mut self) -> LcgState {
        debug!(was_seeded = self.is_seeded(), "reseeding combined generator");
        let state = derive_state(&mut self.source);
        self.state = Some(state);
        state
    }

    /// Advances both registers and returns the combined value `z` in
    /// `[1, 2147483562]`.
    #[inline]
    fn next_combined(&mut self) -> i32 {
        let mut state = self.ensure_seeded();
        state.advance(self.step_method);
        self.state = Some(state);
        combine(state.s1(), state.s2())
    }

    /// Generates the next value in the open interval (0, 1).
    ///
    /// Seeds the generator on first use. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combined_lcg::rng::CombinedLcg;
    ///
    /// let mut rng = CombinedLcg::new();
    /// let value = rng.next_double();
    /// assert!(value > 0.0 && value < 1.0);
    /// ```
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        let z = self.next_combined();
        self.output_scale.scale(z)
    }

    /// Fills the buffer with values in (0, 1).
    ///
    /// Zero-allocation; an empty buffer is a no-op (and does not seed).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_double();
        }
    }

    /// Generates a standard normal variate (mean 0, standard deviation 1)
    /// using `rand_distr::StandardNormal` over this generator.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }

    /// Fills the buffer with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal();
        }
    }
}

/// Raw integer output for the `rand` ecosystem.
///
/// A combined value carries 31 significant bits, so each `u32` is built
/// from the top 16 bits of two successive values.
impl<S: SeedSource> RngCore for CombinedLcg<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let hi = (self.next_combined() >> 15) as u32;
        let lo = (self.next_combined() >> 15) as u32;
        (hi << 16) | lo
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Seeds from 8 bytes: `s1` and `s2` as little-endian `i32`, normalised
/// into their valid ranges.
impl SeedableRng for CombinedLcg<SystemSeedSource> {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let [a, b, c, d, e, f, g, h] = seed;
        let s1 = i32::from_le_bytes([a, b, c, d]);
        let s2 = i32::from_le_bytes([e, f, g, h]);
        Self::from_state(LcgState::from_raw(s1, s2))
    }
}
