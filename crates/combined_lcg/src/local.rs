//! Thread-local generator management.
//!
//! Every thread lazily owns one [`CombinedLcg`] seeded with
//! [`IdentityScope::Thread`], so concurrent callers never contend on a lock
//! and never interleave updates to the same registers.
//!
//! # Example
//!
//! ```rust
//! use combined_lcg::{next_random_double, with_thread_rng};
//!
//! let u = next_random_double();
//! assert!(u > 0.0 && u < 1.0);
//!
//! let mut buffer = [0.0; 16];
//! with_thread_rng(|rng| rng.fill_uniform(&mut buffer));
//! ```

use std::cell::RefCell;
use tracing::debug;

use crate::rng::{CombinedLcg, LcgState};

thread_local! {
    static THREAD_RNG: RefCell<CombinedLcg> = RefCell::new(CombinedLcg::for_thread());
}

/// Returns the next value in (0, 1) from the calling thread's generator.
///
/// The generator seeds itself on the first call in each thread.
#[inline]
pub fn next_random_double() -> f64 {
    with_thread_rng(|rng| rng.next_double())
}

/// Runs `f` with exclusive access to the calling thread's generator.
///
/// While the thread's locals are being destroyed (for example from another
/// thread-local's `Drop`), `f` receives a fresh, unseeded generator seeded
/// from the process id instead; state changes made to it are discarded.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_thread_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut CombinedLcg) -> R,
{
    let mut op = Some(f);
    let result = THREAD_RNG.try_with(|rng| op.take().map(|f| f(&mut rng.borrow_mut())));
    match (result, op) {
        (Ok(Some(value)), _) => value,
        (_, Some(f)) => {
            debug!("thread-local generator destroyed; using a temporary generator");
            // thread::current() may be unavailable here, so no thread scope
            f(&mut CombinedLcg::new())
        }
        (_, None) => unreachable!("thread-local closure consumed without a result"),
    }
}

/// Reseeds the calling thread's generator from the clock and thread id.
pub fn reseed_thread_rng() -> LcgState {
    with_thread_rng(|rng| rng.reseed())
}
