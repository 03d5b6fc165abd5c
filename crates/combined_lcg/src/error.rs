//! Error types for the combined generator.
//!
//! This module provides:
//! - `ClockError`: failures reading the wall clock during seeding
//! - `StateError`: register values outside the generator's valid range
//!
//! Generation itself never fails; both error types only occur at
//! construction or seeding boundaries.

use thiserror::Error;

/// Wall-clock read failures reported by a [`SeedSource`](crate::rng::SeedSource).
///
/// Seeding never propagates this error. It substitutes the fixed seed
/// `s1 = 1` instead and logs the failure.
///
/// # Examples
/// ```
/// use combined_lcg::ClockError;
///
/// let err = ClockError::BeforeEpoch;
/// assert_eq!(err.to_string(), "System clock is set before the Unix epoch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The system clock reports a time earlier than 1970-01-01T00:00:00Z.
    #[error("System clock is set before the Unix epoch")]
    BeforeEpoch,

    /// The clock reading cannot be represented as a calendar timestamp.
    #[error("Clock reading out of range: {secs} seconds since epoch")]
    OutOfRange {
        /// Seconds since the epoch as reported by the clock.
        secs: u64,
    },

    /// The clock source is unavailable for a host-specific reason.
    #[error("Clock unavailable: {0}")]
    Unavailable(String),
}

/// Generator register validation errors.
///
/// # Examples
/// ```
/// use combined_lcg::{LcgState, StateError};
///
/// let err = LcgState::new(0, 1).unwrap_err();
/// assert_eq!(
///     err,
///     StateError::OutOfRange { register: "s1", value: 0, modulus: 2147483563 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A register is not in the open interval (0, modulus).
    #[error("Register {register} = {value} out of range: must satisfy 0 < {register} < {modulus}")]
    OutOfRange {
        /// Register name (`s1` or `s2`).
        register: &'static str,
        /// Offending value.
        value: i32,
        /// Modulus of the component generator owning the register.
        modulus: i32,
    },
}
