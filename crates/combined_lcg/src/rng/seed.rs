//! Seed sources: wall clock and thread/process identity.
//!
//! Seeding reads the clock twice. The first reading becomes `s1`; the
//! second decorrelates `s2` from it when both derive from near-simultaneous
//! reads. A failed first read degrades to [`FALLBACK_SEED`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use super::state::LcgState;
use crate::config::ConfigError;
use crate::error::ClockError;

/// Wall-clock reading with microsecond resolution.
pub type WallTime = DateTime<Utc>;

/// Value of `s1` when the clock cannot be read.
///
/// Streams seeded this way differ only through the identity in `s2` and
/// must not be relied on for unpredictability.
pub const FALLBACK_SEED: i32 = 1;

/// Bit offset applied to the microsecond component before mixing.
const MICROS_SHIFT: u32 = 11;

/// Host-supplied collaborators for seeding.
///
/// Implementations must be cheap; they are called exactly three times per
/// seeding (two clock reads, one identity read).
pub trait SeedSource {
    /// Reads the current wall-clock time.
    fn wall_clock(&mut self) -> Result<WallTime, ClockError>;

    /// Returns the identity of the current thread or process.
    fn identity(&mut self) -> i64;
}

/// Which identity seeds the second register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityScope {
    /// The operating-system process id.
    #[default]
    Process,
    /// A value derived from the current thread's id.
    Thread,
}

impl FromStr for IdentityScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "process" => Ok(IdentityScope::Process),
            "thread" => Ok(IdentityScope::Thread),
            _ => Err(ConfigError::InvalidValue {
                name: "identity_scope",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for IdentityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityScope::Process => write!(f, "process"),
            IdentityScope::Thread => write!(f, "thread"),
        }
    }
}

/// Seed source backed by the system clock and the OS process/thread ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemSeedSource {
    scope: IdentityScope,
}

impl SystemSeedSource {
    /// Creates a source using the given identity scope.
    pub fn new(scope: IdentityScope) -> Self {
        Self { scope }
    }

    /// Returns the identity scope.
    pub fn scope(&self) -> IdentityScope {
        self.scope
    }
}

impl SeedSource for SystemSeedSource {
    fn wall_clock(&mut self) -> Result<WallTime, ClockError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::BeforeEpoch)?;
        let secs = elapsed.as_secs();
        i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, elapsed.subsec_nanos()))
            .ok_or(ClockError::OutOfRange { secs })
    }

    fn identity(&mut self) -> i64 {
        match self.scope {
            IdentityScope::Process => i64::from(std::process::id()),
            IdentityScope::Thread => {
                // ThreadId has no stable integer form; hash it instead.
                let mut hasher = DefaultHasher::new();
                std::thread::current().id().hash(&mut hasher);
                hasher.finish() as i64
            }
        }
    }
}

/// Mixes seconds and microseconds as `secs ^ (micros << 11)`, truncated to
/// a 32-bit register.
#[inline]
fn clock_mix(now: &WallTime) -> i32 {
    (now.timestamp() ^ micros_shifted(now)) as i32
}

#[inline]
fn micros_shifted(now: &WallTime) -> i64 {
    i64::from(now.timestamp_subsec_micros()) << MICROS_SHIFT
}

/// Derives a fresh register pair from `source`.
pub(crate) fn derive_state<S: SeedSource>(source: &mut S) -> LcgState {
    let s1 = match source.wall_clock() {
        Ok(now) => clock_mix(&now),
        Err(err) => {
            warn!(error = %err, "wall clock unavailable; seeding s1 with fixed fallback");
            FALLBACK_SEED
        }
    };

    let identity = source.identity();
    let mut s2 = identity as i32;
    match source.wall_clock() {
        Ok(now) => s2 ^= micros_shifted(&now) as i32,
        Err(err) => debug!(error = %err, "second clock read failed; s2 keeps identity only"),
    }

    let state = LcgState::from_raw(s1, s2);
    debug!(
        s1 = state.s1(),
        s2 = state.s2(),
        identity,
        "seeded combined generator"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        secs: i64,
        micros: u32,
        identity: i64,
    }

    impl SeedSource for FixedSource {
        fn wall_clock(&mut self) -> Result<WallTime, ClockError> {
            DateTime::from_timestamp(self.secs, self.micros * 1_000)
                .ok_or(ClockError::Unavailable("bad fixture".to_string()))
        }

        fn identity(&mut self) -> i64 {
            self.identity
        }
    }

    #[test]
    fn test_clock_mix() {
        let now = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(clock_mix(&now), 1_700_000_000 ^ (250_000 << 11));
    }

    #[test]
    fn test_derive_state_from_fixed_source() {
        let mut source = FixedSource {
            secs: 1_000,
            micros: 3,
            identity: 4242,
        };
        let state = derive_state(&mut source);
        assert_eq!(state.s1(), 1_000 ^ (3 << 11));
        assert_eq!(state.s2(), 4242 ^ (3 << 11));
    }

    #[test]
    fn test_zero_mix_is_normalised() {
        // all-zero inputs give zero registers
        let mut source = FixedSource {
            secs: 0,
            micros: 0,
            identity: 0,
        };
        let state = derive_state(&mut source);
        assert_eq!((state.s1(), state.s2()), (1, 1));
    }

    #[test]
    fn test_system_source_reads_clock() {
        let mut source = SystemSeedSource::default();
        let now = source.wall_clock().unwrap();
        assert!(now.timestamp() > 1_600_000_000);
        assert_eq!(source.identity(), i64::from(std::process::id()));
    }

    #[test]
    fn test_thread_identity_differs_between_threads() {
        let mut source = SystemSeedSource::new(IdentityScope::Thread);
        let here = source.identity();
        let there = std::thread::spawn(move || {
            SystemSeedSource::new(IdentityScope::Thread).identity()
        })
        .join()
        .unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_identity_scope_parsing() {
        assert_eq!("Thread".parse::<IdentityScope>().unwrap(), IdentityScope::Thread);
        assert_eq!(IdentityScope::Process.to_string(), "process");
        assert!("fiber".parse::<IdentityScope>().is_err());
    }
}
