//! Component generator parameters and the single-step transition.
//!
//! Each component is a multiplicative LCG `s' = (a * s) mod m`. The
//! default [`StepMethod::Schrage`] evaluates it with Schrage's
//! decomposition `m = a * q + r`, which keeps every intermediate below
//! `m` in magnitude. [`StepMethod::WideMultiply`] evaluates the product
//! directly in 64-bit arithmetic; both agree for every valid register.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Parameters of one multiplicative LCG component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcgParams {
    /// Multiplier `a`.
    pub multiplier: i64,
    /// Prime modulus `m`.
    pub modulus: i64,
    /// Schrage quotient `q = m / a`.
    pub quotient: i64,
    /// Schrage remainder `r = m % a`.
    pub remainder: i64,
}

/// First component: `a = 40014`, `m = 2^31 - 85`.
pub const FIRST: LcgParams = LcgParams {
    multiplier: 40014,
    modulus: 2_147_483_563,
    quotient: 53668,
    remainder: 12211,
};

/// Second component: `a = 40692`, `m = 2^31 - 249`.
pub const SECOND: LcgParams = LcgParams {
    multiplier: 40692,
    modulus: 2_147_483_399,
    quotient: 52774,
    remainder: 3791,
};

impl LcgParams {
    /// Modulus as a 32-bit register bound.
    #[inline]
    pub const fn modulus_i32(&self) -> i32 {
        self.modulus as i32
    }

    /// Advances `s` with Schrage's decomposition.
    ///
    /// `s` must lie in `(0, m)`; the result does too.
    #[inline]
    pub const fn schrage_step(&self, s: i32) -> i32 {
        let s = s as i64;
        let k = s / self.quotient;
        let mut next = self.multiplier * (s - self.quotient * k) - self.remainder * k;
        if next < 0 {
            next += self.modulus;
        }
        next as i32
    }

    /// Advances `s` by computing `(a * s) mod m` directly in 64 bits.
    #[inline]
    pub const fn wide_step(&self, s: i32) -> i32 {
        ((self.multiplier * s as i64) % self.modulus) as i32
    }

    /// Advances `s` with the selected method.
    #[inline]
    pub const fn step(&self, s: i32, method: StepMethod) -> i32 {
        match method {
            StepMethod::Schrage => self.schrage_step(s),
            StepMethod::WideMultiply => self.wide_step(s),
        }
    }
}

/// Combines the two component registers into `z` in `[1, m1 - 1]`.
#[inline]
pub const fn combine(s1: i32, s2: i32) -> i32 {
    // Both registers are positive, so the difference cannot overflow.
    let mut z = s1 - s2;
    if z < 1 {
        z += FIRST.modulus_i32() - 1;
    }
    z
}

/// How a component register is advanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMethod {
    /// Schrage's divide-remultiply-subtract decomposition.
    #[default]
    Schrage,
    /// Direct `(a * s) mod m` with a 64-bit product.
    WideMultiply,
}

impl FromStr for StepMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "schrage" => Ok(StepMethod::Schrage),
            "wide_multiply" | "wide-multiply" | "wide" => Ok(StepMethod::WideMultiply),
            _ => Err(ConfigError::InvalidValue {
                name: "step_method",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StepMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMethod::Schrage => write!(f, "schrage"),
            StepMethod::WideMultiply => write!(f, "wide_multiply"),
        }
    }
}

/// Factor mapping the combined integer `z` onto (0, 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputScale {
    /// The historical literal `4.656613e-10`, for bit-compatible streams.
    #[default]
    Legacy,
    /// The exact reciprocal `1.0 / 2147483563.0`.
    Exact,
}

impl OutputScale {
    /// Literal constant used by existing consumers of the stream.
    pub const LEGACY_FACTOR: f64 = 4.656613e-10;

    /// Reciprocal of the first modulus.
    pub const EXACT_FACTOR: f64 = 1.0 / 2_147_483_563.0;

    /// Returns the multiplication factor.
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            OutputScale::Legacy => Self::LEGACY_FACTOR,
            OutputScale::Exact => Self::EXACT_FACTOR,
        }
    }

    /// Maps a combined value `z` in `[1, m1 - 1]` onto (0, 1).
    #[inline]
    pub fn scale(self, z: i32) -> f64 {
        z as f64 * self.factor()
    }
}

impl FromStr for OutputScale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(OutputScale::Legacy),
            "exact" => Ok(OutputScale::Exact),
            _ => Err(ConfigError::InvalidValue {
                name: "output_scale",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputScale::Legacy => write!(f, "legacy"),
            OutputScale::Exact => write!(f, "exact"),
        }
    }
}
