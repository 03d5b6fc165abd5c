//! Register pair of the combined generator.

use super::step::{FIRST, SECOND};
use crate::error::StateError;

/// The two component registers of a seeded generator.
///
/// Always satisfies `0 < s1 < 2147483563` and `0 < s2 < 2147483399`.
/// Values of this type are snapshots: mutating a copy never affects the
/// generator it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LcgState {
    s1: i32,
    s2: i32,
}

impl LcgState {
    /// Creates a state from registers already inside their valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfRange`] if either register is zero,
    /// negative, or not below its component's modulus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combined_lcg::LcgState;
    ///
    /// let state = LcgState::new(1, 1).unwrap();
    /// assert_eq!((state.s1(), state.s2()), (1, 1));
    ///
    /// assert!(LcgState::new(2147483563, 1).is_err());
    /// ```
    pub fn new(s1: i32, s2: i32) -> Result<Self, StateError> {
        check_register("s1", s1, FIRST.modulus_i32())?;
        check_register("s2", s2, SECOND.modulus_i32())?;
        Ok(Self { s1, s2 })
    }

    /// Creates a state from arbitrary 32-bit values, reducing each modulo
    /// its component's modulus and mapping zero to one.
    ///
    /// Registers that are already valid are kept unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combined_lcg::LcgState;
    ///
    /// let state = LcgState::from_raw(0, -1);
    /// assert_eq!(state.s1(), 1);
    /// assert_eq!(state.s2(), 2147483398);
    /// ```
    pub fn from_raw(s1: i32, s2: i32) -> Self {
        Self {
            s1: normalise(s1, FIRST.modulus_i32()),
            s2: normalise(s2, SECOND.modulus_i32()),
        }
    }

    /// First component register.
    #[inline]
    pub fn s1(&self) -> i32 {
        self.s1
    }

    /// Second component register.
    #[inline]
    pub fn s2(&self) -> i32 {
        self.s2
    }

    /// Advances both registers once.
    #[inline]
    pub(crate) fn advance(&mut self, method: super::StepMethod) {
        self.s1 = FIRST.step(self.s1, method);
        self.s2 = SECOND.step(self.s2, method);
    }
}

fn check_register(register: &'static str, value: i32, modulus: i32) -> Result<(), StateError> {
    if value > 0 && value < modulus {
        Ok(())
    } else {
        Err(StateError::OutOfRange {
            register,
            value,
            modulus,
        })
    }
}

#[inline]
fn normalise(value: i32, modulus: i32) -> i32 {
    match value.rem_euclid(modulus) {
        0 => 1,
        reduced => reduced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(LcgState::new(1, 1).is_ok());
        assert!(LcgState::new(2_147_483_562, 2_147_483_398).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_registers() {
        assert!(matches!(
            LcgState::new(0, 1),
            Err(StateError::OutOfRange { register: "s1", .. })
        ));
        assert!(matches!(
            LcgState::new(1, 2_147_483_399),
            Err(StateError::OutOfRange { register: "s2", .. })
        ));
        assert!(LcgState::new(-7, 1).is_err());
    }

    #[test]
    fn test_from_raw_keeps_valid_values() {
        let state = LcgState::from_raw(1, 123_456);
        assert_eq!(state, LcgState::new(1, 123_456).unwrap());
    }

    #[test]
    fn test_from_raw_reduces_out_of_range() {
        let state = LcgState::from_raw(i32::MAX, i32::MIN);
        // i32::MAX = 2147483647 = m1 + 84
        assert_eq!(state.s1(), 84);
        assert!(state.s2() > 0 && state.s2() < 2_147_483_399);

        let state = LcgState::from_raw(2_147_483_563, 2_147_483_399);
        assert_eq!((state.s1(), state.s2()), (1, 1));
    }
}
