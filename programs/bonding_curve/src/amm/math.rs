//! Integer-only arithmetic helpers.
//!
//! All reserve and amount quantities are `u64` smallest-unit values.
//! Intermediates widen to `u128` so products of two reserves never
//! overflow before the dividing step. Every division floors; the
//! rounding loss always lands on the trader's side, never the pool's.

use anchor_lang::prelude::*;

use crate::consts::FEE_DENOMINATOR;
use crate::errors::CurveError;

/// `floor(a * b / c)` with a `u128` intermediate.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    if c == 0 {
        return err!(CurveError::DivisionByZero);
    }
    let wide = (a as u128)
        .checked_mul(b as u128)
        .ok_or(CurveError::ArithmeticOverflow)?
        / (c as u128);
    u64::try_from(wide).map_err(|_| error!(CurveError::ArithmeticOverflow))
}

/// Basis-point cut of `amount`, floored.
pub fn bps_fee(amount: u64, bps: u64) -> Result<u64> {
    mul_div(amount, bps, FEE_DENOMINATOR)
}

pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| error!(CurveError::ArithmeticOverflow))
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b)
        .ok_or_else(|| error!(CurveError::ArithmeticUnderflow))
}

/// Integer square root by Newton's method.
///
/// Computes `floor(sqrt(x))`; converges quadratically.
pub fn sqrt(x: u128) -> u128 {
    if x == 0 {
        return 0;
    }

    let mut z = (x + 1) / 2;
    let mut y = x;

    while z < y {
        y = z;
        z = (x / z + z) / 2;
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(1), 1);
        assert_eq!(sqrt(4), 2);
        assert_eq!(sqrt(10), 3); // floor(sqrt(10)) = 3
        assert_eq!(sqrt(1_000_000), 1000);
        let root = sqrt(u128::from(u64::MAX));
        assert!(root * root <= u128::from(u64::MAX));
    }

    #[test]
    fn test_mul_div_floors() {
        assert_eq!(mul_div(10, 10, 3).unwrap(), 33);
        assert_eq!(mul_div(7, 1, 2).unwrap(), 3);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // a * b overflows u64 but the quotient fits
        let a = u64::MAX;
        assert_eq!(mul_div(a, 1_000, 1_000).unwrap(), a);
    }

    #[test]
    fn test_mul_div_rejects_zero_divisor() {
        assert!(mul_div(1, 1, 0).is_err());
    }

    #[test]
    fn test_mul_div_rejects_oversized_quotient() {
        assert!(mul_div(u64::MAX, 2, 1).is_err());
    }

    #[test]
    fn test_bps_fee() {
        // 1% of 1 SOL worth of lamports
        assert_eq!(bps_fee(1_000_000_000, 100).unwrap(), 10_000_000);
        assert_eq!(bps_fee(1_000_000_000, 0).unwrap(), 0);
        // sub-unit fee floors to zero
        assert_eq!(bps_fee(99, 100).unwrap(), 0);
    }

    #[test]
    fn test_checked_sub_underflow() {
        assert!(checked_sub(1, 2).is_err());
        assert_eq!(checked_sub(2, 1).unwrap(), 1);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(checked_add(u64::MAX, 1).is_err());
    }
}
