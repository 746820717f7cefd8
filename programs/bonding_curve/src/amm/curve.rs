//! # Constant-Product Pricing Engine
//!
//! Quote computation for a fee-on-input constant-product pool.
//!
//! ## The Core Invariant
//!
//! ```text
//! reserve_in * reserve_out = k
//! ```
//!
//! A trade deposits `net_in` on one side and withdraws `amount_out` on the
//! other, holding `k` (approximately) constant:
//!
//! ```text
//! 1. fee     = floor(amount_in * fee_bps / 10000)
//! 2. net_in  = amount_in - fee
//! 3. out     = floor(net_in * reserve_out / (reserve_in + net_in))
//! ```
//!
//! The output floors, so the post-trade product is always `>= k`: rounding
//! loss accrues to the pool, never to the trader. Buys and sells are the
//! same formula with the reserve roles swapped.
//!
//! Everything in this module is a pure function over integers. Token
//! transfers, account validation, and state persistence live in the
//! instruction handlers.

use anchor_lang::prelude::*;

use crate::amm::math;
use crate::errors::CurveError;

/// Result of pricing a trade against current reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Fee taken from the input before the swap formula is applied.
    pub fee: u64,
    /// Input net of fee, the amount actually entering the reserve.
    pub net_in: u64,
    /// Amount leaving the opposite reserve.
    pub amount_out: u64,
}

/// Constant-product curve over a pair of reserves.
pub struct ConstantProductCurve;

impl ConstantProductCurve {
    /// Price `amount_in` of the input asset against `(reserve_in, reserve_out)`.
    ///
    /// Fee is deducted from the input; the net amount drives the swap.
    /// Fails with `ZeroLiquidity` until both reserves are funded,
    /// `ZeroAmount` on empty input, and `InsufficientOutput` when the
    /// trade is too small to move the curve by a single unit.
    pub fn quote(
        reserve_in: u64,
        reserve_out: u64,
        amount_in: u64,
        fee_bps: u64,
    ) -> Result<Quote> {
        require!(amount_in > 0, CurveError::ZeroAmount);
        require!(reserve_in > 0 && reserve_out > 0, CurveError::ZeroLiquidity);

        let fee = math::bps_fee(amount_in, fee_bps)?;
        let net_in = math::checked_sub(amount_in, fee)?;
        require!(net_in > 0, CurveError::InsufficientOutput);

        let new_reserve_in = math::checked_add(reserve_in, net_in)?;
        let amount_out = math::mul_div(net_in, reserve_out, new_reserve_in)?;

        require!(amount_out > 0, CurveError::InsufficientOutput);

        Ok(Quote {
            fee,
            net_in,
            amount_out,
        })
    }

    /// Spot valuation of the full minted supply, in exchange-asset units.
    ///
    /// `market_cap = floor(total_supply * reserve_exchange / reserve_token)`.
    pub fn market_cap(
        total_supply: u64,
        reserve_token: u64,
        reserve_exchange: u64,
    ) -> Result<u64> {
        require!(reserve_token > 0, CurveError::ZeroLiquidity);
        math::mul_div(total_supply, reserve_exchange, reserve_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(reserve_in: u64, reserve_out: u64) -> u128 {
        reserve_in as u128 * reserve_out as u128
    }

    #[test]
    fn test_zero_fee_halving() {
        // Equal reserves, input equal to the reserve, no fee:
        // out = R - R*R/(R+R) = R/2 exactly.
        let r = 1_000_000_000;
        let q = ConstantProductCurve::quote(r, r, r, 0).unwrap();
        assert_eq!(q.fee, 0);
        assert_eq!(q.amount_out, 500_000_000);
    }

    #[test]
    fn test_fee_is_deducted_from_input() {
        let q = ConstantProductCurve::quote(1_000_000_000, 1_000_000_000, 1_000_000, 100).unwrap();
        assert_eq!(q.fee, 10_000); // 1% of input
        assert_eq!(q.net_in, 990_000);
        assert!(q.amount_out < 990_000); // price impact on top of the fee
    }

    #[test]
    fn test_product_never_decreases() {
        let cases = [
            (1_000_000_000u64, 1_000_000_000u64, 1_000_000_000u64, 100u64),
            (5_000_000, 900_000_000_000, 123_457, 30),
            (1, 1_000_000_000_000, 7, 0),
            (777_777_777, 333_333_333, 12_345_678, 10_000 - 1),
        ];
        for (rin, rout, amount, fee_bps) in cases {
            let before = product(rin, rout);
            if let Ok(q) = ConstantProductCurve::quote(rin, rout, amount, fee_bps) {
                let after = product(rin + q.net_in, rout - q.amount_out);
                assert!(after >= before, "product shrank for {:?}", (rin, rout, amount));
            }
        }
    }

    #[test]
    fn test_quote_requires_both_reserves() {
        assert_eq!(
            ConstantProductCurve::quote(0, 1_000_000_000, 1_000_000_000, 100)
                .unwrap_err(),
            CurveError::ZeroLiquidity.into()
        );
        assert_eq!(
            ConstantProductCurve::quote(1_000_000_000, 0, 1_000, 0).unwrap_err(),
            CurveError::ZeroLiquidity.into()
        );
    }

    #[test]
    fn test_zero_input_rejected() {
        assert_eq!(
            ConstantProductCurve::quote(1_000, 1_000, 0, 0).unwrap_err(),
            CurveError::ZeroAmount.into()
        );
    }

    #[test]
    fn test_full_fee_trade_rejected() {
        // A 100% fee consumes the entire input; nothing reaches the curve.
        assert_eq!(
            ConstantProductCurve::quote(1_000_000_000, 1_000, 100, 10_000).unwrap_err(),
            CurveError::InsufficientOutput.into()
        );
    }

    #[test]
    fn test_dust_trade_rejected() {
        // One net unit into a deep pool floors to zero output.
        assert_eq!(
            ConstantProductCurve::quote(1_000_000_000, 1_000, 1, 0).unwrap_err(),
            CurveError::InsufficientOutput.into()
        );
    }

    #[test]
    fn test_inexact_division_rounds_toward_pool() {
        // Reserves 1e9/1e9, 1e9 in at 100 bps: the output division is
        // inexact and must floor, leaving the product strictly above k.
        let (rin, rout, amount_in) = (1_000_000_000u64, 1_000_000_000u64, 1_000_000_000u64);
        let before = product(rin, rout);

        let q = ConstantProductCurve::quote(rin, rout, amount_in, 100).unwrap();
        assert_eq!(q.fee, 10_000_000);
        assert_eq!(q.amount_out, 497_487_437); // floor of 990e6 * 1e9 / 1990e6

        let after = product(rin + q.net_in, rout - q.amount_out);
        assert!(after > before);
    }

    #[test]
    fn test_round_trip_never_profitable() {
        // Sell tokens for exchange, then spend the proceeds buying back:
        // with a fee the trader always ends with fewer tokens than they sold.
        let (mut rt, mut re) = (1_000_000_000u64, 1_000_000_000u64);
        let sold = 50_000_000u64;

        let sell = ConstantProductCurve::quote(rt, re, sold, 100).unwrap();
        rt += sell.net_in;
        re -= sell.amount_out;

        let buy = ConstantProductCurve::quote(re, rt, sell.amount_out, 100).unwrap();
        assert!(buy.amount_out < sold);
    }

    #[test]
    fn test_zero_fee_round_trip_bounded_by_rounding() {
        let (mut rt, mut re) = (3_333_333_333u64, 7_777_777u64);
        let sold = 1_000_000u64;

        let sell = ConstantProductCurve::quote(rt, re, sold, 0).unwrap();
        rt += sell.net_in;
        re -= sell.amount_out;

        let buy = ConstantProductCurve::quote(re, rt, sell.amount_out, 0).unwrap();
        assert!(buy.amount_out <= sold);
    }

    #[test]
    fn test_market_cap() {
        // Spot price 2 exchange units per token, 1e9 supply.
        let cap =
            ConstantProductCurve::market_cap(1_000_000_000, 500_000_000, 1_000_000_000).unwrap();
        assert_eq!(cap, 2_000_000_000);
    }

    #[test]
    fn test_market_cap_requires_token_reserve() {
        assert_eq!(
            ConstantProductCurve::market_cap(1_000_000_000, 0, 1_000_000_000).unwrap_err(),
            CurveError::ZeroLiquidity.into()
        );
    }
}
