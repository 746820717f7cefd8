//! Liquidity share accounting.
//!
//! Providers hold fungible shares over the pool's two reserves. The first
//! deposit seeds the pool and receives `floor(sqrt(token * exchange))`
//! shares; later deposits are anchored on the token side and must carry a
//! matching amount of the exchange asset. Withdrawal pays out the current
//! proportional slice of both reserves, not the historical deposit — the
//! provider wears impermanent loss by construction.
//!
//! Pure integer functions; transfers and persistence happen in the
//! instruction handlers.

use anchor_lang::prelude::*;

use crate::amm::math;
use crate::errors::CurveError;

/// Amounts actually accepted by a deposit, and the shares minted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    pub token_in: u64,
    pub exchange_in: u64,
    pub shares: u64,
}

/// Reserve slices paid out for burned shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub token_out: u64,
    pub exchange_out: u64,
}

/// Price a deposit against current reserves.
///
/// On the first deposit both amounts must be positive and are accepted as
/// given. Afterwards the token side anchors the ratio: the required
/// exchange amount is derived from current reserves, anything offered
/// beyond it is left with the provider (capped), and offering less fails
/// with `RatioMismatch`.
pub fn deposit(
    reserve_token: u64,
    reserve_exchange: u64,
    total_shares: u64,
    amount_token: u64,
    amount_exchange: u64,
) -> Result<Deposit> {
    require!(amount_token > 0, CurveError::ZeroAmount);

    if total_shares == 0 {
        require!(amount_exchange > 0, CurveError::ZeroAmount);
        let shares = math::sqrt(amount_token as u128 * amount_exchange as u128);
        let shares = u64::try_from(shares).map_err(|_| error!(CurveError::ArithmeticOverflow))?;
        require!(shares > 0, CurveError::ZeroAmount);
        return Ok(Deposit {
            token_in: amount_token,
            exchange_in: amount_exchange,
            shares,
        });
    }

    require!(
        reserve_token > 0 && reserve_exchange > 0,
        CurveError::ZeroLiquidity
    );

    let required_exchange = math::mul_div(reserve_exchange, amount_token, reserve_token)?;
    require!(required_exchange > 0, CurveError::ZeroAmount);
    require!(amount_exchange >= required_exchange, CurveError::RatioMismatch);

    let shares = math::mul_div(total_shares, amount_token, reserve_token)?;
    require!(shares > 0, CurveError::ZeroAmount);

    Ok(Deposit {
        token_in: amount_token,
        exchange_in: required_exchange,
        shares,
    })
}

/// Price a withdrawal of `share_amount` out of `total_shares`.
///
/// Both payouts floor, so a full drain can strand at most one unit per
/// asset in the pool.
pub fn withdraw(
    reserve_token: u64,
    reserve_exchange: u64,
    total_shares: u64,
    share_amount: u64,
) -> Result<Withdrawal> {
    require!(share_amount > 0, CurveError::ZeroAmount);
    require!(share_amount <= total_shares, CurveError::InsufficientShares);

    Ok(Withdrawal {
        token_out: math::mul_div(reserve_token, share_amount, total_shares)?,
        exchange_out: math::mul_div(reserve_exchange, share_amount, total_shares)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_deposit_takes_geometric_mean() {
        let d = deposit(0, 0, 0, 4_000_000, 1_000_000).unwrap();
        assert_eq!(d.token_in, 4_000_000);
        assert_eq!(d.exchange_in, 1_000_000);
        assert_eq!(d.shares, 2_000_000); // sqrt(4e6 * 1e6)
    }

    #[test]
    fn test_first_deposit_rejects_zero_side() {
        assert_eq!(
            deposit(0, 0, 0, 1_000_000, 0).unwrap_err(),
            CurveError::ZeroAmount.into()
        );
        assert_eq!(
            deposit(0, 0, 0, 0, 1_000_000).unwrap_err(),
            CurveError::ZeroAmount.into()
        );
    }

    #[test]
    fn test_followup_deposit_is_proportional() {
        // Pool at 2:1, doubling the token side doubles the shares.
        let d = deposit(4_000_000, 2_000_000, 2_828_427, 4_000_000, 2_000_000).unwrap();
        assert_eq!(d.exchange_in, 2_000_000);
        assert_eq!(d.shares, 2_828_427);
    }

    #[test]
    fn test_followup_deposit_caps_excess_exchange() {
        let d = deposit(4_000_000, 2_000_000, 2_828_427, 1_000_000, 9_999_999).unwrap();
        assert_eq!(d.exchange_in, 500_000); // only the matching amount is pulled
    }

    #[test]
    fn test_followup_deposit_rejects_short_exchange() {
        assert_eq!(
            deposit(4_000_000, 2_000_000, 2_828_427, 1_000_000, 499_999).unwrap_err(),
            CurveError::RatioMismatch.into()
        );
    }

    #[test]
    fn test_round_trip_loses_at_most_one_unit_per_asset() {
        let d = deposit(0, 0, 0, 7_777_777, 3_333_333).unwrap();
        let w = withdraw(d.token_in, d.exchange_in, d.shares, d.shares).unwrap();
        assert!(d.token_in - w.token_out <= 1);
        assert!(d.exchange_in - w.exchange_out <= 1);
    }

    #[test]
    fn test_partial_withdraw_floors() {
        let w = withdraw(1_000_001, 999_999, 1_000_000, 333_333).unwrap();
        assert_eq!(w.token_out, 333_333);
        assert_eq!(w.exchange_out, 333_332);
    }

    #[test]
    fn test_withdraw_rejects_excess_shares() {
        assert_eq!(
            withdraw(1_000_000, 1_000_000, 1_000_000, 1_000_001).unwrap_err(),
            CurveError::InsufficientShares.into()
        );
    }
}
