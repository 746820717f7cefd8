//! Global curve configuration.
//!
//! A single PDA per deployment holding the fee policy. Every trading and
//! liquidity instruction reads it; only the admin may rewrite it.

use anchor_lang::prelude::*;

/// Deployment-wide configuration account (singleton PDA)
///
/// Seeds: ["curve_configuration"]
#[account]
#[derive(InitSpace)]
pub struct CurveConfiguration {
    /// Only this address may call `update_configuration`
    pub admin: Pubkey,

    /// Trade fee in basis points (100 = 1%, max 10000)
    pub fee_percentage: u64,

    /// Flat lamport fee charged on `create_token`
    pub creation_fee: u64,

    /// Fee on `remove_liquidity` payouts, in basis points
    pub withdrawal_fee_bps: u64,

    /// Default seed quantity for newly created pools
    pub initial_pool_amount: u64,

    /// Receives token-denominated fees
    pub fee_collector_token: Pubkey,

    /// Receives lamport-denominated fees
    pub fee_collector_sol: Pubkey,

    /// Emergency switch gating trades and liquidity ops
    pub paused: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl CurveConfiguration {
    pub const SEED: &'static [u8] = b"curve_configuration";

    /// Fee rates are basis points over a 10_000 denominator.
    pub fn is_valid_fee(bps: u64) -> bool {
        bps <= 10_000
    }
}
