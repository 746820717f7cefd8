//! Pool and provider ledgers.
//!
//! One `LiquidityPool` exists per (token, exchange token) pair; the
//! wrapped-SOL mint on the exchange side covers the native-quoted case
//! with identical pricing. Pools are created empty and are never closed.

use anchor_lang::prelude::*;

/// Per-pair reserve ledger
///
/// Seeds: ["pool", token_mint, exchange_mint]
#[account]
#[derive(InitSpace)]
pub struct LiquidityPool {
    /// Who created the pool
    pub creator: Pubkey,

    /// Mint of the traded token
    pub token_mint: Pubkey,

    /// Mint of the quote-side asset (wrapped SOL for native quoting)
    pub exchange_mint: Pubkey,

    /// Traded-token units held by the pool vault
    pub reserve_token: u64,

    /// Exchange-asset units held by the pool vault
    pub reserve_exchange: u64,

    /// Outstanding provider shares
    pub total_shares: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl LiquidityPool {
    pub const SEED: &'static [u8] = b"pool";

    pub fn new(creator: Pubkey, token_mint: Pubkey, exchange_mint: Pubkey, bump: u8) -> Self {
        Self {
            creator,
            token_mint,
            exchange_mint,
            reserve_token: 0,
            reserve_exchange: 0,
            total_shares: 0,
            bump,
        }
    }

    /// Trading is only legal once both sides are funded.
    pub fn is_active(&self) -> bool {
        self.reserve_token > 0 && self.reserve_exchange > 0
    }
}

/// Per-(pool, provider) share ledger
///
/// Seeds: ["provider", pool, owner]
#[account]
#[derive(InitSpace)]
pub struct LiquidityProvider {
    /// Proportional claim on the pool's reserves
    pub shares: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl LiquidityProvider {
    pub const SEED: &'static [u8] = b"provider";
}
