//! # Bonding Curve Launchpad
//!
//! A constant-product AMM for launching tokens on Solana.
//!
//! ## Overview
//!
//! Anyone can create a token, open a pool against an exchange asset
//! (wrapped SOL for native quoting), provide liquidity, and trade on the
//! curve. A singleton configuration account holds the fee policy.
//!
//! ## How it works
//! - Pricing is `x * y = k` with the fee taken from the trade input.
//! - All accounting is integer-only; every division floors toward the pool.
//! - Liquidity providers hold proportional shares and settle against
//!   current reserves, not their historical deposits.

use anchor_lang::prelude::*;

pub mod amm;
pub mod consts;
pub mod errors;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use instructions::*;

// Replace with your deployed program ID
declare_id!("35gLkfqMXJUgrEntHV8C5UugnSjCeQRoCAgSYSstZEag");

/// Bonding curve launchpad program
#[program]
pub mod bonding_curve {
    use super::*;

    /// Initialize the deployment-wide fee configuration (once)
    pub fn initialize(
        ctx: Context<Initialize>,
        fee_percentage: u64,
        creation_fee: u64,
        withdrawal_fee_bps: u64,
        initial_pool_amount: u64,
        fee_collector_token: Pubkey,
        fee_collector_sol: Pubkey,
    ) -> Result<()> {
        ctx.accounts.initialize(
            fee_percentage,
            creation_fee,
            withdrawal_fee_bps,
            initial_pool_amount,
            fee_collector_token,
            fee_collector_sol,
            &ctx.bumps,
        )
    }

    /// Replace the mutable configuration fields (admin only)
    pub fn update_configuration(
        ctx: Context<UpdateConfiguration>,
        fee_percentage: u64,
        creation_fee: u64,
        withdrawal_fee_bps: u64,
        initial_pool_amount: u64,
        fee_collector_token: Pubkey,
        fee_collector_sol: Pubkey,
        paused: bool,
    ) -> Result<()> {
        ctx.accounts.update_configuration(
            fee_percentage,
            creation_fee,
            withdrawal_fee_bps,
            initial_pool_amount,
            fee_collector_token,
            fee_collector_sol,
            paused,
        )
    }

    /// Create a token with a deterministic mint and fixed genesis supply
    pub fn create_token(
        ctx: Context<CreateToken>,
        name: String,
        symbol: String,
        off_chain_id: String,
    ) -> Result<()> {
        ctx.accounts.create_token(name, symbol, off_chain_id)
    }

    /// Create an empty pool for a (token, exchange token) pair
    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        ctx.accounts.create_pool(&ctx.bumps)
    }

    /// Deposit both assets and receive proportional pool shares
    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_token: u64,
        amount_exchange: u64,
    ) -> Result<()> {
        ctx.accounts
            .add_liquidity(amount_token, amount_exchange, &ctx.bumps)
    }

    /// Burn pool shares for the proportional slice of both reserves
    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, share_amount: u64) -> Result<()> {
        ctx.accounts.remove_liquidity(share_amount)
    }

    /// Swap exchange asset for pool tokens
    pub fn buy(ctx: Context<Buy>, amount_in: u64, min_amount_out: u64) -> Result<u64> {
        ctx.accounts.buy(amount_in, min_amount_out)
    }

    /// Swap pool tokens for exchange asset
    pub fn sell(ctx: Context<Sell>, amount_in: u64, min_amount_out: u64) -> Result<u64> {
        ctx.accounts.sell(amount_in, min_amount_out)
    }

    /// Quote a buy without executing it
    pub fn calculate_buy_amount(ctx: Context<Calculate>, amount_in: u64) -> Result<u64> {
        ctx.accounts.calculate_buy_amount(amount_in)
    }

    /// Quote a sell without executing it
    pub fn calculate_sell_amount(ctx: Context<Calculate>, amount_in: u64) -> Result<u64> {
        ctx.accounts.calculate_sell_amount(amount_in)
    }

    /// Spot-price valuation of the minted supply
    pub fn calculate_market_cap(ctx: Context<Calculate>) -> Result<u64> {
        ctx.accounts.calculate_market_cap()
    }
}
