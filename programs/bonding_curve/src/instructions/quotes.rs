//! View-only quote instructions.
//!
//! Pure reads over the pool and configuration; no account is mutated.
//! Clients simulate these to price a trade before sending it.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::amm::ConstantProductCurve;
use crate::state::{CurveConfiguration, LiquidityPool};

#[derive(Accounts)]
pub struct Calculate<'info> {
    #[account(
        seeds = [CurveConfiguration::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, CurveConfiguration>,

    #[account(
        seeds = [LiquidityPool::SEED, token_mint.key().as_ref(), exchange_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LiquidityPool>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub exchange_mint: InterfaceAccount<'info, Mint>,
}

impl<'info> Calculate<'info> {
    /// Tokens received for `amount_in` of the exchange asset.
    pub fn calculate_buy_amount(&self, amount_in: u64) -> Result<u64> {
        let quote = ConstantProductCurve::quote(
            self.pool.reserve_exchange,
            self.pool.reserve_token,
            amount_in,
            self.config.fee_percentage,
        )?;
        Ok(quote.amount_out)
    }

    /// Exchange asset received for `amount_in` tokens.
    pub fn calculate_sell_amount(&self, amount_in: u64) -> Result<u64> {
        let quote = ConstantProductCurve::quote(
            self.pool.reserve_token,
            self.pool.reserve_exchange,
            amount_in,
            self.config.fee_percentage,
        )?;
        Ok(quote.amount_out)
    }

    /// Minted supply valued at the pool's spot price, in exchange units.
    pub fn calculate_market_cap(&self) -> Result<u64> {
        ConstantProductCurve::market_cap(
            self.token_mint.supply,
            self.pool.reserve_token,
            self.pool.reserve_exchange,
        )
    }
}
