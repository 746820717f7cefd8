//! Pool creation.
//!
//! Initializes the per-pair ledger and its two vault token accounts with
//! empty reserves. No funds move here; the pool only becomes tradable once
//! `add_liquidity` funds both sides. Re-creating an existing pair fails at
//! the PDA `init`.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::state::LiquidityPool;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub exchange_mint: Pubkey,
    pub creator: Pubkey,
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub exchange_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = payer,
        space = 8 + LiquidityPool::INIT_SPACE,
        seeds = [LiquidityPool::SEED, token_mint.key().as_ref(), exchange_mint.key().as_ref()],
        bump,
    )]
    pub pool: Account<'info, LiquidityPool>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = pool,
    )]
    pub pool_token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = exchange_mint,
        associated_token::authority = pool,
    )]
    pub pool_exchange_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(&mut self, bumps: &CreatePoolBumps) -> Result<()> {
        self.pool.set_inner(LiquidityPool::new(
            self.payer.key(),
            self.token_mint.key(),
            self.exchange_mint.key(),
            bumps.pool,
        ));

        msg!("Pool created for {} / {}", self.token_mint.key(), self.exchange_mint.key());

        emit!(PoolCreated {
            pool: self.pool.key(),
            token_mint: self.token_mint.key(),
            exchange_mint: self.exchange_mint.key(),
            creator: self.payer.key(),
        });

        Ok(())
    }
}
