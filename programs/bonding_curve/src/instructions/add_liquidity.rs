//! Liquidity provisioning.
//!
//! Prices the deposit with the pure share math, pulls exactly the accepted
//! amounts into the pool vaults, then credits shares. The token transfers
//! run before any state is written, and a failed CPI aborts the whole
//! instruction, so reserves and shares can never drift apart.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::amm::liquidity;
use crate::amm::math;
use crate::errors::CurveError;
use crate::state::{CurveConfiguration, LiquidityPool, LiquidityProvider};

#[event]
pub struct LiquidityAdded {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub token_in: u64,
    pub exchange_in: u64,
    pub shares_minted: u64,
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CurveConfiguration::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, CurveConfiguration>,

    #[account(
        mut,
        seeds = [LiquidityPool::SEED, token_mint.key().as_ref(), exchange_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LiquidityPool>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub exchange_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = pool,
    )]
    pub pool_token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = exchange_mint,
        associated_token::authority = pool,
    )]
    pub pool_exchange_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = exchange_mint,
        associated_token::authority = user,
    )]
    pub user_exchange_account: InterfaceAccount<'info, TokenAccount>,

    /// Share ledger for this (pool, user) pair
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + LiquidityProvider::INIT_SPACE,
        seeds = [LiquidityProvider::SEED, pool.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub provider: Account<'info, LiquidityProvider>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(
        &mut self,
        amount_token: u64,
        amount_exchange: u64,
        bumps: &AddLiquidityBumps,
    ) -> Result<()> {
        require!(!self.config.paused, CurveError::ProtocolPaused);

        let deposit = liquidity::deposit(
            self.pool.reserve_token,
            self.pool.reserve_exchange,
            self.pool.total_shares,
            amount_token,
            amount_exchange,
        )?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_token_account.to_account_info(),
                    mint: self.token_mint.to_account_info(),
                    to: self.pool_token_vault.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            deposit.token_in,
            self.token_mint.decimals,
        )?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_exchange_account.to_account_info(),
                    mint: self.exchange_mint.to_account_info(),
                    to: self.pool_exchange_vault.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            deposit.exchange_in,
            self.exchange_mint.decimals,
        )?;

        let pool = &mut self.pool;
        pool.reserve_token = math::checked_add(pool.reserve_token, deposit.token_in)?;
        pool.reserve_exchange = math::checked_add(pool.reserve_exchange, deposit.exchange_in)?;
        pool.total_shares = math::checked_add(pool.total_shares, deposit.shares)?;

        self.provider.bump = bumps.provider;
        self.provider.shares = math::checked_add(self.provider.shares, deposit.shares)?;

        emit!(LiquidityAdded {
            pool: self.pool.key(),
            provider: self.user.key(),
            token_in: deposit.token_in,
            exchange_in: deposit.exchange_in,
            shares_minted: deposit.shares,
        });

        Ok(())
    }
}
