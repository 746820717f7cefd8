//! Buy: exchange asset in, pool token out.
//!
//! The fee comes off the input and goes straight to the fee collector; the
//! net amount enters the exchange reserve and the constant-product formula
//! prices the token output. Quote, transfers, and the reserve update all
//! commit or all fail together.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::amm::math;
use crate::amm::ConstantProductCurve;
use crate::errors::CurveError;
use crate::state::{CurveConfiguration, LiquidityPool};

/// Emitted by both `buy` and `sell`.
#[event]
pub struct TradeEvent {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub is_buy: bool,
    pub amount_in: u64,
    pub amount_out: u64,
    pub fee: u64,
    pub reserve_token_after: u64,
    pub reserve_exchange_after: u64,
}

#[derive(Accounts)]
pub struct Buy<'info> {
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
        init_if_needed,
        payer = user,
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

    /// CHECK: fee destination owner, matched against the config
    #[account(address = config.fee_collector_token)]
    pub fee_collector: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = exchange_mint,
        associated_token::authority = fee_collector,
    )]
    pub fee_collector_exchange_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    pub fn buy(&mut self, amount_in: u64, min_amount_out: u64) -> Result<u64> {
        require!(!self.config.paused, CurveError::ProtocolPaused);
        require!(self.pool.is_active(), CurveError::ZeroLiquidity);

        let quote = ConstantProductCurve::quote(
            self.pool.reserve_exchange,
            self.pool.reserve_token,
            amount_in,
            self.config.fee_percentage,
        )?;
        require!(quote.amount_out >= min_amount_out, CurveError::SlippageExceeded);

        // Fee straight from the trader to the collector.
        if quote.fee > 0 {
            transfer_checked(
                CpiContext::new(
                    self.token_program.to_account_info(),
                    TransferChecked {
                        from: self.user_exchange_account.to_account_info(),
                        mint: self.exchange_mint.to_account_info(),
                        to: self.fee_collector_exchange_account.to_account_info(),
                        authority: self.user.to_account_info(),
                    },
                ),
                quote.fee,
                self.exchange_mint.decimals,
            )?;
        }

        // Net input into the exchange vault.
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
            quote.net_in,
            self.exchange_mint.decimals,
        )?;

        // Token output from the pool vault, signed by the pool PDA.
        let token_mint_key = self.token_mint.key();
        let exchange_mint_key = self.exchange_mint.key();
        let pool_seeds = &[
            LiquidityPool::SEED,
            token_mint_key.as_ref(),
            exchange_mint_key.as_ref(),
            &[self.pool.bump],
        ];
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.pool_token_vault.to_account_info(),
                    mint: self.token_mint.to_account_info(),
                    to: self.user_token_account.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                &[&pool_seeds[..]],
            ),
            quote.amount_out,
            self.token_mint.decimals,
        )?;

        let pool = &mut self.pool;
        pool.reserve_exchange = math::checked_add(pool.reserve_exchange, quote.net_in)?;
        pool.reserve_token = math::checked_sub(pool.reserve_token, quote.amount_out)?;

        emit!(TradeEvent {
            pool: self.pool.key(),
            trader: self.user.key(),
            is_buy: true,
            amount_in,
            amount_out: quote.amount_out,
            fee: quote.fee,
            reserve_token_after: self.pool.reserve_token,
            reserve_exchange_after: self.pool.reserve_exchange,
        });

        Ok(quote.amount_out)
    }
}
