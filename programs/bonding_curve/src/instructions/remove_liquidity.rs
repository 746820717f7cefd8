//! Liquidity removal.
//!
//! Burns shares for the proportional slice of both reserves. A configurable
//! basis-point cut of each payout is routed to the fee collector's token
//! accounts; the remainder goes to the provider. Removal is deliberately
//! not gated on `paused` so providers can always exit.

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
pub struct LiquidityRemoved {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub shares_burned: u64,
    pub token_out: u64,
    pub exchange_out: u64,
    pub token_fee: u64,
    pub exchange_fee: u64,
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
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

    /// CHECK: fee destination owner, matched against the config
    #[account(address = config.fee_collector_token)]
    pub fee_collector: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = fee_collector,
    )]
    pub fee_collector_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = exchange_mint,
        associated_token::authority = fee_collector,
    )]
    pub fee_collector_exchange_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [LiquidityProvider::SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = provider.bump,
    )]
    pub provider: Account<'info, LiquidityProvider>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(&mut self, share_amount: u64) -> Result<()> {
        require!(
            share_amount <= self.provider.shares,
            CurveError::InsufficientShares
        );

        let withdrawal = liquidity::withdraw(
            self.pool.reserve_token,
            self.pool.reserve_exchange,
            self.pool.total_shares,
            share_amount,
        )?;

        let token_fee = math::bps_fee(withdrawal.token_out, self.config.withdrawal_fee_bps)?;
        let exchange_fee = math::bps_fee(withdrawal.exchange_out, self.config.withdrawal_fee_bps)?;

        let token_mint_key = self.token_mint.key();
        let exchange_mint_key = self.exchange_mint.key();
        let pool_seeds = &[
            LiquidityPool::SEED,
            token_mint_key.as_ref(),
            exchange_mint_key.as_ref(),
            &[self.pool.bump],
        ];
        let signer_seeds = &[&pool_seeds[..]];

        self.pay_out(
            &self.pool_token_vault,
            &self.user_token_account,
            &self.token_mint,
            math::checked_sub(withdrawal.token_out, token_fee)?,
            signer_seeds,
        )?;
        self.pay_out(
            &self.pool_exchange_vault,
            &self.user_exchange_account,
            &self.exchange_mint,
            math::checked_sub(withdrawal.exchange_out, exchange_fee)?,
            signer_seeds,
        )?;

        if token_fee > 0 {
            self.pay_out(
                &self.pool_token_vault,
                &self.fee_collector_token_account,
                &self.token_mint,
                token_fee,
                signer_seeds,
            )?;
        }
        if exchange_fee > 0 {
            self.pay_out(
                &self.pool_exchange_vault,
                &self.fee_collector_exchange_account,
                &self.exchange_mint,
                exchange_fee,
                signer_seeds,
            )?;
        }

        let pool = &mut self.pool;
        pool.reserve_token = math::checked_sub(pool.reserve_token, withdrawal.token_out)?;
        pool.reserve_exchange = math::checked_sub(pool.reserve_exchange, withdrawal.exchange_out)?;
        pool.total_shares = math::checked_sub(pool.total_shares, share_amount)?;
        self.provider.shares = math::checked_sub(self.provider.shares, share_amount)?;

        emit!(LiquidityRemoved {
            pool: self.pool.key(),
            provider: self.user.key(),
            shares_burned: share_amount,
            token_out: withdrawal.token_out,
            exchange_out: withdrawal.exchange_out,
            token_fee,
            exchange_fee,
        });

        Ok(())
    }

    fn pay_out(
        &self,
        from: &InterfaceAccount<'info, TokenAccount>,
        to: &InterfaceAccount<'info, TokenAccount>,
        mint: &InterfaceAccount<'info, Mint>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: from.to_account_info(),
                    mint: mint.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            mint.decimals,
        )
    }
}
