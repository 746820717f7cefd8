//! Configuration bootstrap and updates.
//!
//! `initialize` runs once per deployment; re-running it fails because the
//! configuration PDA already exists. `update_configuration` replaces every
//! mutable field in one shot, admin only.

use anchor_lang::prelude::*;

use crate::errors::CurveError;
use crate::state::CurveConfiguration;

#[event]
pub struct ConfigurationInitialized {
    pub admin: Pubkey,
    pub fee_percentage: u64,
    pub creation_fee: u64,
    pub withdrawal_fee_bps: u64,
    pub initial_pool_amount: u64,
    pub fee_collector_token: Pubkey,
    pub fee_collector_sol: Pubkey,
}

#[event]
pub struct ConfigurationUpdated {
    pub fee_percentage: u64,
    pub creation_fee: u64,
    pub withdrawal_fee_bps: u64,
    pub initial_pool_amount: u64,
    pub fee_collector_token: Pubkey,
    pub fee_collector_sol: Pubkey,
    pub paused: bool,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the configuration admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created here; a second call fails)
    #[account(
        init,
        payer = admin,
        space = 8 + CurveConfiguration::INIT_SPACE,
        seeds = [CurveConfiguration::SEED],
        bump,
    )]
    pub config: Account<'info, CurveConfiguration>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        fee_percentage: u64,
        creation_fee: u64,
        withdrawal_fee_bps: u64,
        initial_pool_amount: u64,
        fee_collector_token: Pubkey,
        fee_collector_sol: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(
            CurveConfiguration::is_valid_fee(fee_percentage)
                && CurveConfiguration::is_valid_fee(withdrawal_fee_bps),
            CurveError::InvalidFeeRate
        );

        self.config.set_inner(CurveConfiguration {
            admin: self.admin.key(),
            fee_percentage,
            creation_fee,
            withdrawal_fee_bps,
            initial_pool_amount,
            fee_collector_token,
            fee_collector_sol,
            paused: false,
            bump: bumps.config,
        });

        msg!("Curve configuration initialized, admin {}", self.admin.key());

        emit!(ConfigurationInitialized {
            admin: self.admin.key(),
            fee_percentage,
            creation_fee,
            withdrawal_fee_bps,
            initial_pool_amount,
            fee_collector_token,
            fee_collector_sol,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct UpdateConfiguration<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CurveConfiguration::SEED],
        bump = config.bump,
        has_one = admin @ CurveError::Unauthorized,
    )]
    pub config: Account<'info, CurveConfiguration>,
}

impl<'info> UpdateConfiguration<'info> {
    /// Replaces every mutable field at once; the admin itself is fixed.
    #[allow(clippy::too_many_arguments)]
    pub fn update_configuration(
        &mut self,
        fee_percentage: u64,
        creation_fee: u64,
        withdrawal_fee_bps: u64,
        initial_pool_amount: u64,
        fee_collector_token: Pubkey,
        fee_collector_sol: Pubkey,
        paused: bool,
    ) -> Result<()> {
        require!(
            CurveConfiguration::is_valid_fee(fee_percentage)
                && CurveConfiguration::is_valid_fee(withdrawal_fee_bps),
            CurveError::InvalidFeeRate
        );

        let config = &mut self.config;
        config.fee_percentage = fee_percentage;
        config.creation_fee = creation_fee;
        config.withdrawal_fee_bps = withdrawal_fee_bps;
        config.initial_pool_amount = initial_pool_amount;
        config.fee_collector_token = fee_collector_token;
        config.fee_collector_sol = fee_collector_sol;
        config.paused = paused;

        emit!(ConfigurationUpdated {
            fee_percentage,
            creation_fee,
            withdrawal_fee_bps,
            initial_pool_amount,
            fee_collector_token,
            fee_collector_sol,
            paused,
        });

        Ok(())
    }
}
