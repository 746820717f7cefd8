//! Token creation.
//!
//! The mint is a PDA of `(creator, off_chain_id)`, so a creator cannot mint
//! the same identifier twice — the second derivation lands on an existing
//! account and `init` rejects it. The whole genesis supply goes to the
//! creator, the creation fee goes to the lamport fee collector, metadata is
//! registered, and mint authority is revoked, all in one instruction. Any
//! step failing rolls back the rest.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2,
        CreateMetadataAccountsV3, Metadata,
    },
    token::{self, spl_token::instruction::AuthorityType, Mint, Token, TokenAccount},
};

use crate::consts::{GENESIS_SUPPLY, TOKEN_DECIMALS};
use crate::errors::CurveError;
use crate::state::CurveConfiguration;

#[event]
pub struct TokenCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub off_chain_id: String,
    pub total_supply: u64,
}

#[derive(Accounts)]
#[instruction(name: String, symbol: String, off_chain_id: String)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [CurveConfiguration::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, CurveConfiguration>,

    /// Deterministic mint for this (creator, off_chain_id) pair
    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = creator,
        seeds = [b"mint", creator.key().as_ref(), off_chain_id.as_bytes()],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    /// Receives the full genesis supply
    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    /// CHECK: receives the flat creation fee, matched against the config
    #[account(
        mut,
        address = config.fee_collector_sol,
    )]
    pub fee_collector_sol: AccountInfo<'info>,

    /// CHECK: created and validated by the token metadata program
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), mint.key().as_ref()],
        seeds::program = token_metadata_program.key(),
        bump,
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateToken<'info> {
    pub fn create_token(
        &mut self,
        name: String,
        symbol: String,
        off_chain_id: String,
    ) -> Result<()> {
        require!(!self.config.paused, CurveError::ProtocolPaused);

        // Flat creation fee, collected up front. The system program fails
        // the transfer (and with it the whole instruction) if the creator
        // cannot cover it.
        if self.config.creation_fee > 0 {
            system_program::transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    system_program::Transfer {
                        from: self.creator.to_account_info(),
                        to: self.fee_collector_sol.to_account_info(),
                    },
                ),
                self.config.creation_fee,
            )?;
        }

        // Configured genesis amount, in smallest units; falls back to the
        // 1B-token default when the configuration leaves it at zero.
        let total_supply = if self.config.initial_pool_amount > 0 {
            self.config.initial_pool_amount
        } else {
            GENESIS_SUPPLY
                .checked_mul(10u64.pow(TOKEN_DECIMALS as u32))
                .ok_or(CurveError::ArithmeticOverflow)?
        };

        token::mint_to(
            CpiContext::new(
                self.token_program.to_account_info(),
                token::MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.creator_token_account.to_account_info(),
                    authority: self.creator.to_account_info(),
                },
            ),
            total_supply,
        )?;

        create_metadata_accounts_v3(
            CpiContext::new(
                self.token_metadata_program.to_account_info(),
                CreateMetadataAccountsV3 {
                    metadata: self.metadata.to_account_info(),
                    mint: self.mint.to_account_info(),
                    mint_authority: self.creator.to_account_info(),
                    update_authority: self.creator.to_account_info(),
                    payer: self.creator.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                    rent: self.rent.to_account_info(),
                },
            ),
            DataV2 {
                name: name.clone(),
                symbol: symbol.clone(),
                uri: String::new(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            false, // is_mutable
            true,  // update_authority_is_signer
            None,
        )?;

        // Supply cap is permanent: nobody can mint past genesis.
        token::set_authority(
            CpiContext::new(
                self.token_program.to_account_info(),
                token::SetAuthority {
                    account_or_mint: self.mint.to_account_info(),
                    current_authority: self.creator.to_account_info(),
                },
            ),
            AuthorityType::MintTokens,
            None,
        )?;

        msg!("Token {} created by {}", self.mint.key(), self.creator.key());

        emit!(TokenCreated {
            mint: self.mint.key(),
            creator: self.creator.key(),
            name,
            symbol,
            off_chain_id,
            total_supply,
        });

        Ok(())
    }
}
