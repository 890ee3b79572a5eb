use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{CUSTODY_SEED, PACKET_GROUP_SEED},
    distribution::distribute,
    errors::ErrorCode,
    events::PacketDistributed,
    ledger::SplTokenLedger,
    split::EnvelopeEntropy,
};

#[derive(Accounts)]
#[instruction(name: String, mint: Pubkey)]
pub struct DistributePacket<'info> {
    /// CHECK: Loaded and written through the group store; an empty account means
    /// the name was never registered (GroupNotFound)
    #[account(
        mut,
        seeds = [PACKET_GROUP_SEED, name.as_bytes()],
        bump
    )]
    pub packet_group: UncheckedAccount<'info>,

    /// Must be the group's giver (checked in handler to report Unauthorized)
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Validated after the giver check, when funds are pulled
    /// (owner, mint and token program; GiverTokenAccountInvalid otherwise)
    #[account(mut)]
    pub caller_token_account: UncheckedAccount<'info>,

    #[account(
        constraint = mint_account.key() == mint @ ErrorCode::MintMismatch
    )]
    pub mint_account: InterfaceAccount<'info, Mint>,

    /// CHECK: Data-less PDA; delegate on the giver's token account and owner of the vault
    #[account(
        seeds = [CUSTODY_SEED],
        bump
    )]
    pub custody: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = mint_account,
        associated_token::authority = custody,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Splits `total_amount` of `mint` across the group's recipients
/// Only callable by the giver, once per group
/// remaining_accounts: recipient ATAs in recipient index order
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributePacket<'info>>,
    name: String,
    mint: Pubkey,
    total_amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let group_info = ctx.accounts.packet_group.to_account_info();
    let caller = ctx.accounts.caller.key();
    let mut entropy = EnvelopeEntropy::from_clock(&group_info.key(), &caller, &clock);

    // Setup PDA signer
    let custody_bump = [ctx.bumps.custody];
    let seeds: &[&[u8]] = &[CUSTODY_SEED, &custody_bump];
    let signer_seeds = &[seeds];

    let custody_info = ctx.accounts.custody.to_account_info();
    let giver_token_account = ctx.accounts.caller_token_account.to_account_info();
    let mut ledger = SplTokenLedger {
        giver: caller,
        giver_token_account: &giver_token_account,
        mint: &ctx.accounts.mint_account,
        vault: &ctx.accounts.vault,
        custody: &custody_info,
        token_program: &ctx.accounts.token_program,
        recipient_atas: ctx.remaining_accounts,
        signer_seeds,
    };

    let group = distribute(&group_info, &mut ledger, &caller, &mint, total_amount, &mut entropy)?;

    #[cfg(feature = "verbose")]
    msg!("Distributed {} across {} recipients", total_amount, group.recipient_count());

    emit!(PacketDistributed {
        group: group_info.key(),
        giver: group.giver,
        name,
        mint,
        vault: ctx.accounts.vault.key(),
        total_amount,
        shares: group.recipients.iter().map(|r| r.share).collect(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
