use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    errors::ErrorCode,
    state::Recipient,
    utils::{load_giver_token_account, validate_recipient_ata},
};

/// Fungible-token capability the distribution engine depends on
///
/// Mirrors the ERC-20 `transferFrom` / `transfer` pair: funds are pulled from the
/// giver under a prior approval, then pushed from custody to each recipient.
pub trait TokenLedger {
    /// Checks that the recipient at `index` can be paid, without moving funds
    fn check_recipient(&self, index: usize, recipient: &Recipient) -> Result<()>;

    /// Pulls `amount` from the giver into custody
    ///
    /// Fails with `InsufficientAllowance` before `InsufficientBalance`.
    fn transfer_from_giver(&mut self, amount: u64) -> Result<()>;

    /// Pushes `amount` from custody to the recipient at `index`
    fn transfer_to_recipient(&mut self, index: usize, recipient: &Recipient, amount: u64) -> Result<()>;
}

/// SPL Token / Token-2022 ledger
///
/// The giver approves the custody PDA as delegate on their token account. The custody
/// PDA signs both the pull (as delegate) and the payouts (as vault owner).
/// `giver_token_account` is only read once the caller is known to be the giver.
/// `recipient_atas` holds one token account per recipient, in recipient index order.
pub struct SplTokenLedger<'a, 'info> {
    pub giver: Pubkey,
    pub giver_token_account: &'a AccountInfo<'info>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub custody: &'a AccountInfo<'info>,
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub recipient_atas: &'a [AccountInfo<'info>],
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplTokenLedger<'a, 'info> {
    fn recipient_ata(&self, index: usize) -> Result<&'a AccountInfo<'info>> {
        self.recipient_atas
            .get(index)
            .ok_or_else(|| error!(ErrorCode::InsufficientRemainingAccounts))
    }

    fn transfer_checked(&self, from: AccountInfo<'info>, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from,
            mint: self.mint.to_account_info(),
            to,
            authority: self.custody.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            self.signer_seeds,
        );
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

impl<'a, 'info> TokenLedger for SplTokenLedger<'a, 'info> {
    fn check_recipient(&self, index: usize, recipient: &Recipient) -> Result<()> {
        let ata = self.recipient_ata(index)?;
        validate_recipient_ata(
            ata,
            &recipient.address,
            &self.mint.key(),
            &self.token_program.key(),
        )
    }

    fn transfer_from_giver(&mut self, amount: u64) -> Result<()> {
        let source = load_giver_token_account(
            self.giver_token_account,
            &self.giver,
            &self.mint.key(),
            &self.token_program.key(),
        )?;

        // Allowance is only what is delegated to custody
        let allowance = match Option::<Pubkey>::from(source.delegate) {
            Some(delegate) if delegate == self.custody.key() => source.delegated_amount,
            _ => 0,
        };
        require!(allowance >= amount, ErrorCode::InsufficientAllowance);
        require!(source.amount >= amount, ErrorCode::InsufficientBalance);

        self.transfer_checked(self.giver_token_account.clone(), self.vault.to_account_info(), amount)
    }

    fn transfer_to_recipient(&mut self, index: usize, _recipient: &Recipient, amount: u64) -> Result<()> {
        let ata = self.recipient_ata(index)?;
        self.transfer_checked(self.vault.to_account_info(), ata.clone(), amount)
    }
}
