use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token, token_2022::{self, spl_token_2022::state::AccountState},
    token_interface::TokenAccount,
};

use crate::errors::ErrorCode;

/// Validates that a recipient ATA can receive a payout
/// Runs for every recipient before any funds move
pub fn validate_recipient_ata(
    ata_info: &AccountInfo,
    recipient_address: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<()> {
    // Must have data
    require!(!ata_info.data_is_empty(), ErrorCode::RecipientATADoesNotExist);

    // Must be the canonical ATA for recipient + mint
    let expected_ata =
        get_associated_token_address_with_program_id(recipient_address, mint, token_program);
    require_keys_eq!(ata_info.key(), expected_ata, ErrorCode::RecipientATAInvalid);

    // Must be owned by token program (SPL Token or Token-2022)
    let valid_owner = ata_info.owner == &token::ID || ata_info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenProgram);

    require!(ata_info.is_writable, ErrorCode::RecipientATAInvalid);

    // Try to deserialize
    let token_account = TokenAccount::try_deserialize(&mut &ata_info.data.borrow()[..])
        .map_err(|_| ErrorCode::RecipientATAInvalid)?;

    require_keys_eq!(token_account.owner, *recipient_address, ErrorCode::RecipientATAWrongOwner);
    require_keys_eq!(token_account.mint, *mint, ErrorCode::RecipientATAWrongMint);
    require!(
        token_account.state != AccountState::Frozen,
        ErrorCode::RecipientATAFrozen
    );

    Ok(())
}

/// Loads the giver's token account for the funding pull
/// Must be owned by the instruction's token program and hold `mint` for `giver`
pub fn load_giver_token_account(
    account_info: &AccountInfo,
    giver: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<TokenAccount> {
    require_keys_eq!(*account_info.owner, *token_program, ErrorCode::GiverTokenAccountInvalid);
    require!(account_info.is_writable, ErrorCode::GiverTokenAccountInvalid);

    let token_account = TokenAccount::try_deserialize(&mut &account_info.try_borrow_data()?[..])
        .map_err(|_| ErrorCode::GiverTokenAccountInvalid)?;

    require_keys_eq!(token_account.owner, *giver, ErrorCode::GiverTokenAccountInvalid);
    require_keys_eq!(token_account.mint, *mint, ErrorCode::GiverTokenAccountInvalid);

    Ok(token_account)
}
