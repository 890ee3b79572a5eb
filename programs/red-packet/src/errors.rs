use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Recipients and names length mismatch")]
    LengthMismatch,

    #[msg("Must provide at least 2 addresses")]
    InsufficientRecipients,

    #[msg("Recipient count cannot exceed 20")]
    TooManyRecipients,

    #[msg("Group name must be between 1 and 32 bytes")]
    InvalidGroupName,

    #[msg("Recipient display name cannot exceed 32 bytes")]
    DisplayNameTooLong,

    #[msg("Group not found")]
    GroupNotFound,

    #[msg("Recipient index out of range")]
    IndexOutOfRange,

    #[msg("Only the giver can distribute the packet")]
    Unauthorized,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Packet already distributed")]
    AlreadyDistributed,

    #[msg("Total amount must be greater than zero")]
    InvalidAmount,

    #[msg("Total amount must cover at least one unit per recipient")]
    AmountBelowRecipientCount,

    #[msg("Recipient ATA does not exist")]
    RecipientATADoesNotExist,

    #[msg("Recipient ATA is invalid")]
    RecipientATAInvalid,

    #[msg("Recipient ATA has wrong owner")]
    RecipientATAWrongOwner,

    #[msg("Recipient ATA has wrong mint")]
    RecipientATAWrongMint,

    #[msg("Recipient ATA is frozen")]
    RecipientATAFrozen,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Account is not a packet group")]
    InvalidGroupAccount,

    #[msg("Token mint does not match")]
    MintMismatch,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Giver token account is invalid")]
    GiverTokenAccountInvalid,
}
