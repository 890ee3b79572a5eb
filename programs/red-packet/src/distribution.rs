use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    ledger::TokenLedger,
    registry::GroupStore,
    split::{split_envelope, EnvelopeEntropy},
    state::PacketGroup,
};

/// Authorizes, splits and pays out a group's packet exactly once
///
/// Order of effects:
/// 1. load the group, check the caller is the giver and the packet is undistributed
/// 2. pre-flight every recipient account and compute the split
/// 3. commit the distributed group (flag, mint, total, shares) to the store
/// 4. pull the total from the giver, then push each share in recipient order
///
/// Step 3 precedes every ledger call, so a ledger that calls back into this function
/// for the same group sees `AlreadyDistributed`. Any error aborts the caller's
/// transaction, which reverts the commit and every transfer.
pub fn distribute<S, L>(
    store: &S,
    ledger: &mut L,
    caller: &Pubkey,
    mint: &Pubkey,
    total_amount: u64,
    entropy: &mut EnvelopeEntropy,
) -> Result<PacketGroup>
where
    S: GroupStore + ?Sized,
    L: TokenLedger + ?Sized,
{
    let mut group = store.load()?;

    require_keys_eq!(group.giver, *caller, ErrorCode::Unauthorized);
    require!(!group.distributed, ErrorCode::AlreadyDistributed);

    for (index, recipient) in group.recipients.iter().enumerate() {
        ledger.check_recipient(index, recipient)?;
    }

    let shares = split_envelope(total_amount, group.recipient_count(), entropy)?;

    group.distributed = true;
    group.mint = *mint;
    group.total_amount = total_amount;
    for (recipient, share) in group.recipients.iter_mut().zip(shares) {
        recipient.share = share;
    }
    store.commit(&group)?;

    ledger.transfer_from_giver(total_amount)?;

    for (index, recipient) in group.recipients.iter().enumerate() {
        ledger.transfer_to_recipient(index, recipient, recipient.share)?;

        #[cfg(feature = "verbose")]
        msg!("Paid {} to recipient {} ({})", recipient.share, index, recipient.address);
    }

    Ok(group)
}
