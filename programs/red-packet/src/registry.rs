use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DISPLAY_NAME_LEN, MAX_GROUP_NAME_LEN, MAX_RECIPIENTS, MIN_RECIPIENTS},
    errors::ErrorCode,
    state::{PacketGroup, Recipient, RecipientView},
};

/// Storage for a single packet group
///
/// On-chain the store is the group's PDA account; the PDA derivation from the group
/// name is the lookup. `commit` must be callable before any token CPI so the
/// distributed flag is persisted ahead of external calls.
pub trait GroupStore {
    /// Loads the group; fails with `GroupNotFound` when the name was never registered
    fn load(&self) -> Result<PacketGroup>;

    /// Persists the group
    fn commit(&self, group: &PacketGroup) -> Result<()>;
}

impl<'info> GroupStore for AccountInfo<'info> {
    fn load(&self) -> Result<PacketGroup> {
        // An uninitialized PDA has no data
        require!(!self.data_is_empty(), ErrorCode::GroupNotFound);
        require_keys_eq!(*self.owner, crate::ID, ErrorCode::InvalidGroupAccount);

        let data = self.try_borrow_data()?;
        PacketGroup::try_deserialize(&mut &data[..])
            .map_err(|_| error!(ErrorCode::InvalidGroupAccount))
    }

    fn commit(&self, group: &PacketGroup) -> Result<()> {
        let mut data = self.try_borrow_mut_data()?;
        group.try_serialize(&mut &mut data[..])
    }
}

/// Validates group-creation input
///
/// Check order: recipient count, then address/name parity, then string bounds.
/// A single address with no names therefore reports `InsufficientRecipients`.
pub fn validate_group_input(name: &str, recipients: &[Pubkey], names: &[String]) -> Result<()> {
    require!(recipients.len() >= MIN_RECIPIENTS, ErrorCode::InsufficientRecipients);
    require!(recipients.len() <= MAX_RECIPIENTS, ErrorCode::TooManyRecipients);
    require!(recipients.len() == names.len(), ErrorCode::LengthMismatch);

    require!(
        !name.is_empty() && name.len() <= MAX_GROUP_NAME_LEN,
        ErrorCode::InvalidGroupName
    );
    require!(
        names.iter().all(|n| n.len() <= MAX_DISPLAY_NAME_LEN),
        ErrorCode::DisplayNameTooLong
    );

    Ok(())
}

impl PacketGroup {
    /// Builds a validated, undistributed group
    pub fn new(
        giver: Pubkey,
        name: String,
        bump: u8,
        recipients: Vec<Pubkey>,
        names: Vec<String>,
    ) -> Result<Self> {
        validate_group_input(&name, &recipients, &names)?;

        let recipients = recipients
            .into_iter()
            .zip(names)
            .map(|(address, name)| Recipient {
                address,
                name,
                share: 0,
            })
            .collect();

        Ok(Self {
            giver,
            name,
            bump,
            distributed: false,
            mint: Pubkey::default(),
            total_amount: 0,
            recipients,
        })
    }

    /// Recipient indexes in creation order (0..N)
    pub fn recipient_indexes(&self) -> Vec<u32> {
        (0..self.recipients.len() as u32).collect()
    }

    /// Recipient at `index` as (address, display name)
    pub fn recipient(&self, index: u32) -> Result<RecipientView> {
        let recipient = self
            .recipients
            .get(index as usize)
            .ok_or(ErrorCode::IndexOutOfRange)?;

        Ok(RecipientView {
            address: recipient.address,
            name: recipient.name.clone(),
        })
    }
}
