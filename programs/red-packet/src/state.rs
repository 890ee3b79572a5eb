use anchor_lang::prelude::*;

use crate::constants::{packet_group_size, MAX_DISPLAY_NAME_LEN, MAX_GROUP_NAME_LEN, MAX_RECIPIENTS};

/// A named red packet group, one account per group name
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct PacketGroup {
    /// Identity that created the group; the only caller allowed to distribute
    pub giver: Pubkey,
    /// Group key (case-sensitive, also the PDA seed)
    pub name: String,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Set once the packet has been split and paid out
    pub distributed: bool,
    /// Mint that was distributed (default until distributed)
    pub mint: Pubkey,
    /// Total amount that was distributed (zero until distributed)
    pub total_amount: u64,
    /// Recipients in creation order; the position is the recipient index
    pub recipients: Vec<Recipient>,
}

/// Recipient entry in a packet group
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipient {
    /// Recipient's wallet address
    pub address: Pubkey,
    /// Display name supplied by the giver
    pub name: String,
    /// Amount paid to this entry (zero until distributed)
    pub share: u64,
}

/// Recipient as returned by `get_packet_recipient`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecipientView {
    pub address: Pubkey,
    pub name: String,
}

/// Group overview as returned by `get_packet_summary`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PacketSummary {
    pub giver: Pubkey,
    pub recipient_count: u32,
    pub distributed: bool,
    pub mint: Pubkey,
    pub total_amount: u64,
}

impl PacketGroup {
    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }

    pub fn summary(&self) -> PacketSummary {
        PacketSummary {
            giver: self.giver,
            recipient_count: self.recipients.len() as u32,
            distributed: self.distributed,
            mint: self.mint,
            total_amount: self.total_amount,
        }
    }
}

// Compile-time size checks to catch accidental layout changes
const _: () = assert!(packet_group_size(0) == 8 + 32 + (4 + MAX_GROUP_NAME_LEN) + 1 + 1 + 32 + 8 + 4);
const _: () = assert!(packet_group_size(1) - packet_group_size(0) == 32 + (4 + MAX_DISPLAY_NAME_LEN) + 8);
const _: () = assert!(packet_group_size(MAX_RECIPIENTS) <= 10 * 1024); // CPI account creation limit
