use anchor_lang::prelude::*;

#[event]
pub struct GroupCreated {
    pub group: Pubkey,
    pub giver: Pubkey,
    pub name: String,
    pub recipient_count: u32,
    pub timestamp: i64,
}

#[event]
pub struct PacketDistributed {
    pub group: Pubkey,
    pub giver: Pubkey,
    pub name: String,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub total_amount: u64,
    /// Share per recipient, in recipient index order
    pub shares: Vec<u64>,
    pub timestamp: i64,
}
