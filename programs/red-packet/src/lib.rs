use anchor_lang::prelude::*;

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod registry;
pub mod split;
pub mod state;
mod utils;


use instructions::*;
use state::{PacketSummary, RecipientView};

declare_id!("ELrAoEkxF7j4RwRmTndBrybARdHTsSphB6jNnNiMqmWj");

#[program]
pub mod red_packet {
    use super::*;

    /// Registers a named group of recipients with display names
    /// The signer becomes the group's giver
    ///
    /// `name` is a PDA seed: 1..=32 bytes. Longer names fail during account
    /// validation, before `InvalidGroupName` can be reported.
    pub fn create_group(
        ctx: Context<CreateGroup>,
        name: String,
        recipients: Vec<Pubkey>,
        names: Vec<String>,
    ) -> Result<()> {
        instructions::create_group::handler(ctx, name, recipients, names)
    }

    /// Pulls `total_amount` from the giver and splits it randomly across the group
    /// Only callable by the giver, once per group
    /// `name` is the PDA seed used at creation (at most 32 bytes)
    pub fn distribute_packet<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributePacket<'info>>,
        name: String,
        mint: Pubkey,
        total_amount: u64,
    ) -> Result<()> {
        instructions::distribute_packet::handler(ctx, name, mint, total_amount)
    }

    /// Returns the giver of a group
    pub fn get_packet_giver(ctx: Context<ReadPacketGroup>, name: String) -> Result<Pubkey> {
        instructions::get_packet_giver::handler(ctx, name)
    }

    /// Returns the recipient indexes of a group (0..N)
    pub fn get_packet_recipient_indexes(
        ctx: Context<ReadPacketGroup>,
        name: String,
    ) -> Result<Vec<u32>> {
        instructions::get_packet_recipient_indexes::handler(ctx, name)
    }

    /// Returns the recipient at `index` (address and display name)
    pub fn get_packet_recipient(
        ctx: Context<ReadPacketGroup>,
        name: String,
        index: u32,
    ) -> Result<RecipientView> {
        instructions::get_packet_recipient::handler(ctx, name, index)
    }

    /// Returns giver, recipient count and distribution status of a group
    pub fn get_packet_summary(
        ctx: Context<ReadPacketGroup>,
        name: String,
    ) -> Result<PacketSummary> {
        instructions::get_packet_summary::handler(ctx, name)
    }
}
