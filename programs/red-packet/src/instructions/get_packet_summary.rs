use anchor_lang::prelude::*;

use super::get_packet_giver::ReadPacketGroup;
use crate::{registry::GroupStore, state::PacketSummary};

/// Returns giver, recipient count and distribution status
pub fn handler(ctx: Context<ReadPacketGroup>, _name: String) -> Result<PacketSummary> {
    let group = ctx.accounts.packet_group.to_account_info().load()?;
    Ok(group.summary())
}
