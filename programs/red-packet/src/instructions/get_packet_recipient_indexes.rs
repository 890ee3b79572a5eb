use anchor_lang::prelude::*;

use super::get_packet_giver::ReadPacketGroup;
use crate::registry::GroupStore;

/// Returns recipient indexes 0..N in creation order
pub fn handler(ctx: Context<ReadPacketGroup>, _name: String) -> Result<Vec<u32>> {
    let group = ctx.accounts.packet_group.to_account_info().load()?;
    Ok(group.recipient_indexes())
}
