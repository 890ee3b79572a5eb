use anchor_lang::prelude::*;

use super::get_packet_giver::ReadPacketGroup;
use crate::{registry::GroupStore, state::RecipientView};

/// Returns the recipient at `index` as (address, display name)
pub fn handler(ctx: Context<ReadPacketGroup>, _name: String, index: u32) -> Result<RecipientView> {
    let group = ctx.accounts.packet_group.to_account_info().load()?;
    group.recipient(index)
}
