use anchor_lang::prelude::*;

use crate::{constants::PACKET_GROUP_SEED, registry::GroupStore};

/// Read-only access to a group by name (shared by the query instructions)
#[derive(Accounts)]
#[instruction(name: String)]
pub struct ReadPacketGroup<'info> {
    /// CHECK: Loaded through the group store; an empty account means the name was
    /// never registered (GroupNotFound)
    #[account(
        seeds = [PACKET_GROUP_SEED, name.as_bytes()],
        bump
    )]
    pub packet_group: UncheckedAccount<'info>,
}

/// Returns the group's giver
pub fn handler(ctx: Context<ReadPacketGroup>, _name: String) -> Result<Pubkey> {
    let group = ctx.accounts.packet_group.to_account_info().load()?;
    Ok(group.giver)
}
