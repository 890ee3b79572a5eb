use anchor_lang::prelude::*;

use crate::{
    constants::{packet_group_size, MAX_RECIPIENTS, PACKET_GROUP_SEED},
    events::GroupCreated,
    state::PacketGroup,
};

#[derive(Accounts)]
#[instruction(name: String, recipients: Vec<Pubkey>)]
pub struct CreateGroup<'info> {
    #[account(
        init,
        payer = giver,
        space = packet_group_size(recipients.len().min(MAX_RECIPIENTS)),
        seeds = [PACKET_GROUP_SEED, name.as_bytes()],
        bump
    )]
    pub packet_group: Account<'info, PacketGroup>,

    /// Creator of the group; the only identity allowed to distribute it
    #[account(mut)]
    pub giver: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Registers a named group of recipients
/// Recipients and display names are parallel arrays; order defines recipient indexes
pub fn handler(
    ctx: Context<CreateGroup>,
    name: String,
    recipients: Vec<Pubkey>,
    names: Vec<String>,
) -> Result<()> {
    let giver = ctx.accounts.giver.key();
    let group = PacketGroup::new(giver, name, ctx.bumps.packet_group, recipients, names)?;

    let recipient_count = group.recipient_count() as u32;
    let group_name = group.name.clone();
    ctx.accounts.packet_group.set_inner(group);

    emit!(GroupCreated {
        group: ctx.accounts.packet_group.key(),
        giver,
        name: group_name,
        recipient_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
