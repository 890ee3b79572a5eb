//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use {
    super::serialization::{encode_string, encode_string_vec},
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("ELrAoEkxF7j4RwRmTndBrybARdHTsSphB6jNnNiMqmWj");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_CREATE_GROUP: [u8; 8] = [0x4f, 0x3c, 0x9e, 0x86, 0x3d, 0xc7, 0x38, 0xf8];
pub const DISCRIMINATOR_DISTRIBUTE_PACKET: [u8; 8] = [0x24, 0xc2, 0xa7, 0x91, 0x97, 0x17, 0xe5, 0x49];
pub const DISCRIMINATOR_GET_PACKET_GIVER: [u8; 8] = [0x12, 0xa3, 0x92, 0x65, 0x0c, 0xba, 0xfd, 0xed];
pub const DISCRIMINATOR_GET_PACKET_RECIPIENT_INDEXES: [u8; 8] = [0x3d, 0xa1, 0x71, 0x81, 0x28, 0xda, 0x86, 0x2a];
pub const DISCRIMINATOR_GET_PACKET_RECIPIENT: [u8; 8] = [0x48, 0x32, 0x97, 0xd6, 0xbc, 0x55, 0x30, 0x6a];
pub const DISCRIMINATOR_GET_PACKET_SUMMARY: [u8; 8] = [0x55, 0xfb, 0x7a, 0xbc, 0xd6, 0x6b, 0x63, 0xd4];

/// Derive packet group PDA
pub fn derive_packet_group(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"packet_group", name.as_bytes()], &PROGRAM_ID)
}

/// Derive custody PDA (giver's delegate and vault authority)
pub fn derive_custody() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"custody"], &PROGRAM_ID)
}

/// Derive vault address (ATA owned by custody)
pub fn derive_vault(custody: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(custody, mint)
}

/// Build create_group instruction
///
/// Accounts:
/// 0. packet_group (writable) - init
/// 1. giver (writable, signer)
/// 2. system_program
pub fn build_create_group(
    packet_group: Pubkey,
    giver: Pubkey,
    name: &str,
    recipients: &[Pubkey],
    names: &[&str],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_CREATE_GROUP);
    data.extend_from_slice(&encode_string(name));

    // Recipients vector: 4-byte length prefix + each pubkey
    data.extend_from_slice(&(recipients.len() as u32).to_le_bytes());
    for recipient in recipients {
        data.extend_from_slice(&recipient.to_bytes());
    }

    data.extend_from_slice(&encode_string_vec(names));

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(packet_group, false),
            AccountMeta::new(giver, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build distribute_packet instruction
///
/// Accounts:
/// 0. packet_group (writable)
/// 1. caller (writable, signer)
/// 2. caller_token_account (writable)
/// 3. mint_account
/// 4. custody
/// 5. vault (writable)
/// 6. token_program
/// 7. associated_token_program
/// 8. system_program
/// remaining_accounts: recipient ATAs (in recipient index order)
#[allow(clippy::too_many_arguments)]
pub fn build_distribute_packet(
    packet_group: Pubkey,
    caller: Pubkey,
    caller_token_account: Pubkey,
    mint: Pubkey,
    vault: Pubkey,
    name: &str,
    total_amount: u64,
    recipient_atas: &[Pubkey],
) -> Instruction {
    build_distribute_packet_with_mint_arg(
        packet_group,
        caller,
        caller_token_account,
        mint,
        mint,
        vault,
        name,
        total_amount,
        recipient_atas,
    )
}

/// Build distribute_packet with a mint argument that may differ from the mint account
#[allow(clippy::too_many_arguments)]
pub fn build_distribute_packet_with_mint_arg(
    packet_group: Pubkey,
    caller: Pubkey,
    caller_token_account: Pubkey,
    mint_account: Pubkey,
    mint_arg: Pubkey,
    vault: Pubkey,
    name: &str,
    total_amount: u64,
    recipient_atas: &[Pubkey],
) -> Instruction {
    let (custody, _) = derive_custody();

    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_DISTRIBUTE_PACKET);
    data.extend_from_slice(&encode_string(name));
    data.extend_from_slice(&mint_arg.to_bytes());
    data.extend_from_slice(&total_amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new(packet_group, false),
        AccountMeta::new(caller, true),
        AccountMeta::new(caller_token_account, false),
        AccountMeta::new_readonly(mint_account, false),
        AccountMeta::new_readonly(custody, false),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    // Add recipient ATAs as remaining_accounts
    for ata in recipient_atas {
        accounts.push(AccountMeta::new(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

fn build_read(discriminator: [u8; 8], packet_group: Pubkey, name: &str, extra: &[u8]) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&discriminator);
    data.extend_from_slice(&encode_string(name));
    data.extend_from_slice(extra);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(packet_group, false)],
        data,
    }
}

/// Build get_packet_giver instruction
///
/// Accounts:
/// 0. packet_group
pub fn build_get_packet_giver(packet_group: Pubkey, name: &str) -> Instruction {
    build_read(DISCRIMINATOR_GET_PACKET_GIVER, packet_group, name, &[])
}

/// Build get_packet_recipient_indexes instruction
pub fn build_get_packet_recipient_indexes(packet_group: Pubkey, name: &str) -> Instruction {
    build_read(DISCRIMINATOR_GET_PACKET_RECIPIENT_INDEXES, packet_group, name, &[])
}

/// Build get_packet_recipient instruction
pub fn build_get_packet_recipient(packet_group: Pubkey, name: &str, index: u32) -> Instruction {
    build_read(
        DISCRIMINATOR_GET_PACKET_RECIPIENT,
        packet_group,
        name,
        &index.to_le_bytes(),
    )
}

/// Build get_packet_summary instruction
pub fn build_get_packet_summary(packet_group: Pubkey, name: &str) -> Instruction {
    build_read(DISCRIMINATOR_GET_PACKET_SUMMARY, packet_group, name, &[])
}
