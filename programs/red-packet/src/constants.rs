// PDA seeds
pub const PACKET_GROUP_SEED: &[u8] = b"packet_group";
pub const CUSTODY_SEED: &[u8] = b"custody";

// Recipient limits
pub const MIN_RECIPIENTS: usize = 2;
pub const MAX_RECIPIENTS: usize = 20;

// String limits (group name doubles as a PDA seed, so it is capped at the seed length)
pub const MAX_GROUP_NAME_LEN: usize = 32;
pub const MAX_DISPLAY_NAME_LEN: usize = 32;

// Domain separator for the envelope entropy hash
pub const ENTROPY_DOMAIN: &[u8] = b"envelope";

// Recipient entry size:
// - address: 32
// - name: 4 (length prefix) + MAX_DISPLAY_NAME_LEN
// - share: 8
pub const RECIPIENT_SIZE: usize = 32 + 4 + MAX_DISPLAY_NAME_LEN + 8; // 76 bytes

// PacketGroup size without recipient entries:
// - discriminator: 8
// - giver: 32
// - name: 4 + MAX_GROUP_NAME_LEN
// - bump: 1
// - distributed: 1
// - mint: 32
// - total_amount: 8
// - recipients vec length prefix: 4
pub const PACKET_GROUP_BASE_SIZE: usize = 8 + 32 + 4 + MAX_GROUP_NAME_LEN + 1 + 1 + 32 + 8 + 4; // 122 bytes

/// Account space for a group holding `recipient_count` recipients
pub const fn packet_group_size(recipient_count: usize) -> usize {
    PACKET_GROUP_BASE_SIZE + RECIPIENT_SIZE * recipient_count
}
