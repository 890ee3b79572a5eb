//! Envelope split: divides a total across recipients with pseudo-random shares
//!
//! Shares are drawn in recipient order. Each draw is bounded by twice the mean of
//! what is left and clamped so every unpaid recipient can still receive one unit.
//! The last recipient takes the remainder, so the shares always sum to the total.
//!
//! The entropy is derived from on-chain metadata (slot, timestamp, keys). It is
//! predictable to validators and to the giver, who picks when to submit. That is
//! acceptable for a social gift and unsuitable when recipients could profit from
//! steering the outcome.

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::{constants::ENTROPY_DOMAIN, errors::ErrorCode};

/// Deterministic stream of pseudo-random words derived from a 32-byte seed
#[derive(Clone, Debug)]
pub struct EnvelopeEntropy {
    seed: [u8; 32],
    counter: u64,
}

impl EnvelopeEntropy {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    /// Seeds from the group, the caller and the current clock
    pub fn from_clock(group: &Pubkey, caller: &Pubkey, clock: &Clock) -> Self {
        let seed = hashv(&[
            ENTROPY_DOMAIN,
            group.as_ref(),
            caller.as_ref(),
            &clock.slot.to_le_bytes(),
            &clock.unix_timestamp.to_le_bytes(),
        ]);
        Self::new(seed.to_bytes())
    }

    pub fn next_u64(&mut self) -> u64 {
        let digest = hashv(&[&self.seed, &self.counter.to_le_bytes()]).to_bytes();
        self.counter = self.counter.wrapping_add(1);

        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(word)
    }
}

/// Splits `total` into `count` shares, each at least 1, summing exactly to `total`
pub fn split_envelope(total: u64, count: usize, entropy: &mut EnvelopeEntropy) -> Result<Vec<u64>> {
    require!(total > 0, ErrorCode::InvalidAmount);
    require!(total >= count as u64, ErrorCode::AmountBelowRecipientCount);

    let mut shares = Vec::with_capacity(count);
    let mut remaining = total;

    // `unpaid` counts the current recipient plus everyone after it
    for unpaid in (2..=count as u64).rev() {
        // remaining >= unpaid holds here, so the ceiling is at least 2
        let ceiling: u64 = (remaining as u128 * 2 / unpaid as u128)
            .try_into()
            .map_err(|_| ErrorCode::MathOverflow)?;
        let draw = entropy
            .next_u64()
            .checked_rem(ceiling)
            .ok_or(ErrorCode::MathOverflow)?
            + 1;

        // Leave at least one unit for each recipient after this one
        let headroom = remaining
            .checked_sub(unpaid - 1)
            .ok_or(ErrorCode::MathOverflow)?;
        let share = draw.min(headroom).max(1);

        shares.push(share);
        remaining -= share;
    }

    if count > 0 {
        shares.push(remaining);
    }

    Ok(shares)
}
