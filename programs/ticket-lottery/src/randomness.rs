use anchor_lang::prelude::*;
use solana_program::hash::hashv;

/// Source of the index used to pick a winning ticket.
///
/// Implementations return a value in `[0, upper)`; `upper` is always the
/// round's ticket cap and is never zero.
pub trait RandomnessSource {
    fn draw(&self, upper: u64) -> u64;
}

/// Low-grade entropy mixed from values available while the filling ticket
/// is processed: the buyer's key, the cluster time and the current slot.
///
/// Each input is predictable on its own. Good enough for a non-adversarial
/// lottery, not for anything holding real value.
pub struct ClockEntropy {
    pub caller: Pubkey,
    pub unix_timestamp: i64,
    pub slot: u64,
}

impl ClockEntropy {
    pub fn new(caller: Pubkey, clock: &Clock) -> Self {
        Self {
            caller,
            unix_timestamp: clock.unix_timestamp,
            slot: clock.slot,
        }
    }

    fn seed(&self) -> u64 {
        let digest = hashv(&[
            self.caller.as_ref(),
            &self.unix_timestamp.to_le_bytes(),
            &self.slot.to_le_bytes(),
        ]);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest.to_bytes()[..8]);
        u64::from_le_bytes(prefix)
    }
}

impl RandomnessSource for ClockEntropy {
    fn draw(&self, upper: u64) -> u64 {
        self.seed() % upper
    }
}
