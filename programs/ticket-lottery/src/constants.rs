use anchor_lang::prelude::*;

/// Seed of the PDA holding the round state, the ticket ledger and the pot.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on `max_tickets`. The buyer of the last ticket passes every
/// other holder as an account, and a legacy transaction fits about 35 keys
/// next to the payer, the lottery and the system program.
pub const MAX_TICKETS_PER_ROUND: usize = 25;
