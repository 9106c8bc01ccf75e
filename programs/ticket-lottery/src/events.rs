use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub round_id: u64,
    pub ticket_price: u64,
    pub max_tickets: u64,
}

#[event]
pub struct TicketPurchased {
    pub round_id: u64,
    pub buyer: Pubkey,
    pub ticket_number: u64,
    pub tickets_remaining: u64,
}

#[event]
pub struct RoundResolved {
    pub round_id: u64,
    pub winning_ticket_number: u64,
    pub winner: Pubkey,
    /// Lamports moved to the winner.
    pub prize: u64,
}
