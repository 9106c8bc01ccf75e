use anchor_lang::prelude::*;

use crate::constants::MAX_TICKETS_PER_ROUND;
use crate::error::LotteryError;
use crate::randomness::RandomnessSource;
use crate::treasury::{Payout, Settlement, Treasury};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum RoundStatus {
    #[default]
    Closed,
    Open,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct LotteryRound {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only key allowed to start rounds. Fixed at initialization.
    pub operator: Pubkey,

    /// Number of rounds started so far. `0` until the first round.
    pub round_id: u64,

    /// `Open` while tickets are on sale.
    pub status: RoundStatus,

    /// The price (in lamports) required to purchase a single ticket.
    pub ticket_price: u64,

    /// Tickets sold in a round. Selling the last one resolves the round.
    pub max_tickets: u64,

    /// The total number of tickets issued for the current round.
    pub ticket_count: u64,

    /// Lamports collected for the current round. Zero once it resolves.
    pub lottery_pot_amount: u64,

    /// Set when the round resolves, cleared by the next `start_round`.
    pub winning_ticket_number: Option<u64>,

    /// Owner of the winning ticket.
    pub winner: Option<Pubkey>,

    /// Ticket ledger: `tickets[n - 1]` owns ticket `n`.
    #[max_len(MAX_TICKETS_PER_ROUND)]
    pub tickets: Vec<Pubkey>,
}

/// Outcome of the purchase that fills a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub round_id: u64,
    pub winning_ticket_number: u64,
    pub winner: Pubkey,
    pub prize: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub ticket_number: u64,
    pub resolution: Option<Resolution>,
}

/// Read-only snapshot returned by the `round_summary` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: u64,
    pub is_open: bool,
    pub ticket_price: u64,
    pub max_tickets: u64,
    pub ticket_count: u64,
    pub lottery_pot_amount: u64,
    pub winning_ticket_number: u64,
    pub recent_winner: Pubkey,
}

impl LotteryRound {
    pub fn new(operator: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            operator,
            round_id: 0,
            status: RoundStatus::Closed,
            ticket_price: 0,
            max_tickets: 0,
            ticket_count: 0,
            lottery_pot_amount: 0,
            winning_ticket_number: None,
            winner: None,
            tickets: Vec::new(),
        }
    }

    /// Opens a new round and discards the ledger and result of the last one.
    pub fn start_round(&mut self, caller: Pubkey, ticket_price: u64, max_tickets: u64) -> Result<()> {
        require_keys_eq!(caller, self.operator, LotteryError::NotAuthorized);
        require!(
            ticket_price > 0 && max_tickets > 0,
            LotteryError::InvalidParameters
        );
        require!(
            max_tickets <= MAX_TICKETS_PER_ROUND as u64,
            LotteryError::InvalidParameters
        );
        // The full pot must fit in a u64 so later additions never overflow.
        require!(
            ticket_price.checked_mul(max_tickets).is_some(),
            LotteryError::InvalidParameters
        );
        require!(!self.is_open(), LotteryError::RoundAlreadyOpen);

        self.round_id += 1;
        self.status = RoundStatus::Open;
        self.ticket_price = ticket_price;
        self.max_tickets = max_tickets;
        self.ticket_count = 0;
        self.lottery_pot_amount = 0;
        self.winning_ticket_number = None;
        self.winner = None;
        self.tickets.clear();

        Ok(())
    }

    /// Sells the next ticket to `payer`.
    ///
    /// The ticket that reaches `max_tickets` also draws the winner and pays
    /// out the pot. State is staged on a copy and only committed once the
    /// treasury has settled, so any failure leaves the round untouched.
    pub fn buy_ticket(
        &mut self,
        payer: Pubkey,
        payment: u64,
        randomness: &dyn RandomnessSource,
        treasury: &mut dyn Treasury,
    ) -> Result<Purchase> {
        require!(self.is_open(), LotteryError::RoundNotOpen);
        require!(payment == self.ticket_price, LotteryError::IncorrectPayment);

        let mut next = self.clone();
        let ticket_number = next.record_ticket(payer);
        let resolution = if next.ticket_count == next.max_tickets {
            Some(next.resolve(randomness))
        } else {
            None
        };

        treasury.settle(&Settlement {
            payer,
            payment,
            payout: resolution.as_ref().map(|resolution| Payout {
                winner: resolution.winner,
                amount: resolution.prize,
            }),
        })?;

        *self = next;
        Ok(Purchase {
            ticket_number,
            resolution,
        })
    }

    fn record_ticket(&mut self, owner: Pubkey) -> u64 {
        self.tickets.push(owner);
        self.ticket_count = self.tickets.len() as u64;
        // Bounded by ticket_price * max_tickets, checked in start_round.
        self.lottery_pot_amount += self.ticket_price;
        self.ticket_count
    }

    fn resolve(&mut self, randomness: &dyn RandomnessSource) -> Resolution {
        let index = randomness.draw(self.max_tickets) % self.max_tickets;
        let winning_ticket_number = index + 1;
        let winner = self.tickets[index as usize];
        let prize = self.lottery_pot_amount;

        msg!("Winning ticket: {}", winning_ticket_number);
        msg!("Winner: {}", winner);

        self.status = RoundStatus::Closed;
        self.lottery_pot_amount = 0;
        self.winning_ticket_number = Some(winning_ticket_number);
        self.winner = Some(winner);

        Resolution {
            round_id: self.round_id,
            winning_ticket_number,
            winner,
            prize,
        }
    }

    /// Ticket numbers held by `owner` in purchase order.
    pub fn player_tickets(&self, owner: &Pubkey) -> Vec<u64> {
        self.tickets
            .iter()
            .enumerate()
            .filter(|(_, holder)| *holder == owner)
            .map(|(index, _)| index as u64 + 1)
            .collect()
    }

    pub fn is_open(&self) -> bool {
        self.status == RoundStatus::Open
    }

    pub fn recent_winner(&self) -> Pubkey {
        self.winner.unwrap_or_default()
    }

    pub fn winning_ticket(&self) -> u64 {
        self.winning_ticket_number.unwrap_or_default()
    }

    /// True when the next ticket sold closes and resolves the round.
    pub fn fills_round(&self) -> bool {
        self.is_open() && self.ticket_count + 1 == self.max_tickets
    }

    /// Distinct ticket holders of the current round in first-purchase order.
    pub fn holders(&self) -> Vec<Pubkey> {
        let mut holders: Vec<Pubkey> = Vec::new();
        for owner in &self.tickets {
            if !holders.contains(owner) {
                holders.push(*owner);
            }
        }
        holders
    }

    pub fn tickets_remaining(&self) -> u64 {
        self.max_tickets.saturating_sub(self.ticket_count)
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            round_id: self.round_id,
            is_open: self.is_open(),
            ticket_price: self.ticket_price,
            max_tickets: self.max_tickets,
            ticket_count: self.ticket_count,
            lottery_pot_amount: self.lottery_pot_amount,
            winning_ticket_number: self.winning_ticket(),
            recent_winner: self.recent_winner(),
        }
    }
}
