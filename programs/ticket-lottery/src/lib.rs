#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;
pub mod treasury;

pub use state::RoundSummary;

declare_id!("ms7UjwVbQqrm6YNFD2iPpLkxPznyVDXn6tVPE35E2zp");

#[program]
pub mod ticket_lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn start_round(ctx: Context<StartRound>, ticket_price: u64, max_tickets: u64) -> Result<()> {
        process_start_round(ctx, ticket_price, max_tickets)
    }

    pub fn buy_ticket<'info>(
        ctx: Context<'_, '_, '_, 'info, BuyTicket<'info>>,
        amount: u64,
    ) -> Result<()> {
        process_buy_ticket(ctx, amount)
    }

    pub fn get_player_tickets(ctx: Context<ReadLottery>, owner: Pubkey) -> Result<Vec<u64>> {
        process_get_player_tickets(ctx, owner)
    }

    pub fn lottery_status(ctx: Context<ReadLottery>) -> Result<bool> {
        process_lottery_status(ctx)
    }

    pub fn ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
        process_ticket_price(ctx)
    }

    pub fn max_tickets(ctx: Context<ReadLottery>) -> Result<u64> {
        process_max_tickets(ctx)
    }

    pub fn recent_winner(ctx: Context<ReadLottery>) -> Result<Pubkey> {
        process_recent_winner(ctx)
    }

    pub fn winning_ticket_number(ctx: Context<ReadLottery>) -> Result<u64> {
        process_winning_ticket_number(ctx)
    }

    pub fn round_summary(ctx: Context<ReadLottery>) -> Result<RoundSummary> {
        process_round_summary(ctx)
    }
}
