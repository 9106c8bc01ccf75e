use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::{LotteryRound, RoundSummary};

/// Read-only view of the lottery account. Handlers return their value
/// through the transaction's return data.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, LotteryRound>,
}

pub fn process_get_player_tickets(ctx: Context<ReadLottery>, owner: Pubkey) -> Result<Vec<u64>> {
    Ok(ctx.accounts.lottery.player_tickets(&owner))
}

pub fn process_lottery_status(ctx: Context<ReadLottery>) -> Result<bool> {
    Ok(ctx.accounts.lottery.is_open())
}

pub fn process_ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.ticket_price)
}

pub fn process_max_tickets(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.max_tickets)
}

pub fn process_recent_winner(ctx: Context<ReadLottery>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery.recent_winner())
}

pub fn process_winning_ticket_number(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.winning_ticket())
}

pub fn process_round_summary(ctx: Context<ReadLottery>) -> Result<RoundSummary> {
    Ok(ctx.accounts.lottery.summary())
}
