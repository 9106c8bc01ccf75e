use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::RoundStarted;
use crate::state::LotteryRound;

/// Accounts required to open a round.
#[derive(Accounts)]
pub struct StartRound<'info> {
    /// Must be the operator recorded at initialization.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, LotteryRound>,
}

/// Opens a round selling `max_tickets` tickets at `ticket_price` lamports.
///
/// # Arguments
/// * `ctx` - Context holding the StartRound accounts
/// * `ticket_price` - Exact payment required per ticket, in lamports
/// * `max_tickets` - Ticket count that closes and resolves the round
pub fn process_start_round(ctx: Context<StartRound>, ticket_price: u64, max_tickets: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.start_round(ctx.accounts.operator.key(), ticket_price, max_tickets)?;

    msg!("Round {} open", lottery.round_id);
    msg!("Ticket price: {} lamports", ticket_price);
    msg!("Max tickets: {}", max_tickets);

    emit!(RoundStarted {
        round_id: lottery.round_id,
        ticket_price,
        max_tickets,
    });

    Ok(())
}
