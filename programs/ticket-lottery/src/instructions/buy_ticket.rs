use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::{RoundResolved, TicketPurchased};
use crate::randomness::ClockEntropy;
use crate::state::LotteryRound;
use crate::treasury::LamportTreasury;

/// Accounts required to buy a lottery ticket.
///
/// The buyer of the last ticket must also pass every other distinct ticket
/// holder of the round as a writable remaining account, since any of them
/// may win the pot.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account, also holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, LotteryRound>,

    /// System program for the ticket payment.
    pub system_program: Program<'info, System>,
}

/// Buys a lottery ticket for the caller.
///
/// Steps performed:
/// 1. Check that a round is open and `amount` equals the ticket price.
///    For the last ticket, check that every holder account was passed.
/// 2. Record the next ticket number for the payer.
/// 3. If that was the last ticket, draw the winner.
/// 4. Move the payment into the pot and, on resolution, the pot to the winner.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `amount` - Lamports offered for the ticket
pub fn process_buy_ticket<'info>(
    ctx: Context<'_, '_, '_, 'info, BuyTicket<'info>>,
    amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let payer = ctx.accounts.payer.key();
    let entropy = ClockEntropy::new(payer, &clock);
    let mut treasury = LamportTreasury {
        payer: ctx.accounts.payer.to_account_info(),
        lottery: ctx.accounts.lottery.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        recipients: ctx.remaining_accounts,
    };

    let lottery = &mut ctx.accounts.lottery;
    if lottery.fills_round() && amount == lottery.ticket_price {
        treasury.require_holders(&lottery.holders())?;
    }
    let purchase = lottery.buy_ticket(payer, amount, &entropy, &mut treasury)?;

    msg!("Ticket {} sold to {}", purchase.ticket_number, payer);
    emit!(TicketPurchased {
        round_id: lottery.round_id,
        buyer: payer,
        ticket_number: purchase.ticket_number,
        tickets_remaining: lottery.tickets_remaining(),
    });

    if let Some(resolution) = purchase.resolution {
        msg!("Round {} resolved, prize: {} lamports", resolution.round_id, resolution.prize);
        emit!(RoundResolved {
            round_id: resolution.round_id,
            winning_ticket_number: resolution.winning_ticket_number,
            winner: resolution.winner,
            prize: resolution.prize,
        });
    }

    Ok(())
}
