use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::LotteryRound;

/// Accounts required to create the lottery account.
/// The signer becomes the operator for the lifetime of the program.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Round state, ticket ledger and pot.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryRound::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, LotteryRound>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<InitializeLottery>) -> Result<()> {
    let operator = ctx.accounts.payer.key();
    ctx.accounts
        .lottery
        .set_inner(LotteryRound::new(operator, ctx.bumps.lottery));

    msg!("Lottery initialized, operator: {}", operator);
    Ok(())
}
