use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Ticket price and ticket cap must be positive and within limits")]
    InvalidParameters,
    #[msg("Only the lottery operator can start a round")]
    NotAuthorized,
    #[msg("A round is already open")]
    RoundAlreadyOpen,
    #[msg("No round is open")]
    RoundNotOpen,
    #[msg("Payment must equal the ticket price")]
    IncorrectPayment,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("The last ticket must pass every ticket holder as a writable account")]
    HolderAccountsMissing,
}
