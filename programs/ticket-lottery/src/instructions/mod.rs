pub mod buy_ticket;
pub mod initialize;
pub mod queries;
pub mod start_round;

pub use buy_ticket::*;
pub use initialize::*;
pub use queries::*;
pub use start_round::*;
