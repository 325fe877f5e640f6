pub mod check_upkeep;
pub mod enter_raffle;
pub mod get_participant;
pub mod initialize;
pub mod perform_upkeep;
pub mod settle_round;

pub use check_upkeep::*;
pub use enter_raffle::*;
pub use get_participant::*;
pub use initialize::*;
pub use perform_upkeep::*;
pub use settle_round::*;
