use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{pool_balance, Raffle};

/// Read-only eligibility query for external automation. No side effects;
/// callable by anyone at any time.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    /// The raffle state account.
    #[account(
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Returns true when the round can be closed and randomness committed:
/// the round is open, the interval has elapsed, the pool holds funds and
/// at least one participant entered.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let raffle = &ctx.accounts.raffle;
    let pool = pool_balance(&raffle.to_account_info())?;
    Ok(raffle.is_eligible(clock.unix_timestamp, pool))
}
