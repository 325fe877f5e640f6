use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Read-only lookup of a participant by entry index.
#[derive(Accounts)]
pub struct GetParticipant<'info> {
    /// The raffle state account.
    #[account(
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

pub fn process_get_participant(ctx: Context<GetParticipant>, index: u32) -> Result<Pubkey> {
    ctx.accounts.raffle.participant(index)
}
