use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{Raffle, RoundState};

/// Accounts required to initialize the raffle.
/// Creates the singleton state account; fails if it already exists.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account holding round data and the prize pool.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the raffle with its entrance fee and upkeep interval.
/// The round starts open and empty; the first eligibility window is
/// measured from the initialization timestamp.
pub fn process_initialize(
    ctx: Context<Initialize>,
    entrance_fee: u64,
    interval: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.authority = ctx.accounts.payer.key();
    raffle.entrance_fee = entrance_fee;
    raffle.interval = interval;
    raffle.last_settlement_timestamp = clock.unix_timestamp;
    raffle.recent_winner = Pubkey::default();
    raffle.round_state = RoundState::Open;
    raffle.participants = Vec::new();
    Ok(())
}
