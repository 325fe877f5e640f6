use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the current round.
/// The raffle account grows by one slot per entry; the player covers the
/// added rent on top of the entry payment.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The entrant, paying the entry amount.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The raffle state account, also holding the prize pool.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump,
        realloc = Raffle::space_for(raffle.participants.len() + 1),
        realloc::payer = player,
        realloc::zero = false,
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for the lamports transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the payment against the entrance fee and the round phase.
/// 2. Transfer the payment into the raffle pool.
/// 3. Record the entrant.
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.add_participant(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RaffleEntered { player, amount });

    Ok(())
}
