use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::WinnerSelected;
use crate::state::{pool_balance, Raffle};

/// Accounts required to settle the round against the revealed randomness.
///
/// Ensures:
/// 1. The supplied randomness account is the one committed at upkeep.
/// 2. The randomness has been revealed.
/// 3. The supplied winner account is the participant the value selects.
#[derive(Accounts)]
pub struct SettleRound<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account holding the prize pool.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: Must match the commitment stored at upkeep; validated in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The account receiving the prize.
    /// CHECK: Must match the participant drawn by the revealed value; validated in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Settles the round: selects the winner from the revealed random value,
/// pays out the entire pool and reopens the round. The runtime reverts
/// every state write and lamport movement if any step fails, so payout
/// and reset commit as one unit.
pub fn process_settle_round(ctx: Context<SettleRound>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    // Stale or duplicate deliveries carry a different randomness account.
    let committed = raffle.pending_randomness()?;
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        committed,
        RaffleError::IncorrectRandomnessAccount
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::IncorrectRandomnessAccount)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;

    let mut raw = [0u8; 8];
    raw.copy_from_slice(&revealed_random_value[..8]);
    let random_value = u64::from_le_bytes(raw);

    let winner = raffle.settle(random_value, clock.unix_timestamp)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerMismatch
    );

    // Shrink back to the base size so realloc rent paid by entrants is
    // swept into the prize instead of stranded in the account.
    let raffle_info = raffle.to_account_info();
    raffle_info.realloc(Raffle::BASE_LEN, false)?;

    let prize = pool_balance(&raffle_info)?;
    **raffle_info.try_borrow_mut_lamports()? -= prize;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += prize;

    msg!("Winner {} paid {} lamports", winner, prize);
    emit!(WinnerSelected { winner, prize });

    Ok(())
}
