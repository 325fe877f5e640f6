use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::RandomnessRequested;
use crate::state::{pool_balance, Raffle};

/// Accounts required to close entry and commit a randomness account.
/// Permissionless: the eligibility predicate is re-checked here rather
/// than trusting the caller's poll result.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_bytes()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Moves the round from open to calculating.
///
/// Steps performed:
/// 1. Reject if a commitment is already outstanding.
/// 2. Re-validate the eligibility predicate; log the contributing factors
///    and reject if it does not hold.
/// 3. Check the randomness account is freshly seeded and not yet revealed.
/// 4. Record the commitment and close entry.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    require!(raffle.is_open(), RaffleError::AlreadyCalculating);

    let pool = pool_balance(&raffle.to_account_info())?;
    if !raffle.is_eligible(clock.unix_timestamp, pool) {
        msg!(
            "Upkeep not needed: pool balance {}, participants {}, state {:?}",
            pool,
            raffle.participants.len(),
            raffle.round_state,
        );
        return Err(RaffleError::UpkeepNotNeeded.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::IncorrectRandomnessAccount)?;

    // A randomness account seeded before the previous slot may already be
    // revealed, which would let the caller pick a favorable outcome.
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(RaffleError::RandomnessAlreadyRevealed.into());
    }

    let randomness_account = ctx.accounts.randomness_account_data.key();
    raffle.begin_calculating(randomness_account)?;

    emit!(RandomnessRequested { randomness_account });

    Ok(())
}
