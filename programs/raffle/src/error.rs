use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    /// Validation errors, correctable by the caller.
    #[msg("Payment is below the configured entrance fee")]
    InsufficientEntranceFee,

    #[msg("Raffle is not open for entries")]
    RaffleNotOpen,

    #[msg("Participant index is out of bounds")]
    IndexOutOfBounds,

    /// State-guard errors, raised on protocol violations.
    #[msg("A randomness request is already outstanding")]
    AlreadyCalculating,

    #[msg("No randomness request is outstanding")]
    NoPendingRequest,

    #[msg("Randomness account does not match the outstanding request")]
    IncorrectRandomnessAccount,

    #[msg("Upkeep conditions are not met")]
    UpkeepNotNeeded,

    /// Oracle interaction errors.
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness has not been resolved yet")]
    RandomnessNotResolved,

    #[msg("Winner account does not match the drawn participant")]
    WinnerMismatch,
}
