use anchor_lang::prelude::*;

/// Emitted on every successful entry.
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
}

/// Emitted exactly once per transition into the calculating state.
#[event]
pub struct RandomnessRequested {
    pub randomness_account: Pubkey,
}

/// Emitted exactly once per completed settlement.
#[event]
pub struct WinnerSelected {
    pub winner: Pubkey,
    pub prize: u64,
}
