use anchor_lang::prelude::*;

/// Seed for the singleton raffle PDA.
#[constant]
pub const RAFFLE_SEED: &str = "raffle";
