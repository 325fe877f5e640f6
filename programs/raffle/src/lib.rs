use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("XvygaAFLGb9A4ETaQzSEQ5SfNMu6F5qTYGG2nrTzqDd");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, entrance_fee: u64, interval: i64) -> Result<()> {
        process_initialize(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn settle_round(ctx: Context<SettleRound>) -> Result<()> {
        process_settle_round(ctx)
    }

    pub fn get_participant(ctx: Context<GetParticipant>, index: u32) -> Result<Pubkey> {
        process_get_participant(ctx, index)
    }
}
