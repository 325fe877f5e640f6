use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Phase of the current round. A randomness commitment can only exist in the
/// `Calculating` variant, so the pending request and the closed-entry phase
/// cannot drift apart.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub enum RoundState {
    /// Accepting entries; no randomness commitment outstanding.
    Open,
    /// Entries rejected; exactly one randomness commitment outstanding.
    Calculating { randomness_account: Pubkey },
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that initialized the raffle. Kept for observability;
    /// entry, upkeep and settlement are permissionless.
    pub authority: Pubkey,

    /// The minimum payment (in lamports) required per entry.
    pub entrance_fee: u64,

    /// Seconds that must elapse after a settlement before the next round
    /// becomes eligible for upkeep.
    pub interval: i64,

    /// The UNIX timestamp of the previous settlement
    /// (initialization time for the first round).
    pub last_settlement_timestamp: i64,

    /// The most recently paid winner.
    /// Defaults to `Pubkey::default()` until the first settlement.
    pub recent_winner: Pubkey,

    /// The current phase of the round.
    pub round_state: RoundState,

    /// Entrants of the current round in insertion order. One slot per paid
    /// entry; the same address may appear more than once. The account is
    /// realloc'd as this grows, so no cap is enforced here.
    #[max_len(0)]
    pub participants: Vec<Pubkey>,
}

impl Raffle {
    /// Account size with zero participants, including the discriminator.
    pub const BASE_LEN: usize = 8 + Self::INIT_SPACE;

    /// Account size required to hold `participant_count` entries.
    pub fn space_for(participant_count: usize) -> usize {
        Self::BASE_LEN + participant_count * 32
    }

    pub fn is_open(&self) -> bool {
        self.round_state == RoundState::Open
    }

    /// Appends an entrant after checking the fee and the round phase.
    pub fn add_participant(&mut self, player: Pubkey, fee_paid: u64) -> Result<()> {
        require!(
            fee_paid >= self.entrance_fee,
            RaffleError::InsufficientEntranceFee
        );
        require!(self.is_open(), RaffleError::RaffleNotOpen);
        self.participants.push(player);
        Ok(())
    }

    /// The upkeep predicate. Pure; callers supply the clock reading and the
    /// derived pool balance.
    pub fn is_eligible(&self, now: i64, pool_balance: u64) -> bool {
        self.is_open()
            && now - self.last_settlement_timestamp > self.interval
            && pool_balance > 0
            && !self.participants.is_empty()
    }

    /// Moves to `Calculating`, recording the committed randomness account.
    pub fn begin_calculating(&mut self, randomness_account: Pubkey) -> Result<()> {
        require!(self.is_open(), RaffleError::AlreadyCalculating);
        self.round_state = RoundState::Calculating { randomness_account };
        Ok(())
    }

    /// The randomness account committed for the round in flight.
    pub fn pending_randomness(&self) -> Result<Pubkey> {
        match self.round_state {
            RoundState::Calculating { randomness_account } => Ok(randomness_account),
            RoundState::Open => err!(RaffleError::NoPendingRequest),
        }
    }

    /// Consumes the revealed random value: picks the winner, clears the
    /// entrant list and reopens the round. Returns the winner so the caller
    /// can move the pool; the lamport transfer stays outside the ledger.
    pub fn settle(&mut self, random_value: u64, now: i64) -> Result<Pubkey> {
        self.pending_randomness()?;
        let winner_index = (random_value % self.participants.len() as u64) as usize;
        let winner = self.participants[winner_index];
        self.recent_winner = winner;
        self.participants.clear();
        self.round_state = RoundState::Open;
        self.last_settlement_timestamp = now;
        Ok(winner)
    }

    pub fn participant(&self, index: u32) -> Result<Pubkey> {
        self.participants
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfBounds))
    }
}

/// Lamports held by the raffle account above its rent-exempt minimum, i.e.
/// the custodied prize pool.
pub fn pool_balance(raffle_info: &AccountInfo) -> Result<u64> {
    let rent_exempt = Rent::get()?.minimum_balance(raffle_info.data_len());
    Ok(raffle_info.lamports().saturating_sub(rent_exempt))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: u64 = 10;
    const INTERVAL: i64 = 30;

    fn fresh_raffle() -> Raffle {
        Raffle {
            bump: 255,
            authority: Pubkey::new_unique(),
            entrance_fee: FEE,
            interval: INTERVAL,
            last_settlement_timestamp: 0,
            recent_winner: Pubkey::default(),
            round_state: RoundState::Open,
            participants: Vec::new(),
        }
    }

    #[test]
    fn starts_open_and_empty() {
        let raffle = fresh_raffle();
        assert_eq!(raffle.round_state, RoundState::Open);
        assert!(raffle.participants.is_empty());
        assert_eq!(raffle.recent_winner, Pubkey::default());
    }

    #[test]
    fn rejects_payment_below_entrance_fee() {
        let mut raffle = fresh_raffle();
        let res = raffle.add_participant(Pubkey::new_unique(), FEE - 1);
        assert_eq!(res, Err(RaffleError::InsufficientEntranceFee.into()));
        assert!(raffle.participants.is_empty());
    }

    #[test]
    fn records_entries_in_insertion_order() {
        let mut raffle = fresh_raffle();
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.add_participant(*player, FEE).unwrap();
        }
        assert_eq!(raffle.participants.len(), 3);
        for (i, player) in players.iter().enumerate() {
            assert_eq!(raffle.participant(i as u32).unwrap(), *player);
        }
    }

    #[test]
    fn allows_repeated_entries_by_one_player() {
        let mut raffle = fresh_raffle();
        let player = Pubkey::new_unique();
        raffle.add_participant(player, FEE).unwrap();
        raffle.add_participant(player, FEE).unwrap();
        assert_eq!(raffle.participants.len(), 2);
    }

    #[test]
    fn rejects_entries_while_calculating() {
        let mut raffle = fresh_raffle();
        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();
        raffle.begin_calculating(Pubkey::new_unique()).unwrap();

        let res = raffle.add_participant(Pubkey::new_unique(), FEE);
        assert_eq!(res, Err(RaffleError::RaffleNotOpen.into()));
        assert_eq!(raffle.participants.len(), 1);
    }

    #[test]
    fn eligibility_requires_every_factor() {
        let mut raffle = fresh_raffle();

        // No participants.
        assert!(!raffle.is_eligible(INTERVAL + 1, FEE));

        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();

        // Zero pool balance.
        assert!(!raffle.is_eligible(INTERVAL + 1, 0));

        // Interval not yet exceeded (boundary is exclusive).
        assert!(!raffle.is_eligible(INTERVAL, FEE));

        assert!(raffle.is_eligible(INTERVAL + 1, FEE));

        // Not open.
        raffle.begin_calculating(Pubkey::new_unique()).unwrap();
        assert!(!raffle.is_eligible(INTERVAL + 1, FEE));
    }

    #[test]
    fn rejects_second_commitment_while_one_is_outstanding() {
        let mut raffle = fresh_raffle();
        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();
        raffle.begin_calculating(Pubkey::new_unique()).unwrap();

        let res = raffle.begin_calculating(Pubkey::new_unique());
        assert_eq!(res, Err(RaffleError::AlreadyCalculating.into()));
    }

    #[test]
    fn pending_randomness_tracks_the_commitment() {
        let mut raffle = fresh_raffle();
        assert_eq!(
            raffle.pending_randomness(),
            Err(RaffleError::NoPendingRequest.into())
        );

        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();
        let randomness_account = Pubkey::new_unique();
        raffle.begin_calculating(randomness_account).unwrap();
        assert_eq!(raffle.pending_randomness().unwrap(), randomness_account);
    }

    #[test]
    fn settle_without_pending_request_fails() {
        let mut raffle = fresh_raffle();
        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();
        let res = raffle.settle(7, INTERVAL + 1);
        assert_eq!(res, Err(RaffleError::NoPendingRequest.into()));
    }

    #[test]
    fn winner_index_is_random_value_mod_count() {
        let mut raffle = fresh_raffle();
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.add_participant(*player, FEE).unwrap();
        }
        raffle.begin_calculating(Pubkey::new_unique()).unwrap();

        // 7 mod 3 == 1: the second joiner wins.
        let winner = raffle.settle(7, INTERVAL + 1).unwrap();
        assert_eq!(winner, players[1]);
    }

    #[test]
    fn settlement_resets_the_round() {
        let mut raffle = fresh_raffle();
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.add_participant(*player, FEE).unwrap();
        }
        raffle.begin_calculating(Pubkey::new_unique()).unwrap();

        let settled_at = INTERVAL + 5;
        let winner = raffle.settle(7, settled_at).unwrap();

        assert_eq!(raffle.round_state, RoundState::Open);
        assert!(raffle.participants.is_empty());
        assert_eq!(raffle.recent_winner, winner);
        assert_eq!(raffle.last_settlement_timestamp, settled_at);

        // Eligibility gate restarts from the new timestamp.
        assert!(!raffle.is_eligible(settled_at + INTERVAL, FEE));
    }

    #[test]
    fn participant_lookup_past_end_fails() {
        let mut raffle = fresh_raffle();
        raffle.add_participant(Pubkey::new_unique(), FEE).unwrap();
        assert_eq!(
            raffle.participant(1),
            Err(RaffleError::IndexOutOfBounds.into())
        );
    }
}
