//! Registration ledger: per-tournament registration lists and the join transaction.

use crate::models::{ArenaError, ArenaResult, PlayerInfo, Registration, Tournament, TournamentId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RegistrationLedger {
    entries: HashMap<TournamentId, Vec<Registration>>,
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a slot in `tournament` for the player.
    ///
    /// Checks, first failure wins: status is Upcoming, a slot is free, player
    /// identity is present. On success the registration is appended and
    /// `slots_filled` is re-derived from the list length; nothing changes on failure.
    pub fn join(
        &mut self,
        tournament: &mut Tournament,
        info: &PlayerInfo,
        joined_at: DateTime<Utc>,
    ) -> ArenaResult<Registration> {
        if !tournament.status.is_joinable() {
            return Err(ArenaError::NotJoinable {
                status: tournament.status,
            });
        }
        if tournament.is_full() {
            return Err(ArenaError::TournamentFull {
                max_slots: tournament.max_slots,
            });
        }
        info.validate()?;

        let registration = Registration::new(tournament.id, info, joined_at);
        let list = self.entries.entry(tournament.id).or_default();
        list.push(registration.clone());
        // Bounded by max_slots, so it fits.
        tournament.slots_filled = list.len() as u32;
        Ok(registration)
    }

    /// Drop every registration for `id`. Returns how many were removed; 0 if none.
    pub(crate) fn cascade_delete(&mut self, id: TournamentId) -> usize {
        self.entries.remove(&id).map_or(0, |list| list.len())
    }

    pub fn count(&self, id: TournamentId) -> usize {
        self.entries.get(&id).map_or(0, Vec::len)
    }

    /// Registrations for `id` in join order; empty for unknown ids.
    pub fn registrations_of(&self, id: TournamentId) -> &[Registration] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registrations across all tournaments.
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub(crate) fn tournament_ids(&self) -> impl Iterator<Item = &TournamentId> {
        self.entries.keys()
    }
}
