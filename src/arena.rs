//! The arena: tournament store and registration ledger behind one lock.
//!
//! Every operation runs its whole check-then-apply sequence under a single
//! guard, so readers never see a tournament without its registrations (or the
//! reverse) and concurrent joins cannot overbook a tournament.

use crate::logic::{ListFilter, RegistrationLedger, TournamentStore};
use crate::models::{
    ArenaResult, GameMode, NewTournament, PlayerInfo, Registration, Tournament, TournamentId,
    TournamentStatus,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct ArenaState {
    store: TournamentStore,
    ledger: RegistrationLedger,
}

impl ArenaState {
    /// Slot bounds hold, cached counts match the ledger, and no registration is orphaned.
    fn is_consistent(&self) -> bool {
        let slots_ok = self.store.iter().all(|t| {
            t.slots_filled <= t.max_slots && t.slots_filled as usize == self.ledger.count(t.id)
        });
        let no_orphans = self
            .ledger
            .tournament_ids()
            .all(|id| self.store.contains(*id));
        slots_ok && no_orphans
    }
}

/// Dashboard counters for organizers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaStats {
    pub upcoming: usize,
    pub live: usize,
    pub completed: usize,
    pub total_registrations: usize,
}

/// Owned tournament engine. Share it via `Arc` or `web::Data`.
#[derive(Debug, Default)]
pub struct Arena {
    state: RwLock<ArenaState>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations validate fully before touching state, so a poisoned lock never
    // guards a half-applied change.
    fn read(&self) -> RwLockReadGuard<'_, ArenaState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ArenaState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Tournaments matching `filter`, newest first.
    pub fn list_tournaments(&self, filter: ListFilter) -> Vec<Tournament> {
        self.read().store.list(filter)
    }

    pub fn get(&self, id: TournamentId) -> ArenaResult<Tournament> {
        self.read().store.get(id).cloned()
    }

    /// Create an Upcoming tournament with no registrations.
    pub fn create(&self, new: &NewTournament) -> ArenaResult<Tournament> {
        let mut state = self.write();
        let tournament = state.store.create(new).inspect_err(|e| {
            log::debug!("Rejected tournament {:?}: {}", new.name, e);
        })?;
        log::info!(
            "Created tournament {} ({:?}, {} slots)",
            tournament.id,
            tournament.name,
            tournament.max_slots
        );
        debug_assert!(state.is_consistent());
        Ok(tournament)
    }

    pub fn set_status(&self, id: TournamentId, status: TournamentStatus) -> ArenaResult<Tournament> {
        let mut state = self.write();
        let tournament = state.store.set_status(id, status).inspect_err(|e| {
            log::debug!("Rejected status change for {}: {}", id, e);
        })?;
        log::info!("Tournament {} is now {}", id, status);
        debug_assert!(state.is_consistent());
        Ok(tournament)
    }

    /// Remove a tournament together with all of its registrations.
    pub fn delete(&self, id: TournamentId) -> ArenaResult<()> {
        let mut state = self.write();
        let removed = state.store.remove(id)?;
        let dropped = state.ledger.cascade_delete(id);
        log::info!(
            "Deleted tournament {} ({:?}) and {} registration(s)",
            id,
            removed.name,
            dropped
        );
        debug_assert!(state.is_consistent());
        Ok(())
    }

    /// Register a player into a tournament, taking one slot.
    pub fn join(&self, id: TournamentId, info: &PlayerInfo) -> ArenaResult<Registration> {
        let mut guard = self.write();
        let ArenaState { store, ledger } = &mut *guard;
        let registration = store
            .get_mut(id)
            .and_then(|t| ledger.join(t, info, Utc::now()))
            .inspect_err(|e| log::debug!("Rejected join for {}: {}", id, e))?;
        log::info!(
            "Registered {} ({}) for tournament {}",
            registration.player_name,
            registration.player_id,
            id
        );
        debug_assert!(guard.is_consistent());
        Ok(registration)
    }

    /// Registrations in join order; empty for unknown or deleted tournaments.
    pub fn registrations_of(&self, id: TournamentId) -> Vec<Registration> {
        self.read().ledger.registrations_of(id).to_vec()
    }

    pub fn count(&self, id: TournamentId) -> usize {
        self.read().ledger.count(id)
    }

    pub fn stats(&self) -> ArenaStats {
        let state = self.read();
        let mut stats = ArenaStats {
            total_registrations: state.ledger.total(),
            ..ArenaStats::default()
        };
        for t in state.store.iter() {
            match t.status {
                TournamentStatus::Upcoming => stats.upcoming += 1,
                TournamentStatus::Live => stats.live += 1,
                TournamentStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }

    /// Re-check slot bounds, slot/registration agreement, and orphan freedom.
    pub fn is_consistent(&self) -> bool {
        self.read().is_consistent()
    }

    /// Number of tournaments in the store.
    pub fn len(&self) -> usize {
        self.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().store.is_empty()
    }

    /// Populate a fresh arena with sample tournaments (one already completed).
    pub fn seed_demo(&self) -> ArenaResult<()> {
        let now = Utc::now();
        let samples = [
            ("Night Ops Showdown", now - Duration::hours(6), GameMode::Solo, 48, 8000, 25),
            ("Rapid Fire Cup", now + Duration::hours(48), GameMode::Duo, 24, 5000, 20),
            ("Booyah Bash #1", now + Duration::hours(24), GameMode::Squad, 48, 10000, 30),
        ];
        for (name, scheduled_at, mode, max_slots, prize_pool, entry_fee) in samples {
            let t = self.create(&NewTournament {
                name: name.to_string(),
                scheduled_at,
                mode,
                max_slots,
                prize_pool,
                entry_fee,
            })?;
            if scheduled_at < now {
                self.set_status(t.id, TournamentStatus::Completed)?;
            }
        }
        Ok(())
    }
}
