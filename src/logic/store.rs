//! Tournament store: the authoritative, newest-first collection of tournaments.

use crate::models::{ArenaError, ArenaResult, NewTournament, Tournament, TournamentId, TournamentStatus};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which tournaments a listing includes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    /// Everything, including completed tournaments.
    #[default]
    All,
    /// Upcoming and live tournaments.
    Active,
    /// Upcoming tournaments with at least one free slot.
    Open,
}

impl ListFilter {
    pub fn matches(self, t: &Tournament) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Active => t.status != TournamentStatus::Completed,
            ListFilter::Open => t.is_open(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TournamentStore {
    /// Front is the most recently created tournament.
    tournaments: VecDeque<Tournament>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new Upcoming tournament at the head of the collection.
    pub fn create(&mut self, new: &NewTournament) -> ArenaResult<Tournament> {
        let mut tournament = Tournament::from_new(new)?;
        // Ids stay unique among live tournaments.
        while self.contains(tournament.id) {
            tournament.id = uuid::Uuid::new_v4();
        }
        self.tournaments.push_front(tournament.clone());
        Ok(tournament)
    }

    pub fn contains(&self, id: TournamentId) -> bool {
        self.tournaments.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: TournamentId) -> ArenaResult<&Tournament> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(ArenaError::NotFound(id))
    }

    /// Mutable access for the registration ledger, which owns `slots_filled`.
    pub(crate) fn get_mut(&mut self, id: TournamentId) -> ArenaResult<&mut Tournament> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ArenaError::NotFound(id))
    }

    /// Move a tournament forward in its lifecycle. Only `status` changes.
    pub fn set_status(&mut self, id: TournamentId, status: TournamentStatus) -> ArenaResult<Tournament> {
        let t = self.get_mut(id)?;
        if !t.status.can_transition_to(status) {
            return Err(ArenaError::InvalidTransition {
                from: t.status,
                to: status,
            });
        }
        t.status = status;
        Ok(t.clone())
    }

    /// Remove a tournament. Callers must cascade to the ledger in the same transaction.
    pub(crate) fn remove(&mut self, id: TournamentId) -> ArenaResult<Tournament> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(ArenaError::NotFound(id))?;
        self.tournaments.remove(idx).ok_or(ArenaError::NotFound(id))
    }

    /// Tournaments matching `filter`, newest first.
    pub fn list(&self, filter: ListFilter) -> Vec<Tournament> {
        self.tournaments
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.iter()
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }
}
