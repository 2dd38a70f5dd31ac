//! Tournament, its lifecycle status, and the creation payload.

use crate::models::error::ArenaError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Team format of a tournament.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Solo,
    Duo,
    Squad,
}

/// Lifecycle status. Only moves forward: Upcoming -> Live -> Completed,
/// or straight from Upcoming to Completed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TournamentStatus {
    /// Accepting registrations.
    #[default]
    Upcoming,
    /// In progress; registration closed.
    Live,
    /// Finished. Terminal.
    Completed,
}

impl TournamentStatus {
    /// Whether `next` is a legal transition from `self`. Same-state requests are not.
    pub fn can_transition_to(self, next: TournamentStatus) -> bool {
        use TournamentStatus::*;
        matches!((self, next), (Upcoming, Live) | (Upcoming, Completed) | (Live, Completed))
    }

    /// Only upcoming tournaments take new registrations.
    pub fn is_joinable(self) -> bool {
        self == TournamentStatus::Upcoming
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Live => "Live",
            TournamentStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// Fields an organizer supplies to create a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub mode: GameMode,
    pub max_slots: u32,
    #[serde(default)]
    pub prize_pool: i64,
    #[serde(default)]
    pub entry_fee: i64,
}

impl NewTournament {
    /// Check the payload, returning the trimmed name on success.
    pub(crate) fn validate(&self) -> Result<&str, ArenaError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ArenaError::Validation("tournament name must not be empty".into()));
        }
        if self.max_slots == 0 {
            return Err(ArenaError::Validation("max slots must be a positive integer".into()));
        }
        if self.prize_pool < 0 {
            return Err(ArenaError::Validation("prize pool must not be negative".into()));
        }
        if self.entry_fee < 0 {
            return Err(ArenaError::Validation("entry fee must not be negative".into()));
        }
        Ok(name)
    }
}

/// A hosted tournament. `slots_filled` is owned by the registration ledger and
/// always equals the number of registrations recorded for this tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub mode: GameMode,
    pub max_slots: u32,
    pub slots_filled: u32,
    pub prize_pool: i64,
    pub entry_fee: i64,
    pub status: TournamentStatus,
}

impl Tournament {
    /// Build an Upcoming tournament with no registrations. Fails on invalid input.
    pub(crate) fn from_new(new: &NewTournament) -> Result<Self, ArenaError> {
        let name = new.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            scheduled_at: new.scheduled_at,
            mode: new.mode,
            max_slots: new.max_slots,
            slots_filled: 0,
            prize_pool: new.prize_pool,
            entry_fee: new.entry_fee,
            status: TournamentStatus::Upcoming,
        })
    }

    pub fn is_full(&self) -> bool {
        self.slots_filled >= self.max_slots
    }

    /// Slots still available.
    pub fn slots_remaining(&self) -> u32 {
        self.max_slots.saturating_sub(self.slots_filled)
    }

    /// Upcoming and not yet full.
    pub fn is_open(&self) -> bool {
        self.status.is_joinable() && !self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_cup() -> NewTournament {
        NewTournament {
            name: "  Cup  ".into(),
            scheduled_at: Utc::now(),
            mode: GameMode::Squad,
            max_slots: 10,
            prize_pool: 1000,
            entry_fee: 20,
        }
    }

    #[test]
    fn lifecycle_edges() {
        use TournamentStatus::*;
        assert!(Upcoming.can_transition_to(Live));
        assert!(Upcoming.can_transition_to(Completed));
        assert!(Live.can_transition_to(Completed));
        assert!(!Live.can_transition_to(Upcoming));
        assert!(!Completed.can_transition_to(Live));
        assert!(!Completed.can_transition_to(Upcoming));
        for s in [Upcoming, Live, Completed] {
            assert!(!s.can_transition_to(s), "{s} -> {s} must be rejected");
        }
    }

    #[test]
    fn from_new_trims_name_and_starts_upcoming() {
        let t = Tournament::from_new(&new_cup()).unwrap();
        assert_eq!(t.name, "Cup");
        assert_eq!(t.status, TournamentStatus::Upcoming);
        assert_eq!(t.slots_filled, 0);
        assert_eq!(t.slots_remaining(), 10);
        assert!(t.is_open());
    }

    #[test]
    fn validation_rejects_bad_fields() {
        let mut blank = new_cup();
        blank.name = "   ".into();
        let mut no_slots = new_cup();
        no_slots.max_slots = 0;
        let mut negative_prize = new_cup();
        negative_prize.prize_pool = -1;
        let mut negative_fee = new_cup();
        negative_fee.entry_fee = -5;

        for bad in [blank, no_slots, negative_prize, negative_fee] {
            assert!(matches!(Tournament::from_new(&bad), Err(ArenaError::Validation(_))));
        }
    }

    #[test]
    fn serializes_camel_case() {
        let t = Tournament::from_new(&new_cup()).unwrap();
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["maxSlots"], 10);
        assert_eq!(v["slotsFilled"], 0);
        assert_eq!(v["status"], "Upcoming");
        assert_eq!(v["mode"], "Squad");
    }
}
