//! Data structures for the arena: tournaments, registrations, errors.

mod error;
mod registration;
mod tournament;

pub use error::{ArenaError, ArenaResult};
pub use registration::{PlayerInfo, Registration};
pub use tournament::{GameMode, NewTournament, Tournament, TournamentId, TournamentStatus};
