//! Tournament arena: in-memory tournament lifecycle and registration engine, plus its web API.

pub mod api;
pub mod arena;
pub mod config;
pub mod logic;
pub mod models;

pub use arena::{Arena, ArenaStats};
pub use config::{ConfigError, ServerConfig};
pub use logic::{ListFilter, RegistrationLedger, TournamentStore};
pub use models::{
    ArenaError, ArenaResult, GameMode, NewTournament, PlayerInfo, Registration, Tournament,
    TournamentId, TournamentStatus,
};
