//! Errors reported by arena operations.

use crate::models::tournament::{TournamentId, TournamentStatus};
use thiserror::Error;

/// Every failure is local to the call that produced it; no operation leaves a
/// partial mutation behind.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ArenaError {
    /// Malformed input (empty name, non-positive capacity, negative amounts, missing player identity).
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    #[error("Cannot change status from {from} to {to}")]
    InvalidTransition {
        from: TournamentStatus,
        to: TournamentStatus,
    },

    #[error("Tournament is {status} and no longer accepts registrations")]
    NotJoinable { status: TournamentStatus },

    #[error("Tournament is full ({max_slots} slots)")]
    TournamentFull { max_slots: u32 },
}

impl ArenaError {
    /// Stable machine-readable tag for API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            ArenaError::Validation(_) => "validation_error",
            ArenaError::NotFound(_) => "not_found",
            ArenaError::InvalidTransition { .. } => "invalid_transition",
            ArenaError::NotJoinable { .. } => "tournament_not_joinable",
            ArenaError::TournamentFull { .. } => "tournament_full",
        }
    }
}

pub type ArenaResult<T> = Result<T, ArenaError>;
