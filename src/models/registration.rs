//! Player registration and the player-supplied join payload.

use crate::models::error::ArenaError;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a player submits to claim a slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub player_name: String,
    /// In-game UID.
    pub player_id: String,
    #[serde(default)]
    pub team_name: Option<String>,
}

impl PlayerInfo {
    pub fn new(player_name: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: player_id.into(),
            team_name: None,
        }
    }

    pub fn with_team(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ArenaError> {
        if self.player_name.trim().is_empty() {
            return Err(ArenaError::Validation("player name is required".into()));
        }
        if self.player_id.trim().is_empty() {
            return Err(ArenaError::Validation("player id is required".into()));
        }
        Ok(())
    }
}

/// One player's claim on one slot. Created only by a successful join.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub tournament_id: TournamentId,
    pub player_name: String,
    pub player_id: String,
    pub team_name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Registration {
    /// Trims the player fields; a blank team name is stored as `None`.
    pub(crate) fn new(tournament_id: TournamentId, info: &PlayerInfo, joined_at: DateTime<Utc>) -> Self {
        let team_name = info
            .team_name
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            tournament_id,
            player_name: info.player_name.trim().to_string(),
            player_id: info.player_id.trim().to_string(),
            team_name,
            joined_at,
        }
    }
}
