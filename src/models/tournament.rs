//! Tournament, TournamentState and FinalStage.

use crate::models::fixture::{Match, MatchId};
use crate::models::team::{Team, TeamColor, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Setup needs exactly four teams.
    WrongTeamCount { expected: usize, got: usize },
    /// Two teams picked the same color.
    DuplicateColor(TeamColor),
    /// No group match with this id.
    MatchNotFound(MatchId),
    /// The final has not been created yet.
    FinalNotCreated,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::WrongTeamCount { expected, got } => {
                write!(f, "Need exactly {} teams (got {})", expected, got)
            }
            TournamentError::DuplicateColor(color) => {
                write!(f, "Color {} is already taken by another team", color)
            }
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::FinalNotCreated => write!(f, "The final has not been created yet"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering teams; no matches yet.
    #[default]
    Setup,
    /// Schedule generated; scores can be entered.
    GroupStage,
}

/// Once-only lifecycle of the final. `FinalCreated` is terminal.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "match")]
pub enum FinalStage {
    #[default]
    AwaitingFinal,
    FinalCreated(Match),
}

/// Full tournament state: teams, group matches, final, and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Registration order; drives fixture pairing.
    pub teams: Vec<Team>,
    /// The 12 group matches (empty before start).
    pub matches: Vec<Match>,
    pub final_stage: FinalStage,
    pub state: TournamentState,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create a new tournament in Setup state with no teams.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            matches: Vec::new(),
            final_stage: FinalStage::AwaitingFinal,
            state: TournamentState::Setup,
            created_at: Utc::now(),
            started_at: None,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable reference to a group match by id.
    pub fn get_match_mut(&mut self, id: &str) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn final_match(&self) -> Option<&Match> {
        match &self.final_stage {
            FinalStage::FinalCreated(m) => Some(m),
            FinalStage::AwaitingFinal => None,
        }
    }

    pub fn final_match_mut(&mut self) -> Option<&mut Match> {
        match &mut self.final_stage {
            FinalStage::FinalCreated(m) => Some(m),
            FinalStage::AwaitingFinal => None,
        }
    }

    /// Discard teams, matches and final; back to Setup. The id is kept.
    pub fn reset(&mut self) {
        log::info!("Resetting tournament {}", self.id);
        *self = Self {
            id: self.id,
            ..Self::new()
        };
    }
}
