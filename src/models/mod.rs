//! Data structures for the tournament: teams, matches, derived stats, tournament state.

mod fixture;
mod stats;
mod team;
mod tournament;

pub use fixture::{Match, MatchId, Scoreline, Stage};
pub use stats::{EfficiencyTier, TeamStats, POINTS_PER_DRAW, POINTS_PER_WIN};
pub use team::{Team, TeamColor, TeamId};
pub use tournament::{FinalStage, Tournament, TournamentError, TournamentId, TournamentState};
