//! Four-team football tournament: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    all_matches_finished, champion, compute_standings, default_team_name, generate_schedule,
    matches_by_round, parse_score, parse_score_value, rank_by_efficiency, rank_by_goal_difference,
    register_teams, set_final_score, set_score, start_tournament, update_final_stage, TeamEntry,
    TournamentSummary, FINAL_ROUND,
};
pub use models::{
    EfficiencyTier, FinalStage, Match, MatchId, Scoreline, Stage, Team, TeamColor, TeamId,
    TeamStats, Tournament, TournamentError, TournamentId, TournamentState,
};
