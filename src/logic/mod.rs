//! Tournament business logic: setup, schedule, standings, scoring, final.

mod final_match;
mod schedule;
mod scoring;
mod setup;
mod standings;
mod summary;

pub use final_match::{all_matches_finished, champion, update_final_stage, FINAL_MATCH_ID, FINAL_ROUND};
pub use schedule::{generate_schedule, matches_by_round, ROUNDS_PER_LEG};
pub use scoring::{parse_score, parse_score_value, set_final_score, set_score};
pub use setup::{default_team_name, register_teams, start_tournament, TeamEntry, TEAM_COUNT};
pub use standings::{
    compare_rank, compute_standings, rank_by_efficiency, rank_by_goal_difference, top_two,
};
pub use summary::{EfficiencyRow, TournamentSummary};
