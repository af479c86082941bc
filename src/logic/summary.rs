//! Read model sent to clients: tournament plus everything derived from it.

use crate::logic::final_match::{all_matches_finished, champion};
use crate::logic::standings::{compute_standings, rank_by_efficiency, rank_by_goal_difference};
use crate::models::{EfficiencyTier, TeamId, TeamStats, Tournament};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EfficiencyRow {
    #[serde(flatten)]
    pub stats: TeamStats,
    pub tier: EfficiencyTier,
}

#[derive(Debug, Serialize)]
pub struct TournamentSummary<'a> {
    pub tournament: &'a Tournament,
    /// Ranked table; positions 1 and 2 go to the final.
    pub standings: Vec<TeamStats>,
    pub by_goal_difference: Vec<TeamStats>,
    pub by_efficiency: Vec<EfficiencyRow>,
    pub all_matches_finished: bool,
    pub champion: Option<TeamId>,
}

impl<'a> TournamentSummary<'a> {
    pub fn new(tournament: &'a Tournament) -> Self {
        let standings = compute_standings(&tournament.teams, &tournament.matches);
        let by_goal_difference = rank_by_goal_difference(&standings);
        let by_efficiency = rank_by_efficiency(&standings)
            .into_iter()
            .map(|stats| EfficiencyRow {
                tier: stats.tier(),
                stats,
            })
            .collect();
        Self {
            tournament,
            standings,
            by_goal_difference,
            by_efficiency,
            all_matches_finished: all_matches_finished(&tournament.matches),
            champion: tournament.final_match().and_then(champion),
        }
    }
}
