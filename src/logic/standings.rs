//! League table: per-team aggregation and ranking.

use crate::models::{Match, Team, TeamId, TeamStats};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute ranked standings, one entry per team.
///
/// Only scored group matches count. A match naming a team that is not in `teams`
/// is skipped entirely. Ranking: points, then goal difference, then goals for,
/// all descending; remaining ties keep the order of `teams`.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<TeamStats> {
    let mut stats: Vec<TeamStats> = teams.iter().map(|t| TeamStats::new(t.id)).collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    for m in matches.iter().filter(|m| !m.is_final()) {
        let Some(score) = m.score else {
            continue;
        };
        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            log::debug!("Skipping match {}: team not registered", m.id);
            continue;
        };
        stats[home].record(score.home, score.away);
        stats[away].record(score.away, score.home);
    }

    for s in &mut stats {
        s.finalize();
    }

    stats.sort_by(compare_rank);
    stats
}

/// Table order: points, goal difference, goals for (all descending).
pub fn compare_rank(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Same stats ordered by goal difference only (stable).
pub fn rank_by_goal_difference(stats: &[TeamStats]) -> Vec<TeamStats> {
    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.goal_difference.cmp(&a.goal_difference));
    sorted
}

/// Same stats ordered by efficiency only (stable).
pub fn rank_by_efficiency(stats: &[TeamStats]) -> Vec<TeamStats> {
    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    sorted
}

/// Teams in rank positions 1 and 2, if there are at least two.
pub fn top_two(standings: &[TeamStats]) -> Option<(TeamId, TeamId)> {
    match standings {
        [first, second, ..] => Some((first.team_id, second.team_id)),
        _ => None,
    }
}
