//! Final between the top two teams: qualification check, once-only creation, champion.

use crate::logic::standings::{compute_standings, top_two};
use crate::models::{FinalStage, Match, Stage, TeamId, Tournament};
use std::cmp::Ordering;

/// Round number given to the final, after the six group rounds.
pub const FINAL_ROUND: u32 = 7;

pub const FINAL_MATCH_ID: &str = "final";

/// True when there is at least one match and every match has a score.
pub fn all_matches_finished(matches: &[Match]) -> bool {
    !matches.is_empty() && matches.iter().all(Match::is_scored)
}

/// Create the final if the group stage just finished and no final exists yet.
///
/// Home is the rank-1 team, away the rank-2 team, taken from the standings at this
/// moment. Once created the final is never rebuilt, even if later score edits change
/// the ranking. Returns whether the final was created by this call.
pub fn update_final_stage(tournament: &mut Tournament) -> bool {
    if tournament.final_stage != FinalStage::AwaitingFinal
        || !all_matches_finished(&tournament.matches)
    {
        return false;
    }
    let standings = compute_standings(&tournament.teams, &tournament.matches);
    let Some((first, second)) = top_two(&standings) else {
        return false;
    };

    let final_match = Match::new(FINAL_MATCH_ID, first, second, FINAL_ROUND, Stage::Final);
    log::info!(
        "Group stage finished in tournament {}: final {} vs {}",
        tournament.id,
        first,
        second
    );
    tournament.final_stage = FinalStage::FinalCreated(final_match);
    true
}

/// Winner of a scored final; None while unscored or level.
pub fn champion(final_match: &Match) -> Option<TeamId> {
    let score = final_match.score?;
    match score.home.cmp(&score.away) {
        Ordering::Greater => Some(final_match.home_team_id),
        Ordering::Less => Some(final_match.away_team_id),
        Ordering::Equal => None,
    }
}
