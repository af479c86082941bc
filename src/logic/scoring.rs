//! Score entry: parsing raw input and replacing a match's score pair.

use crate::logic::final_match::update_final_stage;
use crate::models::{Scoreline, Tournament, TournamentError, TournamentState};
use serde_json::Value;

/// Parse a typed score. Anything that is not a non-negative integer is unscored.
pub fn parse_score(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

/// Parse a score from a JSON body field (number or string).
pub fn parse_score_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => parse_score(s),
        _ => None,
    }
}

/// Replace the score pair of a group match, then re-check whether the final is due.
///
/// If either side is None the whole pair becomes unscored.
pub fn set_score(
    tournament: &mut Tournament,
    match_id: &str,
    home: Option<u32>,
    away: Option<u32>,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::GroupStage {
        return Err(TournamentError::InvalidState);
    }
    let m = tournament
        .get_match_mut(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    m.score = Scoreline::from_pair(home, away);
    update_final_stage(tournament);
    Ok(())
}

/// Replace the score pair of the final. Does not affect group standings.
pub fn set_final_score(
    tournament: &mut Tournament,
    home: Option<u32>,
    away: Option<u32>,
) -> Result<(), TournamentError> {
    let m = tournament
        .final_match_mut()
        .ok_or(TournamentError::FinalNotCreated)?;
    m.score = Scoreline::from_pair(home, away);
    Ok(())
}
