//! Setup phase: register the four teams and start the tournament (Setup -> GroupStage).

use crate::logic::schedule::generate_schedule;
use crate::models::{Team, TeamColor, Tournament, TournamentError, TournamentState};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashSet;

/// Number of teams a tournament is played with.
pub const TEAM_COUNT: usize = 4;

/// One row of the setup form.
#[derive(Clone, Debug, Deserialize)]
pub struct TeamEntry {
    #[serde(default)]
    pub name: String,
    pub color: TeamColor,
}

/// Name pre-filled in the setup form for position `index` (0-based).
pub fn default_team_name(index: usize) -> String {
    format!("Time {}", index + 1)
}

/// Turn setup rows into teams, keeping their order.
///
/// Requires exactly four rows with distinct colors. A blank name becomes `Equipe N`.
pub fn register_teams(entries: Vec<TeamEntry>) -> Result<Vec<Team>, TournamentError> {
    if entries.len() != TEAM_COUNT {
        return Err(TournamentError::WrongTeamCount {
            expected: TEAM_COUNT,
            got: entries.len(),
        });
    }
    let mut seen = HashSet::new();
    for e in &entries {
        if !seen.insert(e.color) {
            return Err(TournamentError::DuplicateColor(e.color));
        }
    }

    let teams = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let name = e.name.trim();
            let name = if name.is_empty() {
                format!("Equipe {}", i + 1)
            } else {
                name.to_string()
            };
            Team::new(name, e.color)
        })
        .collect();
    Ok(teams)
}

/// Start the tournament: register teams, generate the schedule, move to GroupStage.
pub fn start_tournament(
    tournament: &mut Tournament,
    entries: Vec<TeamEntry>,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    let teams = register_teams(entries)?;
    let four: &[Team; TEAM_COUNT] = teams.as_slice().try_into().map_err(|_| {
        TournamentError::WrongTeamCount {
            expected: TEAM_COUNT,
            got: teams.len(),
        }
    })?;
    tournament.matches = generate_schedule(four);
    tournament.teams = teams;
    tournament.state = TournamentState::GroupStage;
    tournament.started_at = Some(Utc::now());
    log::info!("Tournament {} started", tournament.id);
    Ok(())
}
