//! Integration tests for the tournament flow: setup, score entry, final and reset.

use color_cup_web::{
    champion, compute_standings, default_team_name, parse_score, register_teams, set_final_score,
    set_score, start_tournament, update_final_stage, FinalStage, Stage, TeamColor, TeamEntry,
    TeamId, Tournament, TournamentError, TournamentState, TournamentSummary, FINAL_ROUND,
};

fn entries() -> Vec<TeamEntry> {
    TeamColor::ALL
        .iter()
        .enumerate()
        .map(|(i, &color)| TeamEntry {
            name: default_team_name(i),
            color,
        })
        .collect()
}

fn started() -> Tournament {
    let mut t = Tournament::new();
    start_tournament(&mut t, entries()).unwrap();
    t
}

/// Score every group match 2-0 for whichever side comes first in `strength`.
/// Stops after `limit` matches.
fn score_by_strength(t: &mut Tournament, strength: &[TeamId], limit: usize) {
    let fixtures: Vec<(String, TeamId, TeamId)> = t
        .matches
        .iter()
        .map(|m| (m.id.clone(), m.home_team_id, m.away_team_id))
        .collect();
    let rank = |id: TeamId| strength.iter().position(|&s| s == id).unwrap();
    for (id, home, away) in fixtures.into_iter().take(limit) {
        let (h, a) = if rank(home) < rank(away) { (2, 0) } else { (0, 2) };
        set_score(t, &id, Some(h), Some(a)).unwrap();
    }
}

fn ids(t: &Tournament, order: [usize; 4]) -> Vec<TeamId> {
    order.iter().map(|&i| t.teams[i].id).collect()
}

#[test]
fn start_registers_teams_and_generates_schedule() {
    let t = started();
    assert_eq!(t.state, TournamentState::GroupStage);
    assert_eq!(t.teams.len(), 4);
    assert_eq!(t.teams[0].name, "Time 1");
    assert_eq!(t.teams[3].color, TeamColor::Amarelo);
    assert_eq!(t.matches.len(), 12);
    assert!(t.started_at.is_some());
    assert_eq!(t.final_stage, FinalStage::AwaitingFinal);
}

#[test]
fn start_twice_is_rejected() {
    let mut t = started();
    assert_eq!(
        start_tournament(&mut t, entries()),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn setup_requires_four_teams_with_distinct_colors() {
    let mut three = entries();
    three.pop();
    assert_eq!(
        register_teams(three),
        Err(TournamentError::WrongTeamCount { expected: 4, got: 3 })
    );

    let mut dup = entries();
    dup[3].color = TeamColor::Azul;
    let mut t = Tournament::new();
    assert_eq!(
        start_tournament(&mut t, dup),
        Err(TournamentError::DuplicateColor(TeamColor::Azul))
    );
    assert_eq!(t.state, TournamentState::Setup);
    assert!(t.matches.is_empty());
}

#[test]
fn blank_names_fall_back_to_position() {
    let mut e = entries();
    e[1].name = "   ".to_string();
    e[2].name = "  Unidos ".to_string();
    let teams = register_teams(e).unwrap();
    assert_eq!(teams[1].name, "Equipe 2");
    assert_eq!(teams[2].name, "Unidos");
}

#[test]
fn scoring_before_start_or_unknown_match_fails() {
    let mut t = Tournament::new();
    assert_eq!(
        set_score(&mut t, "t1-r1-p0", Some(1), Some(0)),
        Err(TournamentError::InvalidState)
    );
    let mut t = started();
    assert_eq!(
        set_score(&mut t, "nope", Some(1), Some(0)),
        Err(TournamentError::MatchNotFound("nope".to_string()))
    );
}

#[test]
fn half_entered_score_clears_the_pair() {
    let mut t = started();
    set_score(&mut t, "t1-r1-p0", Some(3), Some(1)).unwrap();
    assert_eq!(t.matches[0].home_score(), Some(3));

    set_score(&mut t, "t1-r1-p0", Some(4), None).unwrap();
    assert_eq!(t.matches[0].score, None);
    assert_eq!(t.matches[0].away_score(), None);
    let stats = compute_standings(&t.teams, &t.matches);
    assert!(stats.iter().all(|s| s.played == 0));
}

#[test]
fn final_is_created_once_when_group_stage_completes() {
    let mut t = started();
    // Strength: third team, fourth, first, second.
    let strength = ids(&t, [2, 3, 0, 1]);

    score_by_strength(&mut t, &strength, 11);
    assert!(t.final_match().is_none());
    assert!(!update_final_stage(&mut t));

    score_by_strength(&mut t, &strength, 12);
    let final_match = t.final_match().cloned().unwrap();
    assert_eq!(final_match.home_team_id, strength[0]);
    assert_eq!(final_match.away_team_id, strength[1]);
    assert_eq!(final_match.round, FINAL_ROUND);
    assert_eq!(final_match.stage, Stage::Final);
    assert_eq!(final_match.score, None);

    // Re-evaluating does nothing.
    assert!(!update_final_stage(&mut t));

    // Rewrite every score so the ranking flips; the final stays as it was.
    let reversed = ids(&t, [1, 0, 3, 2]);
    score_by_strength(&mut t, &reversed, 12);
    let stats = compute_standings(&t.teams, &t.matches);
    assert_eq!(stats[0].team_id, reversed[0]);
    assert_eq!(t.final_match(), Some(&final_match));

    // Clearing and re-entering a score does not re-trigger either.
    set_score(&mut t, "t1-r1-p0", None, None).unwrap();
    set_score(&mut t, "t1-r1-p0", Some(0), Some(0)).unwrap();
    assert_eq!(t.final_match(), Some(&final_match));
}

#[test]
fn final_score_decides_champion_without_touching_standings() {
    let mut t = started();
    assert_eq!(
        set_final_score(&mut t, Some(1), Some(0)),
        Err(TournamentError::FinalNotCreated)
    );

    let strength = ids(&t, [0, 1, 2, 3]);
    score_by_strength(&mut t, &strength, 12);
    let before = compute_standings(&t.teams, &t.matches);

    set_final_score(&mut t, Some(1), Some(1)).unwrap();
    assert_eq!(t.final_match().and_then(champion), None);

    set_final_score(&mut t, Some(1), Some(2)).unwrap();
    assert_eq!(t.final_match().and_then(champion), Some(strength[1]));
    assert_eq!(compute_standings(&t.teams, &t.matches), before);

    set_final_score(&mut t, Some(1), None).unwrap();
    assert_eq!(t.final_match().unwrap().score, None);
}

#[test]
fn reset_returns_to_setup_with_same_id() {
    let mut t = started();
    let strength = ids(&t, [0, 1, 2, 3]);
    score_by_strength(&mut t, &strength, 12);
    let id = t.id;

    t.reset();
    assert_eq!(t.id, id);
    assert_eq!(t.state, TournamentState::Setup);
    assert!(t.teams.is_empty());
    assert!(t.matches.is_empty());
    assert!(t.final_match().is_none());
    assert!(t.started_at.is_none());

    start_tournament(&mut t, entries()).unwrap();
    assert_eq!(t.matches.len(), 12);
}

#[test]
fn summary_serializes_derived_views() {
    let mut t = started();
    let strength = ids(&t, [1, 0, 2, 3]);
    score_by_strength(&mut t, &strength, 12);
    set_final_score(&mut t, Some(3), Some(0)).unwrap();

    let v = serde_json::to_value(TournamentSummary::new(&t)).unwrap();
    assert_eq!(v["all_matches_finished"], true);
    assert_eq!(v["standings"].as_array().unwrap().len(), 4);
    assert_eq!(v["standings"][0]["points"], 18);
    assert_eq!(v["by_efficiency"][0]["tier"], "hot");
    assert_eq!(v["by_efficiency"][0]["efficiency"], 100.0);
    assert_eq!(v["tournament"]["final_stage"]["status"], "final_created");
    assert_eq!(v["tournament"]["state"], "group_stage");
    assert_eq!(v["champion"], serde_json::json!(strength[0]));
}

#[test]
fn huge_scores_accumulate_without_overflow() {
    let mut t = started();
    let home = t.matches[0].home_team_id;
    assert_eq!(t.matches[2].home_team_id, home);

    set_score(&mut t, "t1-r1-p0", parse_score("4294967295"), Some(0)).unwrap();
    set_score(&mut t, "t1-r2-p0", Some(1), Some(0)).unwrap();

    let stats = compute_standings(&t.teams, &t.matches);
    let leader = &stats[0];
    assert_eq!(leader.team_id, home);
    assert_eq!(leader.goals_for, u64::from(u32::MAX) + 1);
    assert_eq!(leader.goal_difference, i64::from(u32::MAX) + 1);
    assert_eq!(leader.points, 6);

    let v = serde_json::to_value(TournamentSummary::new(&t)).unwrap();
    assert_eq!(v["standings"][0]["goals_for"], u64::from(u32::MAX) + 1);
}
